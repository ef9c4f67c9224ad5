use ydlidar_viewer::{
    install_interrupt_handler, run_viewer, PistonRenderer, ViewerConfig, ViewerError, YdlidarSdk,
};

fn run(config: &ViewerConfig) -> Result<(), ViewerError> {
    let sdk = YdlidarSdk::load(&config.sdk_path)?;
    let terminator_rx = install_interrupt_handler()?;

    let summary = run_viewer(&sdk, config, terminator_rx, PistonRenderer::open)?;
    log::info!(
        "Stopped ({:?}) after {} frames, {} failed grabs",
        summary.stop_reason,
        summary.frames_rendered,
        summary.failed_grabs
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from_args();
    if let Err(e) = run(&config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
