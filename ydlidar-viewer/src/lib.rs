//! Live scan viewer for YDLiDAR sensors.
//!
//! The sensor is driven through the vendor SDK shared library. Each cycle
//! grabs one lap into a preallocated [`ScanFrame`], converts it to Cartesian
//! points and redraws a scatter plot.

mod acquisition;
mod config;
mod constants;
mod driver;
mod error;
mod numeric;
mod plot;
mod sdk;
mod signal;
mod time;

pub use crate::acquisition::{AcquisitionLoop, LoopState, LoopSummary, StopReason};
pub use crate::config::{command, ViewerConfig};
pub use crate::constants::*;
pub use crate::driver::{LidarDriver, SensorSession, SensorSettings};
pub use crate::error::{GrabError, InitError, ViewerError};
pub use crate::numeric::{frame_to_points, polar_to_cartesian};
pub use crate::plot::{PistonRenderer, PlotSettings, RenderStatus, ScanRenderer};
pub use crate::sdk::{SdkHandle, YdlidarSdk};
pub use crate::signal::install_interrupt_handler;
pub use ydlidar_data::{Point2D, ScanFrame, ScanSample, SensorType};

use crossbeam_channel::Receiver;

/// Function to run the viewer until interrupted.
/// # Arguments
///
/// * `driver` - Driver the sensor is opened with.
/// * `config` - Sensor, loop and plot settings.
/// * `terminator_rx` - Receiving `true` stops the loop.
/// * `open_renderer` - Creates the display. Only called once the sensor is running.
pub fn run_viewer<D, R, F>(
    driver: &D,
    config: &ViewerConfig,
    terminator_rx: Receiver<bool>,
    open_renderer: F,
) -> Result<LoopSummary, ViewerError>
where
    D: LidarDriver,
    R: ScanRenderer,
    F: FnOnce(&PlotSettings) -> Result<R, ViewerError>,
{
    log::info!(
        "Opening {} at {} baud (type {})",
        config.sensor.port,
        config.sensor.baud_rate,
        config.sensor.sensor_type
    );
    // The sample count crosses the C boundary on every grab.
    sdk::point_count(config.n_points)?;
    let session = SensorSession::open(driver, &config.sensor)?;
    log::info!("LiDAR initialized and running!");

    // Dropping `session` on error powers the sensor off.
    let renderer = open_renderer(&config.plot)?;

    let mut acquisition = AcquisitionLoop::new(
        session,
        renderer,
        config.n_points,
        terminator_rx,
        config.cycle_delay_ms,
    );
    Ok(acquisition.run())
}
