use std::path::PathBuf;

/// Failure while bringing the sensor up. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to initialize LiDAR on \"{port}\" at {baud_rate} baud")]
    Initialize { port: String, baud_rate: u32 },
    #[error("Failed to turn on LiDAR")]
    PowerOn,
    #[error("Port name {0:?} contains a nul byte")]
    InvalidPort(String),
    #[error("{name} = {value} does not fit in a C int")]
    OutOfRange { name: &'static str, value: u64 },
}

/// A single acquisition returned no data. The loop skips the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Failed to grab scan")]
pub struct GrabError;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Failed to load the YDLidar SDK from {}: {source}", .path.display())]
    SdkLoad {
        path: PathBuf,
        source: libloading::Error,
    },
    #[error("The YDLidar SDK does not export `{symbol}`: {source}")]
    MissingSymbol {
        symbol: String,
        source: libloading::Error,
    },
    #[error(transparent)]
    Init(#[from] InitError),
    #[error("Failed to open the plot window: {0}")]
    Window(String),
    #[error("Failed to install the interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
