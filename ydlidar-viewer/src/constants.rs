use ydlidar_data::SensorType;

pub const DEFAULT_SDK_PATH: &str = "/usr/local/lib/libydlidar_sdk.so";
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUD_RATE: u32 = 230400;
pub const DEFAULT_SENSOR_TYPE: SensorType = SensorType::TRIANGLE;
// Fixed number of samples the X2 returns per lap
pub const DEFAULT_N_POINTS: usize = 269;
pub const DEFAULT_CYCLE_DELAY_MS: u64 = 50;

pub const WINDOW_TITLE: &str = "YDLiDAR X2 Live Scan";
pub const WINDOW_SIZE: u32 = 800;
pub const DEFAULT_PLOT_RANGE: f64 = 64.;
pub const DEFAULT_FPS: u64 = 60;
pub(crate) const POINT_RADIUS: i32 = 2;

pub(crate) const SYM_INIT: &[u8] = b"ydlidarInit\0";
pub(crate) const SYM_TURN_ON: &[u8] = b"ydlidarTurnOn\0";
pub(crate) const SYM_GRAB: &[u8] = b"ydlidarGrab\0";
pub(crate) const SYM_TURN_OFF: &[u8] = b"ydlidarTurnOff\0";
