use crate::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_CYCLE_DELAY_MS, DEFAULT_N_POINTS, DEFAULT_PORT, DEFAULT_SDK_PATH,
    DEFAULT_SENSOR_TYPE,
};
use crate::driver::SensorSettings;
use crate::plot::PlotSettings;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::str::FromStr;
use ydlidar_data::SensorType;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Path to `libydlidar_sdk.so`.
    pub sdk_path: PathBuf,
    pub sensor: SensorSettings,
    pub plot: PlotSettings,
    /// Samples requested per scan.
    pub n_points: usize,
    /// Pause after each rendered frame.
    pub cycle_delay_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            sdk_path: PathBuf::from(DEFAULT_SDK_PATH),
            sensor: SensorSettings {
                port: DEFAULT_PORT.to_string(),
                baud_rate: DEFAULT_BAUD_RATE,
                sensor_type: DEFAULT_SENSOR_TYPE,
            },
            plot: PlotSettings::default(),
            n_points: DEFAULT_N_POINTS,
            cycle_delay_ms: DEFAULT_CYCLE_DELAY_MS,
        }
    }
}

pub fn command() -> Command {
    Command::new("ydlidar-viewer")
        .about("Reads scans from a YDLiDAR through the vendor SDK and plots them live.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .use_value_delimiter(false),
        )
        .arg(
            Arg::new("baud-rate")
                .long("baud-rate")
                .help("Serial baud rate")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("lidar-type")
                .long("lidar-type")
                .help("SDK LiDAR type, either a number or \"triangle\"")
                .value_parser(SensorType::from_str),
        )
        .arg(
            Arg::new("points")
                .long("points")
                .help("Number of samples per scan")
                .value_parser(value_parser!(u32).range(1..=i32::MAX as i64)),
        )
        .arg(
            Arg::new("sdk")
                .long("sdk")
                .help("Path to the YDLidar SDK shared library")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .help("Pause between scans in milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("range")
                .long("range")
                .help("Half width of the plotted area")
                .value_parser(parse_range),
        )
        .arg(
            Arg::new("fps")
                .long("fps")
                .help("Maximum window refresh rate")
                .value_parser(value_parser!(u64).range(1..)),
        )
}

fn parse_range(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(range) if range.is_finite() && range > 0. => Ok(range),
        Ok(_) => Err("range must be a positive number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

impl ViewerConfig {
    pub fn from_matches(matches: &ArgMatches) -> ViewerConfig {
        let mut config = ViewerConfig::default();
        if let Some(port) = matches.get_one::<String>("port") {
            config.sensor.port = port.clone();
        }
        if let Some(baud_rate) = matches.get_one::<u32>("baud-rate") {
            config.sensor.baud_rate = *baud_rate;
        }
        if let Some(sensor_type) = matches.get_one::<SensorType>("lidar-type") {
            config.sensor.sensor_type = *sensor_type;
        }
        if let Some(n_points) = matches.get_one::<u32>("points") {
            config.n_points = *n_points as usize;
        }
        if let Some(sdk_path) = matches.get_one::<PathBuf>("sdk") {
            config.sdk_path = sdk_path.clone();
        }
        if let Some(delay) = matches.get_one::<u64>("delay-ms") {
            config.cycle_delay_ms = *delay;
        }
        if let Some(range) = matches.get_one::<f64>("range") {
            config.plot.range = *range;
        }
        if let Some(fps) = matches.get_one::<u64>("fps") {
            config.plot.max_fps = *fps;
        }
        config
    }

    /// Parses the process arguments. Exits with a usage message on bad input.
    pub fn from_args() -> ViewerConfig {
        ViewerConfig::from_matches(&command().get_matches())
    }
}
