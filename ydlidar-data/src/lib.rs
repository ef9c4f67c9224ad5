pub mod point;
pub mod scan;
pub mod sensor_type;

pub use point::Point2D;
pub use scan::{ScanFrame, ScanSample};
pub use sensor_type::SensorType;
