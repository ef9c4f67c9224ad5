use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// LiDAR type code understood by the YDLidar SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorType(pub i32);

impl SensorType {
    /// Triangulation sensors such as the X2.
    pub const TRIANGLE: SensorType = SensorType(6);

    pub fn code(self) -> i32 {
        self.0
    }
}

impl From<i32> for SensorType {
    fn from(code: i32) -> Self {
        SensorType(code)
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SensorType::TRIANGLE => write!(f, "triangle ({})", self.0),
            SensorType(code) => write!(f, "{}", code),
        }
    }
}

/// Accepts either a type name or the raw numeric code.
impl FromStr for SensorType {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangle" => Ok(SensorType::TRIANGLE),
            other => other.parse::<i32>().map(SensorType::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sensor_type() {
        assert_eq!("triangle".parse::<SensorType>(), Ok(SensorType::TRIANGLE));
        assert_eq!("TRIANGLE".parse::<SensorType>(), Ok(SensorType::TRIANGLE));
        assert_eq!("6".parse::<SensorType>(), Ok(SensorType(6)));
        assert_eq!(" 1 ".parse::<SensorType>(), Ok(SensorType(1)));
        assert!("lidar".parse::<SensorType>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SensorType::TRIANGLE.to_string(), "triangle (6)");
        assert_eq!(SensorType(0).to_string(), "0");
    }
}
