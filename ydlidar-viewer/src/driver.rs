use crate::error::{GrabError, InitError};
use ydlidar_data::{ScanFrame, SensorType};

/// Operations the viewer needs from a LiDAR driver.
///
/// `Handle` is an opaque token for the open device. It is handed back to
/// every call and must not be used after `power_off`.
pub trait LidarDriver {
    type Handle;

    fn initialize(
        &self,
        port: &str,
        baud_rate: u32,
        sensor_type: SensorType,
    ) -> Result<Self::Handle, InitError>;

    fn power_on(&self, handle: &mut Self::Handle) -> bool;

    /// Overwrites both buffers with one lap. They always have the same length.
    fn grab_scan(
        &self,
        handle: &mut Self::Handle,
        distances: &mut [f32],
        angles: &mut [f32],
    ) -> bool;

    fn power_off(&self, handle: &mut Self::Handle);
}

/// Where and how to open the sensor.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorSettings {
    /// Serial port name such as `/dev/ttyUSB0`.
    pub port: String,
    pub baud_rate: u32,
    pub sensor_type: SensorType,
}

/// A sensor that is initialized and spinning.
///
/// Powers the sensor off exactly once, either through `shutdown` or when
/// dropped.
pub struct SensorSession<'d, D: LidarDriver> {
    driver: &'d D,
    handle: Option<D::Handle>,
}

impl<'d, D: LidarDriver> SensorSession<'d, D> {
    pub fn open(driver: &'d D, settings: &SensorSettings) -> Result<Self, InitError> {
        let mut handle =
            driver.initialize(&settings.port, settings.baud_rate, settings.sensor_type)?;
        if !driver.power_on(&mut handle) {
            // Never powered on, so there is nothing to power off.
            return Err(InitError::PowerOn);
        }
        Ok(SensorSession {
            driver,
            handle: Some(handle),
        })
    }

    pub fn grab(&mut self, frame: &mut ScanFrame) -> Result<(), GrabError> {
        let handle = self.handle.as_mut().ok_or(GrabError)?;
        let (distances, angles) = frame.buffers_mut();
        if self.driver.grab_scan(handle, distances, angles) {
            Ok(())
        } else {
            Err(GrabError)
        }
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Powers the sensor off. Later calls do nothing.
    pub fn shutdown(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            self.driver.power_off(&mut handle);
        }
    }
}

impl<D: LidarDriver> Drop for SensorSession<'_, D> {
    fn drop(&mut self) {
        self.shutdown();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedDriver;
    use super::*;

    fn settings() -> SensorSettings {
        SensorSettings {
            port: "/dev/ttyUSB0".to_string(),
            baud_rate: 230400,
            sensor_type: SensorType::TRIANGLE,
        }
    }

    #[test]
    fn test_open_passes_settings() {
        let driver = ScriptedDriver::new(vec![]);
        let session = SensorSession::open(&driver, &settings()).unwrap();
        assert!(session.is_open());
        assert_eq!(
            *driver.last_settings.borrow(),
            Some(("/dev/ttyUSB0".to_string(), 230400, SensorType::TRIANGLE))
        );
        assert_eq!(driver.power_on_calls.get(), 1);
    }

    #[test]
    fn test_initialize_failure() {
        let mut driver = ScriptedDriver::new(vec![]);
        driver.fail_initialize = true;
        let result = SensorSession::open(&driver, &settings());
        assert!(matches!(result, Err(InitError::Initialize { .. })));
        assert_eq!(driver.initialize_calls.get(), 1);
        assert_eq!(driver.power_on_calls.get(), 0);
        assert_eq!(driver.power_off_calls.get(), 0);
    }

    #[test]
    fn test_power_on_failure_skips_power_off() {
        let mut driver = ScriptedDriver::new(vec![]);
        driver.fail_power_on = true;
        let result = SensorSession::open(&driver, &settings());
        assert!(matches!(result, Err(InitError::PowerOn)));
        assert_eq!(driver.power_off_calls.get(), 0);
    }

    #[test]
    fn test_grab_fills_frame() {
        let driver = ScriptedDriver::new(vec![Some(vec![(1.0, 0.0), (2.0, 0.5)]), None]);
        let mut session = SensorSession::open(&driver, &settings()).unwrap();
        let mut frame = ScanFrame::new(2);

        assert_eq!(session.grab(&mut frame), Ok(()));
        assert_eq!(frame.distances(), &[1.0, 2.0]);
        assert_eq!(frame.angles_radian(), &[0.0, 0.5]);

        assert_eq!(session.grab(&mut frame), Err(GrabError));
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let driver = ScriptedDriver::new(vec![]);
        let mut session = SensorSession::open(&driver, &settings()).unwrap();
        session.shutdown();
        session.shutdown();
        assert!(!session.is_open());
        drop(session);
        assert_eq!(driver.power_off_calls.get(), 1);
    }

    #[test]
    fn test_grab_after_shutdown_fails() {
        let driver = ScriptedDriver::new(vec![Some(vec![(1.0, 0.0)])]);
        let mut session = SensorSession::open(&driver, &settings()).unwrap();
        session.shutdown();
        let mut frame = ScanFrame::new(1);
        assert_eq!(session.grab(&mut frame), Err(GrabError));
        assert_eq!(driver.grab_calls.get(), 0);
    }

    #[test]
    fn test_drop_powers_off() {
        let driver = ScriptedDriver::new(vec![]);
        {
            let _session = SensorSession::open(&driver, &settings()).unwrap();
        }
        assert_eq!(driver.power_off_calls.get(), 1);
    }
}
