use crate::constants::{SYM_GRAB, SYM_INIT, SYM_TURN_OFF, SYM_TURN_ON};
use crate::driver::LidarDriver;
use crate::error::{InitError, ViewerError};
use libloading::Library;
use std::ffi::{c_char, c_float, c_int, c_void, CString};
use std::path::Path;
use ydlidar_data::SensorType;

type InitFn = unsafe extern "C" fn(*mut c_void, *const c_char, c_int, c_int) -> bool;
type TurnOnFn = unsafe extern "C" fn(*mut c_void) -> bool;
type GrabFn = unsafe extern "C" fn(*mut c_void, *mut c_float, *mut c_float, c_int) -> bool;
type TurnOffFn = unsafe extern "C" fn(*mut c_void);

/// Device handle passed to every SDK call.
///
/// The SDK wrapper keeps the device state itself and receives a null handle
/// by value, so this token is only threaded through unchanged.
pub struct SdkHandle(*mut c_void);

/// The YDLidar SDK shared library, loaded at runtime.
pub struct YdlidarSdk {
    init: InitFn,
    turn_on: TurnOnFn,
    grab: GrabFn,
    turn_off: TurnOffFn,
    // Keeps the function pointers above valid.
    _library: Library,
}

impl YdlidarSdk {
    pub fn load(path: impl AsRef<Path>) -> Result<YdlidarSdk, ViewerError> {
        let path = path.as_ref();
        // SAFETY: loading runs the library's initializers. The SDK is trusted
        // native code chosen by the user.
        let library = unsafe { Library::new(path) }.map_err(|source| ViewerError::SdkLoad {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: the signatures match the exported C functions.
        unsafe {
            let init = *symbol::<InitFn>(&library, SYM_INIT)?;
            let turn_on = *symbol::<TurnOnFn>(&library, SYM_TURN_ON)?;
            let grab = *symbol::<GrabFn>(&library, SYM_GRAB)?;
            let turn_off = *symbol::<TurnOffFn>(&library, SYM_TURN_OFF)?;
            log::debug!("Loaded YDLidar SDK from {}", path.display());
            Ok(YdlidarSdk {
                init,
                turn_on,
                grab,
                turn_off,
                _library: library,
            })
        }
    }
}

unsafe fn symbol<'l, T>(
    library: &'l Library,
    name: &[u8],
) -> Result<libloading::Symbol<'l, T>, ViewerError> {
    library
        .get::<T>(name)
        .map_err(|source| ViewerError::MissingSymbol {
            symbol: symbol_name(name),
            source,
        })
}

fn symbol_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name.strip_suffix(b"\0").unwrap_or(name)).into_owned()
}

fn to_c_int(name: &'static str, value: u64) -> Result<c_int, InitError> {
    c_int::try_from(value).map_err(|_| InitError::OutOfRange { name, value })
}

/// Converts the `ydlidarInit` arguments to their C form.
pub(crate) fn init_args(port: &str, baud_rate: u32) -> Result<(CString, c_int), InitError> {
    let c_port = CString::new(port).map_err(|_| InitError::InvalidPort(port.to_string()))?;
    let c_baud_rate = to_c_int("baud_rate", baud_rate.into())?;
    Ok((c_port, c_baud_rate))
}

/// Sample count as passed to `ydlidarGrab`.
pub(crate) fn point_count(n_points: usize) -> Result<c_int, InitError> {
    to_c_int("n_points", n_points as u64)
}

impl LidarDriver for YdlidarSdk {
    type Handle = SdkHandle;

    fn initialize(
        &self,
        port: &str,
        baud_rate: u32,
        sensor_type: SensorType,
    ) -> Result<SdkHandle, InitError> {
        let (c_port, c_baud_rate) = init_args(port, baud_rate)?;
        let handle = SdkHandle(std::ptr::null_mut());

        // SAFETY: `c_port` outlives the call.
        let ok = unsafe {
            (self.init)(
                handle.0,
                c_port.as_ptr(),
                c_baud_rate,
                sensor_type.code(),
            )
        };
        if !ok {
            return Err(InitError::Initialize {
                port: port.to_string(),
                baud_rate,
            });
        }
        Ok(handle)
    }

    fn power_on(&self, handle: &mut SdkHandle) -> bool {
        // SAFETY: `ydlidarInit` succeeded for this handle.
        unsafe { (self.turn_on)(handle.0) }
    }

    fn grab_scan(
        &self,
        handle: &mut SdkHandle,
        distances: &mut [f32],
        angles: &mut [f32],
    ) -> bool {
        let n = match point_count(distances.len().min(angles.len())) {
            Ok(n) => n,
            Err(e) => {
                log::error!("{e}");
                return false;
            }
        };
        // SAFETY: both buffers hold at least `n` floats and are exclusively borrowed.
        unsafe { (self.grab)(handle.0, distances.as_mut_ptr(), angles.as_mut_ptr(), n) }
    }

    fn power_off(&self, handle: &mut SdkHandle) {
        // SAFETY: `ydlidarInit` succeeded for this handle.
        unsafe { (self.turn_off)(handle.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_library() {
        let result = YdlidarSdk::load("/nonexistent/libydlidar_sdk.so");
        match result {
            Err(ViewerError::SdkLoad { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/libydlidar_sdk.so"))
            }
            _ => panic!("expected SdkLoad error"),
        }
    }

    #[test]
    fn test_symbol_name() {
        assert_eq!(symbol_name(SYM_INIT), "ydlidarInit");
        assert_eq!(symbol_name(b"ydlidarGrab"), "ydlidarGrab");
    }

    #[test]
    fn test_to_c_int() {
        assert_eq!(to_c_int("baud_rate", 230400).unwrap(), 230400);
        assert!(matches!(
            to_c_int("baud_rate", u64::from(u32::MAX)),
            Err(InitError::OutOfRange { name: "baud_rate", .. })
        ));
    }

    #[test]
    fn test_init_args() {
        let (port, baud_rate) = init_args("/dev/ttyUSB0", 230400).unwrap();
        assert_eq!(port.as_bytes(), b"/dev/ttyUSB0");
        assert_eq!(baud_rate, 230400);

        assert!(matches!(
            init_args("/dev/tty\0USB0", 230400),
            Err(InitError::InvalidPort(p)) if p == "/dev/tty\0USB0"
        ));
        assert!(matches!(
            init_args("/dev/ttyUSB0", u32::MAX),
            Err(InitError::OutOfRange { name: "baud_rate", value }) if value == u64::from(u32::MAX)
        ));
    }

    #[test]
    fn test_point_count() {
        assert_eq!(point_count(269).unwrap(), 269);
        assert_eq!(point_count(i32::MAX as usize).unwrap(), i32::MAX);
        assert!(matches!(
            point_count(3_000_000_000),
            Err(InitError::OutOfRange { name: "n_points", value: 3_000_000_000 })
        ));
    }
}
