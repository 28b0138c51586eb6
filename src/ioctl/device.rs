//! Drive Device Access
//!
//! This module opens the device object behind a logical drive and issues
//! buffered device-control requests against it.

use crate::drive::DriveLetter;
use crate::error::Result;
use tracing::debug;

#[cfg(windows)]
use crate::error::MediaDetectError;
#[cfg(windows)]
use std::ffi::CString;
#[cfg(windows)]
use winapi::{
    shared::{
        minwindef::{DWORD, LPVOID},
        ntdef::HANDLE,
        winerror::{ERROR_INVALID_FUNCTION, ERROR_NOT_SUPPORTED},
    },
    um::{
        errhandlingapi::GetLastError,
        fileapi::{CreateFileA, OPEN_EXISTING},
        handleapi::{CloseHandle, INVALID_HANDLE_VALUE},
        ioapiset::DeviceIoControl,
        winnt::FILE_SHARE_READ,
    },
};

use super::{request_name, DeviceControl};

/// Device handle wrapper that closes the handle when dropped
pub struct DeviceHandle {
    #[cfg(windows)]
    handle: HANDLE,
    device_path: String,
}

impl DeviceHandle {
    /// Open the drive's device object for control queries only.
    ///
    /// No read/write access is requested, other processes may keep reading,
    /// and the device must already exist.
    pub fn open(drive: DriveLetter) -> Result<Self> {
        let device_path = drive.device_path();
        debug!("Opening device: {}", device_path);

        #[cfg(windows)]
        {
            let path_cstring = CString::new(device_path.clone()).map_err(|e| {
                MediaDetectError::device_access(
                    drive.letter(),
                    format!("device path conversion error: {}", e),
                )
            })?;

            let handle = unsafe {
                CreateFileA(
                    path_cstring.as_ptr(),
                    0,
                    FILE_SHARE_READ,
                    std::ptr::null_mut(),
                    OPEN_EXISTING,
                    0,
                    std::ptr::null_mut(),
                )
            };

            if handle == INVALID_HANDLE_VALUE {
                let error_code = unsafe { GetLastError() };
                return Err(MediaDetectError::device_access(
                    drive.letter(),
                    format!(
                        "cannot open {}: Windows error code 0x{:08X}",
                        device_path, error_code
                    ),
                ));
            }

            debug!("Device opened successfully: {}", device_path);
            Ok(Self {
                handle,
                device_path,
            })
        }

        #[cfg(not(windows))]
        {
            Err(crate::error::MediaDetectError::device_access(
                drive.letter(),
                format!("cannot open {}: unsupported platform", device_path),
            ))
        }
    }

    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}

impl DeviceControl for DeviceHandle {
    fn device_control(&self, control_code: u32, output_len: usize) -> Result<Vec<u8>> {
        let request = request_name(control_code);
        debug!("{} on {} ({} byte buffer)", request, self.device_path, output_len);

        #[cfg(windows)]
        {
            let mut buffer = vec![0u8; output_len];
            let mut bytes_returned: DWORD = 0;

            let ok = unsafe {
                DeviceIoControl(
                    self.handle,
                    control_code,
                    std::ptr::null_mut(),
                    0,
                    buffer.as_mut_ptr() as LPVOID,
                    buffer.len() as DWORD,
                    &mut bytes_returned,
                    std::ptr::null_mut(),
                )
            } != 0;

            if !ok {
                let error_code = unsafe { GetLastError() };
                return Err(match error_code {
                    ERROR_INVALID_FUNCTION | ERROR_NOT_SUPPORTED => {
                        MediaDetectError::query_unsupported(format!(
                            "{} on {}",
                            request, self.device_path
                        ))
                    }
                    _ => MediaDetectError::query_failed(request, error_code),
                });
            }

            buffer.truncate(bytes_returned as usize);
            Ok(buffer)
        }

        #[cfg(not(windows))]
        {
            let _ = output_len;
            Err(crate::error::MediaDetectError::query_unsupported(format!(
                "{} on {}: unsupported platform",
                request, self.device_path
            )))
        }
    }
}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        #[cfg(windows)]
        unsafe {
            if self.handle != INVALID_HANDLE_VALUE {
                CloseHandle(self.handle);
            }
        }
        debug!("Device handle closed: {}", self.device_path);
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;
    use crate::error::MediaDetectError;

    #[test]
    fn test_open_fails_off_windows() {
        let drive: DriveLetter = "C".parse().unwrap();
        assert!(matches!(
            DeviceHandle::open(drive),
            Err(MediaDetectError::DeviceAccess { drive: 'C', .. })
        ));
    }
}
