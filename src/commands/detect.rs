//! Detect Command Handler
//!
//! Queries each drive in turn and prints its media types.

use crate::display;
use crate::drive::DriveLetter;
use crate::error::Result;
use crate::ioctl::{self, DeviceControl, DeviceHandle};
use std::collections::BTreeSet;
use std::io::{self, Write};
use tracing::{debug, error};

pub fn execute(drives: Vec<DriveLetter>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report_drives(&mut out, &drives, DeviceHandle::open)?;
    out.flush()?;
    Ok(())
}

/// Report every drive in input order. A drive that cannot be opened is
/// logged and reported with no media types; the remaining drives still run.
pub fn report_drives<W, D, F>(out: &mut W, drives: &[DriveLetter], mut open: F) -> Result<()>
where
    W: Write,
    D: DeviceControl,
    F: FnMut(DriveLetter) -> Result<D>,
{
    display::write_header(out)?;

    for &drive in drives {
        debug!("Processing drive {}", drive);

        // The handle is dropped, and closed, before the drive block is written.
        let media_types = match open(drive) {
            Ok(device) => ioctl::collect_media_types(&device),
            Err(e) => {
                error!("{}", e);
                BTreeSet::new()
            }
        };

        display::write_drive(out, drive, &media_types)?;
    }

    Ok(())
}
