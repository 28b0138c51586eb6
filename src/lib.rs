//! Media type detection for logical Windows drives
//!
//! Opens the device behind a drive letter, asks the storage stack for the
//! drive geometry and the supported media types, and decodes both answers
//! into media type labels.

pub mod cli;
pub mod commands;
pub mod display;
pub mod drive;
pub mod error;
pub mod ioctl;
pub mod logger;


// Re-export key types for easier use
pub use drive::DriveLetter;
pub use error::{MediaDetectError, Result};
pub use ioctl::{
    collect_media_types, query_drive_geometry, query_media_types, DeviceControl, DeviceHandle,
    MediaType,
};
