use crate::error::Result;
use std::collections::BTreeSet;
use tracing::debug;

pub mod constants;
pub mod layout;
pub mod types;
mod device;

pub use constants::*;
pub use device::DeviceHandle;
pub use layout::{parse_disk_geometry, parse_media_types, read_i64_le, read_u32_le};
pub use types::{DeviceMediaInfo, DiskGeometry, MediaType, MediaTypesResponse};

/// A device that answers buffered control requests with no input payload
pub trait DeviceControl {
    /// Issue `control_code` with an output buffer of `output_len` bytes and
    /// return the bytes the driver actually filled in.
    fn device_control(&self, control_code: u32, output_len: usize) -> Result<Vec<u8>>;
}

pub(crate) fn request_name(control_code: u32) -> &'static str {
    match control_code {
        IOCTL_DISK_GET_DRIVE_GEOMETRY => "IOCTL_DISK_GET_DRIVE_GEOMETRY",
        IOCTL_STORAGE_GET_MEDIA_TYPES_EX => "IOCTL_STORAGE_GET_MEDIA_TYPES_EX",
        _ => "IOCTL",
    }
}

fn device_type_name(device_type: u32) -> &'static str {
    match device_type {
        FILE_DEVICE_CD_ROM => "CD-ROM",
        FILE_DEVICE_DISK => "disk",
        FILE_DEVICE_DVD => "DVD",
        FILE_DEVICE_TAPE => "tape",
        _ => "other",
    }
}

/// IOCTL_DISK_GET_DRIVE_GEOMETRY
pub fn query_drive_geometry<D: DeviceControl + ?Sized>(device: &D) -> Result<DiskGeometry> {
    let buf = device.device_control(IOCTL_DISK_GET_DRIVE_GEOMETRY, DISK_GEOMETRY_LEN)?;
    parse_disk_geometry(&buf)
}

/// IOCTL_STORAGE_GET_MEDIA_TYPES_EX
pub fn query_media_types<D: DeviceControl + ?Sized>(device: &D) -> Result<MediaTypesResponse> {
    let buf = device.device_control(IOCTL_STORAGE_GET_MEDIA_TYPES_EX, MEDIA_TYPES_BUFFER_LEN)?;
    parse_media_types(&buf)
}

/// Run both media type queries and merge their answers.
///
/// Each query fails on its own; a failure only removes that source from the
/// result. Many devices answer just one of the two.
pub fn collect_media_types<D: DeviceControl + ?Sized>(device: &D) -> BTreeSet<MediaType> {
    let mut found = BTreeSet::new();

    match query_drive_geometry(device) {
        Ok(geometry) => {
            debug!(
                "Drive geometry: media type {}, {} cylinders, {} tracks/cylinder, {} sectors/track, {} bytes/sector",
                geometry.media_type_code,
                geometry.cylinders,
                geometry.tracks_per_cylinder,
                geometry.sectors_per_track,
                geometry.bytes_per_sector
            );
            found.insert(geometry.media_type());
        }
        Err(e) => debug!("Drive geometry unavailable: {}", e),
    }

    match query_media_types(device) {
        Ok(response) => {
            debug!(
                "Media types: device type 0x{:02X} ({}), {} record(s)",
                response.device_type,
                device_type_name(response.device_type),
                response.media_info.len()
            );
            for info in &response.media_info {
                debug!(
                    "  media type {}, {} side(s), characteristics 0x{:08X}",
                    info.media_type_code, info.number_media_sides, info.media_characteristics
                );
            }
            found.extend(response.media_types());
        }
        Err(e) => debug!("Media types unavailable: {}", e),
    }

    found
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DeviceControl;
    use crate::error::{MediaDetectError, Result};
    use std::collections::HashMap;

    /// In-memory device returning canned responses per control code
    #[derive(Default)]
    pub struct FakeDevice {
        responses: HashMap<u32, Vec<u8>>,
    }

    impl FakeDevice {
        pub fn with_response(mut self, control_code: u32, bytes: Vec<u8>) -> Self {
            self.responses.insert(control_code, bytes);
            self
        }
    }

    impl DeviceControl for FakeDevice {
        fn device_control(&self, control_code: u32, output_len: usize) -> Result<Vec<u8>> {
            match self.responses.get(&control_code) {
                Some(bytes) => Ok(bytes.iter().copied().take(output_len).collect()),
                None => Err(MediaDetectError::query_unsupported(format!(
                    "0x{:08X}",
                    control_code
                ))),
            }
        }
    }

    pub fn geometry_bytes(code: u32) -> Vec<u8> {
        let mut buf = vec![0u8; 24];
        buf[8..12].copy_from_slice(&code.to_le_bytes());
        buf
    }

    pub fn media_types_bytes(codes: &[u32]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0x07u32.to_le_bytes());
        buf.extend_from_slice(&(codes.len() as u32).to_le_bytes());
        for code in codes {
            let mut record = [0u8; 32];
            record[8..12].copy_from_slice(&code.to_le_bytes());
            buf.extend_from_slice(&record);
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{geometry_bytes, media_types_bytes, FakeDevice};
    use super::*;

    #[test]
    fn test_duplicate_codes_collapse() {
        let device = FakeDevice::default()
            .with_response(IOCTL_DISK_GET_DRIVE_GEOMETRY, geometry_bytes(12))
            .with_response(IOCTL_STORAGE_GET_MEDIA_TYPES_EX, media_types_bytes(&[12, 12]));

        let found = collect_media_types(&device);
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![MediaType::FixedMedia]);
    }

    #[test]
    fn test_both_sources_merge() {
        let device = FakeDevice::default()
            .with_response(IOCTL_DISK_GET_DRIVE_GEOMETRY, geometry_bytes(11))
            .with_response(IOCTL_STORAGE_GET_MEDIA_TYPES_EX, media_types_bytes(&[12, 51]));

        let labels: Vec<&str> = collect_media_types(&device).iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["RemovableMedia", "FixedMedia", "CD_ROM"]);
    }

    #[test]
    fn test_each_query_fails_independently() {
        let geometry_only =
            FakeDevice::default().with_response(IOCTL_DISK_GET_DRIVE_GEOMETRY, geometry_bytes(51));
        assert_eq!(
            collect_media_types(&geometry_only).into_iter().collect::<Vec<_>>(),
            vec![MediaType::CD_ROM]
        );

        let media_types_only = FakeDevice::default()
            .with_response(IOCTL_STORAGE_GET_MEDIA_TYPES_EX, media_types_bytes(&[54]));
        assert_eq!(
            collect_media_types(&media_types_only).into_iter().collect::<Vec<_>>(),
            vec![MediaType::DVD_ROM]
        );
    }

    #[test]
    fn test_no_answers_yield_empty_set() {
        assert!(collect_media_types(&FakeDevice::default()).is_empty());
    }

    #[test]
    fn test_malformed_media_types_keeps_geometry() {
        let mut bad = media_types_bytes(&[51]);
        bad[4..8].copy_from_slice(&40u32.to_le_bytes());
        let device = FakeDevice::default()
            .with_response(IOCTL_DISK_GET_DRIVE_GEOMETRY, geometry_bytes(12))
            .with_response(IOCTL_STORAGE_GET_MEDIA_TYPES_EX, bad);

        assert_eq!(
            collect_media_types(&device).into_iter().collect::<Vec<_>>(),
            vec![MediaType::FixedMedia]
        );
    }

    #[test]
    fn test_unlisted_code_reports_unknown() {
        let device = FakeDevice::default()
            .with_response(IOCTL_DISK_GET_DRIVE_GEOMETRY, geometry_bytes(0))
            .with_response(IOCTL_STORAGE_GET_MEDIA_TYPES_EX, media_types_bytes(&[200]));

        assert_eq!(
            collect_media_types(&device).into_iter().collect::<Vec<_>>(),
            vec![MediaType::Unknown]
        );
    }

    #[test]
    fn test_device_type_name() {
        assert_eq!(device_type_name(FILE_DEVICE_DVD), "DVD");
        assert_eq!(device_type_name(0x99), "other");
    }

    #[test]
    fn test_request_name() {
        assert_eq!(
            request_name(IOCTL_STORAGE_GET_MEDIA_TYPES_EX),
            "IOCTL_STORAGE_GET_MEDIA_TYPES_EX"
        );
    }
}
