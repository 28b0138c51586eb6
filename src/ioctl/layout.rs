//! Response Layout Parsing
//!
//! Fixed-offset, little-endian field extraction from device-control output
//! buffers. Every read is bounds-checked; a short buffer is a
//! `MalformedResponse`, never a panic.

use crate::error::{MediaDetectError, Result};
use tracing::debug;

use super::constants::{disk_geometry, media_types, DISK_GEOMETRY_LEN, FILE_DEVICE_TAPE};
use super::types::{DeviceMediaInfo, DiskGeometry, MediaTypesResponse};

fn field<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| buf.get(offset..end))
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            MediaDetectError::malformed_response(format!(
                "{}-byte field at offset {} exceeds {}-byte buffer",
                N,
                offset,
                buf.len()
            ))
        })
}

pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
    field::<4>(buf, offset).map(u32::from_le_bytes)
}

pub fn read_i64_le(buf: &[u8], offset: usize) -> Result<i64> {
    field::<8>(buf, offset).map(i64::from_le_bytes)
}

/// Parse a `DISK_GEOMETRY` structure
pub fn parse_disk_geometry(buf: &[u8]) -> Result<DiskGeometry> {
    if buf.len() < DISK_GEOMETRY_LEN {
        return Err(MediaDetectError::malformed_response(format!(
            "DISK_GEOMETRY needs {} bytes, got {}",
            DISK_GEOMETRY_LEN,
            buf.len()
        )));
    }

    Ok(DiskGeometry {
        cylinders: read_i64_le(buf, disk_geometry::CYLINDERS)?,
        media_type_code: read_u32_le(buf, disk_geometry::MEDIA_TYPE)?,
        tracks_per_cylinder: read_u32_le(buf, disk_geometry::TRACKS_PER_CYLINDER)?,
        sectors_per_track: read_u32_le(buf, disk_geometry::SECTORS_PER_TRACK)?,
        bytes_per_sector: read_u32_le(buf, disk_geometry::BYTES_PER_SECTOR)?,
    })
}

fn parse_media_info(record: &[u8]) -> Result<DeviceMediaInfo> {
    Ok(DeviceMediaInfo {
        cylinders: read_i64_le(record, media_types::CYLINDERS)?,
        media_type_code: read_u32_le(record, media_types::MEDIA_TYPE)?,
        tracks_per_cylinder: read_u32_le(record, media_types::TRACKS_PER_CYLINDER)?,
        sectors_per_track: read_u32_le(record, media_types::SECTORS_PER_TRACK)?,
        bytes_per_sector: read_u32_le(record, media_types::BYTES_PER_SECTOR)?,
        number_media_sides: read_u32_le(record, media_types::NUMBER_MEDIA_SIDES)?,
        media_characteristics: read_u32_le(record, media_types::MEDIA_CHARACTERISTICS)?,
    })
}

/// Parse a `GET_MEDIA_TYPES` structure: an 8-byte header followed by
/// `MediaInfoCount` 32-byte `DEVICE_MEDIA_INFO` records.
///
/// A count that claims more records than `buf` holds fails the whole parse.
pub fn parse_media_types(buf: &[u8]) -> Result<MediaTypesResponse> {
    let device_type = read_u32_le(buf, media_types::DEVICE_TYPE)?;
    let count = read_u32_le(buf, media_types::MEDIA_INFO_COUNT)? as usize;

    let records = buf.get(media_types::FIRST_RECORD..).unwrap_or(&[]);
    let needed = count.checked_mul(media_types::RECORD_LEN).ok_or_else(|| {
        MediaDetectError::malformed_response(format!("media info count {} overflows", count))
    })?;
    if needed > records.len() {
        return Err(MediaDetectError::malformed_response(format!(
            "{} media info records need {} bytes, only {} available",
            count,
            needed,
            records.len()
        )));
    }

    if device_type == FILE_DEVICE_TAPE {
        debug!("Tape device reported; reading media info with the disk layout");
    }

    let media_info = records[..needed]
        .chunks_exact(media_types::RECORD_LEN)
        .map(parse_media_info)
        .collect::<Result<Vec<_>>>()?;

    Ok(MediaTypesResponse {
        device_type,
        media_info,
    })
}
