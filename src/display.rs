use crate::drive::DriveLetter;
use crate::ioctl::MediaType;
use std::collections::BTreeSet;
use std::io::{self, Write};

pub const SEPARATOR: &str = "------------------------";
const LABEL_INDENT: &str = "            ";

/// Write the separator that opens the report
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)
}

/// Write one drive block: the drive line, one indented label per media type,
/// and the closing separator. An empty set still prints the drive line.
pub fn write_drive<W: Write>(
    out: &mut W,
    drive: DriveLetter,
    media_types: &BTreeSet<MediaType>,
) -> io::Result<()> {
    writeln!(out, "Drive {}:", drive)?;
    for media_type in media_types {
        writeln!(out, "{}{}", LABEL_INDENT, media_type.label())?;
    }
    writeln!(out, "{}", SEPARATOR)
}
