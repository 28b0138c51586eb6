//! Logical drive identifiers
//!
//! A drive is named by a single letter. Input is case-insensitive and may
//! carry trailing separators (`D:`, `d:\`), which are dropped.

use crate::error::{MediaDetectError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriveLetter(char);

impl DriveLetter {
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter.to_ascii_uppercase()))
        } else {
            Err(MediaDetectError::invalid_drive(format!(
                "'{}' is not a drive letter",
                letter
            )))
        }
    }

    pub fn letter(&self) -> char {
        self.0
    }

    /// Low-level device name of the volume, e.g. `\\.\D:`
    pub fn device_path(&self) -> String {
        format!(r"\\.\{}:", self.0)
    }
}

impl FromStr for DriveLetter {
    type Err = MediaDetectError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches(|c| c == ':' || c == '\\');

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(MediaDetectError::invalid_drive(format!(
                "expected a single drive letter, got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
