use thiserror::Error;

pub type Result<T> = std::result::Result<T, MediaDetectError>;

#[derive(Error, Debug)]
pub enum MediaDetectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot access device for drive {drive}: {message}")]
    DeviceAccess { drive: char, message: String },

    #[error("Device control request not supported: {0}")]
    QueryUnsupported(String),

    #[error("Device control request {request} failed: Windows error code 0x{code:08X}")]
    QueryFailed { request: &'static str, code: u32 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid drive identifier: {0}")]
    InvalidDrive(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl MediaDetectError {
    pub fn device_access<T: Into<String>>(drive: char, msg: T) -> Self {
        Self::DeviceAccess {
            drive,
            message: msg.into(),
        }
    }

    pub fn query_unsupported<T: Into<String>>(msg: T) -> Self {
        Self::QueryUnsupported(msg.into())
    }

    pub fn query_failed(request: &'static str, code: u32) -> Self {
        Self::QueryFailed { request, code }
    }

    pub fn malformed_response<T: Into<String>>(msg: T) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn invalid_drive<T: Into<String>>(msg: T) -> Self {
        Self::InvalidDrive(msg.into())
    }
}
