use std::fmt;
use std::io;

use wmbcfg_frame::FrameError;
use wmbcfg_transport::TransportError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    match err {
        TransportError::Io(source) => io_error(context, source),
        TransportError::Open { path, source } => {
            let code = match source.kind() {
                serialport::ErrorKind::Io(io::ErrorKind::PermissionDenied) => PERMISSION_DENIED,
                serialport::ErrorKind::Io(io::ErrorKind::NotFound)
                | serialport::ErrorKind::NoDevice => FAILURE,
                _ => TRANSPORT_ERROR,
            };
            CliError::new(
                code,
                format!("{context}: failed to open {}: {source}", path.display()),
            )
        }
        other => CliError::new(TRANSPORT_ERROR, format!("{context}: {other}")),
    }
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::InvalidHex { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        FrameError::ShortResponse { .. } => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}
