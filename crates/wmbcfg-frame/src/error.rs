/// Errors that can occur while building commands or decoding responses.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A user-supplied hex payload argument was malformed.
    #[error("invalid hex payload {input:?} (expected exactly {expected} hex digits)")]
    InvalidHex { input: String, expected: usize },

    /// The response buffer is too short for the field being decoded.
    ///
    /// The module answered with fewer bytes than the operation's fixed
    /// offsets require; decoding stale or absent bytes is not attempted.
    #[error("response too short ({len} bytes received, {need} needed)")]
    ShortResponse { len: usize, need: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
