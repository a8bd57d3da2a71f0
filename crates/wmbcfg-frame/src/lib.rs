//! Command frame codec and response decoding for wM-Bus radio modules.
//!
//! This is the core of wmbcfg. Every command sent to the module is a small
//! delimited frame:
//! - A 0x7E start delimiter
//! - A 1-byte opcode
//! - A 1-byte length covering everything between the delimiters
//! - 0 to 3 payload bytes
//! - A 0x7E end delimiter
//!
//! Responses are captured raw and decoded through typed views at fixed
//! offsets; the module does not length-prefix or checksum what it sends back.

pub mod codec;
pub mod command;
pub mod error;
pub mod fields;
pub mod hex;
pub mod opcode;
pub mod response;

pub use codec::{encode_frame, hex_str, DELIMITER, FRAME_OVERHEAD};
pub use command::Command;
pub use error::{FrameError, Result};
pub use fields::{
    manufacturer_code, AutolockStatus, EncryptionStatus, FrameFormat, InputMode, OutputMode,
};
pub use hex::{parse_fixed_hex, parse_payload3};
pub use response::{DeviceInfo, Response, WmbusMode, RESPONSE_BUFFER_SIZE};
