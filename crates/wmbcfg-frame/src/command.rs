use bytes::{Bytes, BytesMut};

use crate::codec::encode_frame;
use crate::opcode;

/// A command the tool can issue to the radio module.
///
/// One variant per supported operation; each knows its opcode and payload.
/// Payloads are fixed-size (0 to 3 bytes) and validated before a variant is
/// constructed, so encoding cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query input/output mode and output frame format.
    GetWmbusMode,
    /// Set the mode from 3 raw configuration bytes.
    SetWmbusMode([u8; 3]),
    /// Query manufacturer, device ID, version and device type.
    GetDeviceInfo,
    /// Set the transmit interval in seconds.
    SetTxInterval(u16),
    /// Query the transmit interval.
    GetTxInterval,
    /// Query the encryption state.
    GetEncryption,
    /// Enable (`true`) or disable (`false`) encryption.
    SetEncryption(bool),
    /// Query the autolock state.
    GetAutolockStatus,
    /// Restart the autolock sequence with 3 AES key bytes.
    RestartAutolock([u8; 3]),
}

impl Command {
    /// The wire opcode for this command.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::GetWmbusMode => opcode::GET_WMBUS_MODE,
            Command::SetWmbusMode(_) => opcode::SET_WMBUS_MODE,
            Command::GetDeviceInfo => opcode::GET_DEVICE_INFO,
            Command::SetTxInterval(_) => opcode::SET_TX_INTERVAL,
            Command::GetTxInterval => opcode::GET_TX_INTERVAL,
            Command::GetEncryption => opcode::GET_ENCRYPTION,
            Command::SetEncryption(_) => opcode::SET_ENCRYPTION,
            Command::GetAutolockStatus => opcode::GET_AUTOLOCK_STATUS,
            Command::RestartAutolock(_) => opcode::RESTART_AUTOLOCK,
        }
    }

    /// The payload bytes for this command.
    ///
    /// The interval goes out little-endian: low byte first, matching the
    /// byte order the module echoes back at response offsets 3 and 4.
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Command::SetWmbusMode(bytes) | Command::RestartAutolock(bytes) => bytes.to_vec(),
            Command::SetTxInterval(secs) => secs.to_le_bytes().to_vec(),
            Command::SetEncryption(enable) => vec![u8::from(*enable)],
            _ => Vec::new(),
        }
    }

    /// Encode the complete wire frame for this command.
    pub fn encode(&self) -> Bytes {
        let payload = self.payload();
        let mut buf = BytesMut::with_capacity(payload.len() + 4);
        encode_frame(self.opcode(), &payload, &mut buf);
        buf.freeze()
    }

    /// A stable kebab-case name, used in traces and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetWmbusMode => "get-mode",
            Command::SetWmbusMode(_) => "set-mode",
            Command::GetDeviceInfo => "info",
            Command::SetTxInterval(_) => "set-interval",
            Command::GetTxInterval => "get-interval",
            Command::GetEncryption => "get-encryption",
            Command::SetEncryption(_) => "set-encryption",
            Command::GetAutolockStatus => "autolock-status",
            Command::RestartAutolock(_) => "restart-autolock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_encryption_frame() {
        assert_eq!(
            Command::GetEncryption.encode().as_ref(),
            &[0x7E, 0x24, 0x02, 0x7E]
        );
    }

    #[test]
    fn set_encryption_enabled_frame() {
        assert_eq!(
            Command::SetEncryption(true).encode().as_ref(),
            &[0x7E, 0x23, 0x03, 0x01, 0x7E]
        );
    }

    #[test]
    fn set_encryption_disabled_frame() {
        assert_eq!(
            Command::SetEncryption(false).encode().as_ref(),
            &[0x7E, 0x23, 0x03, 0x00, 0x7E]
        );
    }

    #[test]
    fn restart_autolock_frame() {
        assert_eq!(
            Command::RestartAutolock([0xAA, 0xBB, 0xCC]).encode().as_ref(),
            &[0x7E, 0x44, 0x05, 0xAA, 0xBB, 0xCC, 0x7E]
        );
    }

    #[test]
    fn query_frames_have_empty_payload() {
        for cmd in [
            Command::GetWmbusMode,
            Command::GetDeviceInfo,
            Command::GetTxInterval,
            Command::GetEncryption,
            Command::GetAutolockStatus,
        ] {
            let frame = cmd.encode();
            assert_eq!(frame.len(), 4, "{}", cmd.name());
            assert_eq!(frame[2], 0x02, "{}", cmd.name());
        }
    }

    #[test]
    fn set_interval_payload_is_little_endian() {
        // 3600 seconds = 0x0E10: low byte 0x10 first on the wire.
        assert_eq!(
            Command::SetTxInterval(3600).encode().as_ref(),
            &[0x7E, 0x46, 0x04, 0x10, 0x0E, 0x7E]
        );
    }

    #[test]
    fn set_mode_frame_carries_raw_bytes() {
        assert_eq!(
            Command::SetWmbusMode([0xFF, 0x01, 0x01]).encode().as_ref(),
            &[0x7E, 0x15, 0x05, 0xFF, 0x01, 0x01, 0x7E]
        );
    }
}
