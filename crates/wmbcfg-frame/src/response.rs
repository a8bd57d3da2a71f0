use bytes::Bytes;

use crate::error::{FrameError, Result};
use crate::fields::{
    manufacturer_code, AutolockStatus, EncryptionStatus, FrameFormat, InputMode, OutputMode,
};

/// Size of the buffer a response is read into.
pub const RESPONSE_BUFFER_SIZE: usize = 100;

/// Offset of the first payload byte in a response frame.
///
/// Responses mirror the command layout (`0x7E`, opcode, length, payload),
/// so decoded fields start at offset 3. The module does not checksum its
/// answers and the delimiter/length bytes are not validated; each accessor
/// only requires the buffer to actually cover the offsets it reads.
const PAYLOAD_OFFSET: usize = 3;

/// A raw response captured from a single read, with typed field accessors.
#[derive(Debug, Clone)]
pub struct Response {
    bytes: Bytes,
}

/// Decoded wM-Bus mode report (response offsets 3, 4, 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmbusMode {
    pub input: InputMode,
    pub output: OutputMode,
    pub frame_format: FrameFormat,
}

/// Decoded device identity block (response offsets 3 through 10).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub manufacturer: String,
    pub id: u32,
    pub version: u8,
    pub device_type: u8,
}

impl DeviceInfo {
    /// Compose the `MFR.IDHEX.TYPE.VERSION` label.
    pub fn label(&self) -> String {
        format!(
            "{}.{:08X}.{:02X}.{:02X}",
            self.manufacturer, self.id, self.device_type, self.version
        )
    }
}

impl Response {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn byte_at(&self, offset: usize) -> Result<u8> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(FrameError::ShortResponse {
                len: self.bytes.len(),
                need: offset + 1,
            })
    }

    /// The u16 at `offset`, low byte first.
    fn u16_le_at(&self, offset: usize) -> Result<u16> {
        Ok(u16::from_le_bytes([
            self.byte_at(offset)?,
            self.byte_at(offset + 1)?,
        ]))
    }

    /// Status byte shared by the single-field responses (offset 3).
    pub fn status(&self) -> Result<u8> {
        self.byte_at(PAYLOAD_OFFSET)
    }

    /// Autolock state (GET_AUTOLOCK_STATUS and RESTART_AUTOLOCK responses).
    pub fn autolock_status(&self) -> Result<AutolockStatus> {
        Ok(AutolockStatus::from_byte(self.status()?))
    }

    /// Encryption state (GET_ENCRYPTION and SET_ENCRYPTION responses).
    pub fn encryption_status(&self) -> Result<EncryptionStatus> {
        Ok(EncryptionStatus::from_byte(self.status()?))
    }

    /// Mode report (GET_WMBUS_MODE response, offsets 3..=5).
    pub fn wmbus_mode(&self) -> Result<WmbusMode> {
        Ok(WmbusMode {
            input: InputMode::from_byte(self.byte_at(PAYLOAD_OFFSET)?),
            output: OutputMode::from_byte(self.byte_at(PAYLOAD_OFFSET + 1)?),
            frame_format: FrameFormat::from_byte(self.byte_at(PAYLOAD_OFFSET + 2)?),
        })
    }

    /// Transmit interval in seconds (GET/SET_TX_INTERVAL responses).
    ///
    /// Little-endian, matching the SET_TX_INTERVAL payload: offset 3 is the
    /// low byte, offset 4 the high byte.
    pub fn tx_interval_secs(&self) -> Result<u16> {
        self.u16_le_at(PAYLOAD_OFFSET)
    }

    /// Identity block (GET_DEVICE_INFO response, offsets 3..=10).
    pub fn device_info(&self) -> Result<DeviceInfo> {
        let manufacturer = manufacturer_code(self.u16_le_at(PAYLOAD_OFFSET)?);
        let id = u32::from_le_bytes([
            self.byte_at(5)?,
            self.byte_at(6)?,
            self.byte_at(7)?,
            self.byte_at(8)?,
        ]);
        Ok(DeviceInfo {
            manufacturer,
            id,
            version: self.byte_at(9)?,
            device_type: self.byte_at(10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(payload: &[u8]) -> Response {
        let mut bytes = vec![0x7E, 0x00, (2 + payload.len()) as u8];
        bytes.extend_from_slice(payload);
        bytes.push(0x7E);
        Response::new(bytes)
    }

    #[test]
    fn autolock_status_decodes_defined_values() {
        assert_eq!(
            response(&[0x00]).autolock_status().unwrap(),
            AutolockStatus::Unlocked
        );
        assert_eq!(
            response(&[0x02]).autolock_status().unwrap(),
            AutolockStatus::LockedWrongKey
        );
        assert_eq!(
            response(&[0x05]).autolock_status().unwrap(),
            AutolockStatus::Unknown
        );
    }

    #[test]
    fn short_response_is_reported_not_decoded() {
        let err = Response::new(vec![0x7E, 0x45]).autolock_status().unwrap_err();
        match err {
            FrameError::ShortResponse { len, need } => {
                assert_eq!(len, 2);
                assert_eq!(need, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_response_is_short() {
        assert!(Response::new(Vec::new()).status().is_err());
    }

    #[test]
    fn wmbus_mode_decodes_three_fields() {
        let mode = response(&[0x01, 0x02, 0x01]).wmbus_mode().unwrap();
        assert_eq!(mode.input, InputMode::S1);
        assert_eq!(mode.output, OutputMode::T1);
        assert_eq!(mode.frame_format, FrameFormat::A);
    }

    #[test]
    fn wmbus_mode_short_at_third_field() {
        let err = response(&[0x01, 0x02]).wmbus_mode();
        // Payload covers offsets 3 and 4 plus the trailing delimiter at 5;
        // the delimiter byte decodes as an (unknown) frame format.
        assert!(err.is_ok());

        assert!(Response::new(vec![0x7E, 0x14, 0x03, 0x01])
            .wmbus_mode()
            .is_err());
    }

    #[test]
    fn tx_interval_is_little_endian() {
        // 0x0E10 = 3600 seconds, low byte at offset 3.
        assert_eq!(response(&[0x10, 0x0E]).tx_interval_secs().unwrap(), 3600);
        assert_eq!(response(&[0x3C, 0x00]).tx_interval_secs().unwrap(), 60);
    }

    #[test]
    fn device_id_is_little_endian() {
        // Manufacturer field 0x0CB3, then ID bytes 78 56 34 12.
        let info = response(&[0xB3, 0x0C, 0x78, 0x56, 0x34, 0x12, 0x07, 0x1B])
            .device_info()
            .unwrap();
        assert_eq!(info.id, 0x1234_5678);
        assert_eq!(info.version, 0x07);
        assert_eq!(info.device_type, 0x1B);
    }

    #[test]
    fn device_info_label_format() {
        let info = DeviceInfo {
            manufacturer: "LAS".to_string(),
            id: 0x1234_5678,
            version: 0x07,
            device_type: 0x1B,
        };
        assert_eq!(info.label(), "LAS.12345678.1B.07");
    }

    #[test]
    fn device_info_requires_eleven_bytes() {
        // 7 payload bytes end at offset 9; device type at offset 10 is missing.
        let err = Response::new(vec![0x7E, 0x40, 0x09, 0, 0, 0, 0, 0, 0, 0])
            .device_info()
            .unwrap_err();
        assert!(matches!(err, FrameError::ShortResponse { need: 11, .. }));
    }
}
