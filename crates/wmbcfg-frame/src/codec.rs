use bytes::{BufMut, BytesMut};

/// Frame delimiter, opens and closes every command frame.
pub const DELIMITER: u8 = 0x7E;

/// Bytes the length field covers beyond the payload (opcode + length byte).
pub const FRAME_OVERHEAD: usize = 2;

/// Encode a command frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌───────────┬────────┬────────┬──────────────┬───────────┐
/// │ Start     │ Opcode │ Length │ Payload      │ End       │
/// │ 0x7E      │ (1B)   │ (1B)   │ (0-3 bytes)  │ 0x7E      │
/// └───────────┴────────┴────────┴──────────────┴───────────┘
/// ```
///
/// `Length` counts everything between, but not including, the two
/// delimiters: opcode + length byte + payload.
pub fn encode_frame(opcode: u8, payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(payload.len() + 4);
    dst.put_u8(DELIMITER);
    dst.put_u8(opcode);
    dst.put_u8((FRAME_OVERHEAD + payload.len()) as u8);
    dst.put_slice(payload);
    dst.put_u8(DELIMITER);
}

/// Render bytes as uppercase hex digit pairs, no separators.
///
/// This is the trace format the tool prints for every outbound and inbound
/// frame.
pub fn hex_str(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02X}");
    }
    out
}
