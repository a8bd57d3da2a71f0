//! Wire opcodes understood by the radio module.

/// Query the configured wM-Bus input/output mode.
pub const GET_WMBUS_MODE: u8 = 0x14;

/// Set the wM-Bus mode from 3 raw configuration bytes.
pub const SET_WMBUS_MODE: u8 = 0x15;

/// Enable or disable payload encryption (1 payload byte).
pub const SET_ENCRYPTION: u8 = 0x23;

/// Query the encryption state.
pub const GET_ENCRYPTION: u8 = 0x24;

/// Query the device identity block (manufacturer, ID, version, type).
pub const GET_DEVICE_INFO: u8 = 0x40;

/// Restart the autolock sequence with 3 AES key bytes.
pub const RESTART_AUTOLOCK: u8 = 0x44;

/// Query the autolock state.
pub const GET_AUTOLOCK_STATUS: u8 = 0x45;

/// Set the transmit interval (2 payload bytes, little-endian seconds).
pub const SET_TX_INTERVAL: u8 = 0x46;

/// Query the transmit interval.
pub const GET_TX_INTERVAL: u8 = 0x47;

/// Returns a human-readable name for an opcode.
pub fn name(opcode: u8) -> &'static str {
    match opcode {
        GET_WMBUS_MODE => "GET_WMBUS_MODE",
        SET_WMBUS_MODE => "SET_WMBUS_MODE",
        SET_ENCRYPTION => "SET_ENCRYPTION",
        GET_ENCRYPTION => "GET_ENCRYPTION",
        GET_DEVICE_INFO => "GET_DEVICE_INFO",
        RESTART_AUTOLOCK => "RESTART_AUTOLOCK",
        GET_AUTOLOCK_STATUS => "GET_AUTOLOCK_STATUS",
        SET_TX_INTERVAL => "SET_TX_INTERVAL",
        GET_TX_INTERVAL => "GET_TX_INTERVAL",
        _ => "UNKNOWN",
    }
}
