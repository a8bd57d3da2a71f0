//! Enumerated response fields and their decode tables.
//!
//! Every field decodes any byte: values the module documentation does not
//! define map to the `Unknown` variant instead of an error.

use std::fmt;

/// wM-Bus receive mode the module is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    S1,
    T1AndC1,
    NotPresent,
    Unknown,
}

impl InputMode {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x01 => InputMode::S1,
            0x02 => InputMode::T1AndC1,
            0xFF => InputMode::NotPresent,
            _ => InputMode::Unknown,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputMode::S1 => "S1",
            InputMode::T1AndC1 => "T1 and C1",
            InputMode::NotPresent => "Not present",
            InputMode::Unknown => "Unknown",
        })
    }
}

/// wM-Bus transmit mode the module is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    S1,
    T1,
    C1,
    Unknown,
}

impl OutputMode {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x01 => OutputMode::S1,
            0x02 => OutputMode::T1,
            0x03 => OutputMode::C1,
            _ => OutputMode::Unknown,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::S1 => "S1",
            OutputMode::T1 => "T1",
            OutputMode::C1 => "C1",
            OutputMode::Unknown => "Unknown",
        })
    }
}

/// Frame format used for transmitted wM-Bus frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    A,
    B,
    Unknown,
}

impl FrameFormat {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x01 => FrameFormat::A,
            0x02 => FrameFormat::B,
            _ => FrameFormat::Unknown,
        }
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrameFormat::A => "A",
            FrameFormat::B => "B",
            FrameFormat::Unknown => "Unknown",
        })
    }
}

/// Payload encryption state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionStatus {
    Off,
    On,
    Unknown,
}

impl EncryptionStatus {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00 => EncryptionStatus::Off,
            0x01 => EncryptionStatus::On,
            _ => EncryptionStatus::Unknown,
        }
    }
}

impl fmt::Display for EncryptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EncryptionStatus::Off => "Encryption Off",
            EncryptionStatus::On => "Encryption On",
            EncryptionStatus::Unknown => "Unknown",
        })
    }
}

/// Configuration autolock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutolockStatus {
    Unlocked,
    Locked,
    LockedWrongKey,
    Unknown,
}

impl AutolockStatus {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00 => AutolockStatus::Unlocked,
            0x01 => AutolockStatus::Locked,
            0x02 => AutolockStatus::LockedWrongKey,
            _ => AutolockStatus::Unknown,
        }
    }
}

impl fmt::Display for AutolockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AutolockStatus::Unlocked => "Unlocked",
            AutolockStatus::Locked => "Locked",
            AutolockStatus::LockedWrongKey => "Locked, wrong AES-key",
            AutolockStatus::Unknown => "Unknown",
        })
    }
}

/// Decode the 16-bit M-Bus manufacturer field into its 3-letter code.
///
/// The field packs three 5-bit groups; each group maps onto ASCII by adding
/// 0x40, so 1 → 'A' and 26 → 'Z'. A group value of 0 falls one below the
/// letter range and decodes to '@', a known edge case for unprogrammed
/// devices, left visible rather than masked.
pub fn manufacturer_code(field: u16) -> String {
    let letter = |group: u16| char::from(0x40 + (group & 0x1F) as u8);
    let mut code = String::with_capacity(3);
    code.push(letter(field >> 10));
    code.push(letter(field >> 5));
    code.push(letter(field));
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_mode_table() {
        assert_eq!(InputMode::from_byte(0x01), InputMode::S1);
        assert_eq!(InputMode::from_byte(0x02), InputMode::T1AndC1);
        assert_eq!(InputMode::from_byte(0xFF), InputMode::NotPresent);
        for byte in 0u8..=255 {
            let expected = match byte {
                0x01 | 0x02 | 0xFF => continue,
                _ => InputMode::Unknown,
            };
            assert_eq!(InputMode::from_byte(byte), expected, "byte {byte:#04X}");
        }
    }

    #[test]
    fn output_mode_table() {
        assert_eq!(OutputMode::from_byte(0x01), OutputMode::S1);
        assert_eq!(OutputMode::from_byte(0x02), OutputMode::T1);
        assert_eq!(OutputMode::from_byte(0x03), OutputMode::C1);
        for byte in 0u8..=255 {
            if (0x01..=0x03).contains(&byte) {
                continue;
            }
            assert_eq!(OutputMode::from_byte(byte), OutputMode::Unknown);
        }
    }

    #[test]
    fn frame_format_table() {
        assert_eq!(FrameFormat::from_byte(0x01), FrameFormat::A);
        assert_eq!(FrameFormat::from_byte(0x02), FrameFormat::B);
        for byte in 0u8..=255 {
            if byte == 0x01 || byte == 0x02 {
                continue;
            }
            assert_eq!(FrameFormat::from_byte(byte), FrameFormat::Unknown);
        }
    }

    #[test]
    fn encryption_status_table() {
        assert_eq!(EncryptionStatus::from_byte(0x00), EncryptionStatus::Off);
        assert_eq!(EncryptionStatus::from_byte(0x01), EncryptionStatus::On);
        for byte in 2u8..=255 {
            assert_eq!(EncryptionStatus::from_byte(byte), EncryptionStatus::Unknown);
        }
    }

    #[test]
    fn autolock_status_table() {
        assert_eq!(AutolockStatus::from_byte(0x00), AutolockStatus::Unlocked);
        assert_eq!(AutolockStatus::from_byte(0x01), AutolockStatus::Locked);
        assert_eq!(AutolockStatus::from_byte(0x02), AutolockStatus::LockedWrongKey);
        for byte in 3u8..=255 {
            assert_eq!(AutolockStatus::from_byte(byte), AutolockStatus::Unknown);
        }
    }

    #[test]
    fn undefined_autolock_byte_is_unknown() {
        assert_eq!(AutolockStatus::from_byte(0x05), AutolockStatus::Unknown);
    }

    #[test]
    fn manufacturer_letter_arithmetic() {
        // 'L','A','S' = 12,1,19 -> (12<<10) | (1<<5) | 19
        let field = (12u16 << 10) | (1 << 5) | 19;
        assert_eq!(manufacturer_code(field), "LAS");

        // Boundaries: 1 -> 'A', 26 -> 'Z'.
        assert_eq!(manufacturer_code((1 << 10) | (26 << 5) | 1), "AZA");
    }

    #[test]
    fn manufacturer_zero_field_decodes_to_at_signs() {
        // Each 5-bit group of 0 falls one below 'A'.
        assert_eq!(manufacturer_code(0x0000), "@@@");
    }
}
