//! Busy flag and address counter

/// DB7 of a busy-flag read
pub const BUSY_FLAG: u8 = 0x80;

/// DB6..DB0 of a busy-flag read
pub const ADDRESS_MASK: u8 = 0x7F;

/// Result of [`Command::READ_BUSY_FLAG_AND_ADDRESS`](crate::Command::READ_BUSY_FLAG_AND_ADDRESS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// Controller is still executing the previous instruction
    pub busy: bool,
    /// Current address counter
    pub address: u8,
}

impl Status {
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            busy: byte & BUSY_FLAG != 0,
            address: byte & ADDRESS_MASK,
        }
    }
}

impl From<u8> for Status {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}
