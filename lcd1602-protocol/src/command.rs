//! Instruction words and argument bits

use core::fmt;

/// Bits that may be set in an instruction word
pub const COMMAND_MASK: u16 = 0x3FF;

/// Single-bit masks for the bus lines
pub mod mask {
    pub const DB0: u16 = 1 << 0;
    pub const DB1: u16 = 1 << 1;
    pub const DB2: u16 = 1 << 2;
    pub const DB3: u16 = 1 << 3;
    pub const DB4: u16 = 1 << 4;
    pub const DB5: u16 = 1 << 5;
    pub const DB6: u16 = 1 << 6;
    pub const DB7: u16 = 1 << 7;
    pub const RW: u16 = 1 << 8;
    pub const RS: u16 = 1 << 9;

    /// Upper data nibble
    pub const DB7_TO_DB4: u16 = 0xF0;
    /// Lower data nibble
    pub const DB3_TO_DB0: u16 = 0x0F;
}

/// Arguments for [`Command::ENTRY_MODE_SET`]
pub mod entry_mode {
    pub const LEFT_TO_RIGHT: u16 = 0b10;
    pub const RIGHT_TO_LEFT: u16 = 0;
    pub const AUTOSCROLL_ON: u16 = 0b1;
    pub const AUTOSCROLL_OFF: u16 = 0;
}

/// Arguments for [`Command::DISPLAY_CONTROL`]
pub mod display_control {
    pub const DISPLAY_ON: u16 = 0b100;
    pub const DISPLAY_OFF: u16 = 0;
    pub const CURSOR_ON: u16 = 0b10;
    pub const CURSOR_OFF: u16 = 0;
    pub const BLINK_ON: u16 = 0b1;
    pub const BLINK_OFF: u16 = 0;
}

/// Arguments for [`Command::SHIFT`]
pub mod shift {
    /// Shift the whole display instead of the cursor
    pub const CONTENT: u16 = 0b1000;
    pub const CURSOR: u16 = 0;
    pub const RIGHT: u16 = 0b100;
    pub const LEFT: u16 = 0;
}

/// Arguments for [`Command::FUNCTION_SET`]
pub mod function_set {
    pub const EIGHT_BIT: u16 = 0b10000;
    pub const FOUR_BIT: u16 = 0;
    pub const TWO_LINES: u16 = 0b1000;
    pub const ONE_LINE: u16 = 0;
    pub const FONT_5X11: u16 = 0b100;
    pub const FONT_5X8: u16 = 0;
}

/// Error building an instruction word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Value has bits set above bit 9
    OutOfRange(u16),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(bits) => write!(f, "command 0x{:X} does not fit in 10 bits", bits),
        }
    }
}

/// 10-bit HD44780 instruction word
///
/// Bits above position 9 are never set: [`Command::new`] rejects such
/// values and the builder methods mask them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Command(u16);

impl Command {
    /// All lines low; an instruction-register write of zero
    pub const NOOP: Self = Self(0);
    pub const CLEAR: Self = Self(0b1);
    pub const HOME: Self = Self(0b10);
    pub const ENTRY_MODE_SET: Self = Self(0b100);
    pub const DISPLAY_CONTROL: Self = Self(0b1000);
    pub const SHIFT: Self = Self(0b1_0000);
    pub const FUNCTION_SET: Self = Self(0b10_0000);
    pub const SET_CGRAM_ADDRESS: Self = Self(0b100_0000);
    pub const SET_DDRAM_ADDRESS: Self = Self(0b1000_0000);
    pub const READ_BUSY_FLAG_AND_ADDRESS: Self = Self(0b01_0000_0000);
    pub const WRITE_DATA: Self = Self(0b10_0000_0000);
    pub const READ_DATA: Self = Self(0b11_0000_0000);

    /// Build a command from a raw word, rejecting values wider than 10 bits
    pub const fn new(bits: u16) -> Result<Self, CommandError> {
        if bits & !COMMAND_MASK != 0 {
            Err(CommandError::OutOfRange(bits))
        } else {
            Ok(Self(bits))
        }
    }

    /// OR argument bits into the command
    pub const fn with(self, args: u16) -> Self {
        Self((self.0 | args) & COMMAND_MASK)
    }

    /// OR a data byte into DB7..DB0
    pub const fn with_data(self, data: u8) -> Self {
        self.with(data as u16)
    }

    /// Point the address counter at a CGRAM address (DB5..DB0)
    pub const fn set_cgram_address(address: u8) -> Self {
        Self::SET_CGRAM_ADDRESS.with((address & 0x3F) as u16)
    }

    /// Point the address counter at a DDRAM address (DB6..DB0)
    pub const fn set_ddram_address(address: u8) -> Self {
        Self::SET_DDRAM_ADDRESS.with((address & 0x7F) as u16)
    }

    /// Write one byte into the RAM selected by the address counter
    pub const fn write_data(byte: u8) -> Self {
        Self::WRITE_DATA.with_data(byte)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// RW is set
    pub const fn is_read(self) -> bool {
        self.0 & mask::RW != 0
    }

    /// RS is set (data register access)
    pub const fn is_data(self) -> bool {
        self.0 & mask::RS != 0
    }

    /// DB7..DB0
    pub const fn data_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// DB7..DB4 shifted down to bits 3..0
    pub const fn high_nibble(self) -> u8 {
        ((self.0 & mask::DB7_TO_DB4) >> 4) as u8
    }

    /// DB3..DB0
    pub const fn low_nibble(self) -> u8 {
        (self.0 & mask::DB3_TO_DB0) as u8
    }

    /// Clear and home take far longer to execute than everything else
    pub const fn is_long_running(self) -> bool {
        self.0 == Self::CLEAR.0 || self.0 == Self::HOME.0
    }
}

impl TryFrom<u16> for Command {
    type Error = CommandError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Command> for u16 {
    fn from(command: Command) -> u16 {
        command.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#012b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(Command::CLEAR.bits(), 0b00_0000_0001);
        assert_eq!(Command::HOME.bits(), 0b00_0000_0010);
        assert_eq!(Command::ENTRY_MODE_SET.bits(), 0b00_0000_0100);
        assert_eq!(Command::DISPLAY_CONTROL.bits(), 0b00_0000_1000);
        assert_eq!(Command::SHIFT.bits(), 0b00_0001_0000);
        assert_eq!(Command::FUNCTION_SET.bits(), 0b00_0010_0000);
        assert_eq!(Command::SET_CGRAM_ADDRESS.bits(), 0b00_0100_0000);
        assert_eq!(Command::SET_DDRAM_ADDRESS.bits(), 0b00_1000_0000);
        assert_eq!(Command::READ_BUSY_FLAG_AND_ADDRESS.bits(), 0b01_0000_0000);
        assert_eq!(Command::WRITE_DATA.bits(), 0b10_0000_0000);
        assert_eq!(Command::READ_DATA.bits(), 0b11_0000_0000);
    }

    #[test]
    fn test_new_rejects_wide_values() {
        assert_eq!(Command::new(0x3FF), Ok(Command::WRITE_DATA.with_data(0xFF).with(mask::RW)));
        assert_eq!(Command::new(0x400), Err(CommandError::OutOfRange(0x400)));
        assert_eq!(Command::try_from(0xFFFF), Err(CommandError::OutOfRange(0xFFFF)));
    }

    #[test]
    fn test_with_masks_to_ten_bits() {
        let cmd = Command::FUNCTION_SET.with(0xFC00 | function_set::TWO_LINES);
        assert_eq!(cmd.bits(), 0b10_1000);
    }

    #[test]
    fn test_read_and_data_flags() {
        assert!(Command::READ_DATA.is_read());
        assert!(Command::READ_DATA.is_data());
        assert!(Command::READ_BUSY_FLAG_AND_ADDRESS.is_read());
        assert!(!Command::READ_BUSY_FLAG_AND_ADDRESS.is_data());
        assert!(!Command::write_data(b'A').is_read());
        assert!(Command::write_data(b'A').is_data());
        assert!(!Command::CLEAR.is_read());
    }

    #[test]
    fn test_nibbles() {
        let cmd = Command::write_data(0xA5);
        assert_eq!(cmd.high_nibble(), 0xA);
        assert_eq!(cmd.low_nibble(), 0x5);
        assert_eq!(cmd.data_byte(), 0xA5);
    }

    #[test]
    fn test_address_helpers() {
        assert_eq!(Command::set_ddram_address(0x40).bits(), 0xC0);
        assert_eq!(Command::set_ddram_address(0xFF).bits(), 0xFF);
        assert_eq!(Command::set_cgram_address(7 << 3).bits(), 0x78);
        assert_eq!(Command::set_cgram_address(0xFF).bits(), 0x7F);
    }

    #[test]
    fn test_long_running() {
        assert!(Command::CLEAR.is_long_running());
        assert!(Command::HOME.is_long_running());
        assert!(!Command::DISPLAY_CONTROL.is_long_running());
        assert!(!Command::write_data(1).is_long_running());
    }
}
