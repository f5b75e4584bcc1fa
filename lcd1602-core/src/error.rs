//! Driver error type

use core::fmt;

use lcd1602_hal::AddressSet;
use lcd1602_protocol::CommandError;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// A caller-supplied value is out of range or inconsistent
    InvalidArgument,
    /// The transport cannot perform the requested operation
    Unsupported,
    /// The device or bus misbehaved
    Hardware,
    /// A fixed-size table is full
    Capacity,
    /// The controller reported a state that should be impossible
    Internal,
}

/// Errors returned by the transports and the display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Column outside 0-39
    InvalidColumn(u8),
    /// Line outside 0-1
    InvalidLine(u8),
    /// Custom character code outside 0-7
    InvalidCustomCharacter(u8),
    /// Bitmap row wider than 5 bits
    InvalidBitmapRow(u8),
    /// LCD character code above 255
    InvalidCharacterCode(u32),
    /// Cursor type outside 0-3
    InvalidCursorType(u8),
    /// Raw command wider than 10 bits
    InvalidCommand(u16),
    /// Read command passed to a write
    NotAWriteCommand(u16),
    /// Write command passed to a read
    NotAReadCommand(u16),
    /// The same GPIO is assigned to two lines
    PinConflict(u8),
    /// GPIO number the chip does not have
    InvalidPin(u8),
    /// I2C address in a reserved range
    InvalidI2cAddress(u8),

    /// Transport has no RW line
    ReadNotSupported,
    /// Transport has no backlight control
    BacklightNotSupported,
    /// Raw command the transport cannot execute
    UnsupportedCommand(u16),
    /// Transport used before `init()`
    NotInitialized,

    /// I2C scan found nothing
    NoDeviceFound,
    /// I2C scan found several devices and no address was configured
    AmbiguousDevice(AddressSet),
    /// Configured I2C address did not answer the scan
    DeviceNotFound(u8),
    /// I2C transfer failed
    I2c,

    /// Character map has no room for another entry
    CharacterMapFull,

    /// Address counter outside both DDRAM line windows
    AddressOutOfRange(u8),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidColumn(_)
            | Self::InvalidLine(_)
            | Self::InvalidCustomCharacter(_)
            | Self::InvalidBitmapRow(_)
            | Self::InvalidCharacterCode(_)
            | Self::InvalidCursorType(_)
            | Self::InvalidCommand(_)
            | Self::NotAWriteCommand(_)
            | Self::NotAReadCommand(_)
            | Self::PinConflict(_)
            | Self::InvalidPin(_)
            | Self::InvalidI2cAddress(_) => ErrorKind::InvalidArgument,
            Self::ReadNotSupported
            | Self::BacklightNotSupported
            | Self::UnsupportedCommand(_)
            | Self::NotInitialized => ErrorKind::Unsupported,
            Self::NoDeviceFound
            | Self::AmbiguousDevice(_)
            | Self::DeviceNotFound(_)
            | Self::I2c => ErrorKind::Hardware,
            Self::CharacterMapFull => ErrorKind::Capacity,
            Self::AddressOutOfRange(_) => ErrorKind::Internal,
        }
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::OutOfRange(bits) => Self::InvalidCommand(bits),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColumn(col) => write!(f, "column {} out of range (0-39)", col),
            Self::InvalidLine(line) => write!(f, "line {} out of range (0-1)", line),
            Self::InvalidCustomCharacter(code) => {
                write!(f, "custom character code {} out of range (0-7)", code)
            }
            Self::InvalidBitmapRow(row) => write!(f, "bitmap row 0x{:02X} wider than 5 bits", row),
            Self::InvalidCharacterCode(code) => {
                write!(f, "character code {} out of range (0-255)", code)
            }
            Self::InvalidCursorType(value) => write!(f, "invalid cursor type {}", value),
            Self::InvalidCommand(bits) => write!(f, "command 0x{:X} does not fit in 10 bits", bits),
            Self::NotAWriteCommand(bits) => write!(f, "command 0x{:03X} is not a write", bits),
            Self::NotAReadCommand(bits) => write!(f, "command 0x{:03X} is not a read", bits),
            Self::PinConflict(pin) => write!(f, "GPIO {} assigned more than once", pin),
            Self::InvalidPin(pin) => write!(f, "GPIO {} does not exist", pin),
            Self::InvalidI2cAddress(addr) => write!(f, "I2C address 0x{:02X} is reserved", addr),
            Self::ReadNotSupported => f.write_str("bus does not support read operations"),
            Self::BacklightNotSupported => f.write_str("bus does not support backlight control"),
            Self::UnsupportedCommand(bits) => write!(f, "command 0x{:X} is not supported", bits),
            Self::NotInitialized => f.write_str("bus used before init"),
            Self::NoDeviceFound => f.write_str("no I2C device found"),
            Self::AmbiguousDevice(found) => {
                write!(f, "multiple I2C devices found ({}), address required", found)
            }
            Self::DeviceNotFound(addr) => write!(f, "no I2C device at 0x{:02X}", addr),
            Self::I2c => f.write_str("I2C transfer failed"),
            Self::CharacterMapFull => f.write_str("character map is full"),
            Self::AddressOutOfRange(addr) => {
                write!(f, "address counter 0x{:02X} outside DDRAM lines", addr)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::InvalidColumn(40).kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NotAReadCommand(0x200).kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::ReadNotSupported.kind(), ErrorKind::Unsupported);
        assert_eq!(Error::NotInitialized.kind(), ErrorKind::Unsupported);
        assert_eq!(Error::NoDeviceFound.kind(), ErrorKind::Hardware);
        assert_eq!(
            Error::AmbiguousDevice(AddressSet::new()).kind(),
            ErrorKind::Hardware
        );
        assert_eq!(Error::CharacterMapFull.kind(), ErrorKind::Capacity);
        assert_eq!(Error::AddressOutOfRange(0x30).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_from_command_error() {
        let err: Error = CommandError::OutOfRange(0x400).into();
        assert_eq!(err, Error::InvalidCommand(0x400));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
