//! HD44780 transport trait

use lcd1602_protocol::{function_set, Command};

use crate::error::Error;

/// Number of data lines between the MCU and the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusWidth {
    /// DB7..DB4 only; every byte is sent as two nibbles
    Four,
    /// DB7..DB0
    Eight,
}

impl BusWidth {
    /// DL bit of the function set instruction
    pub const fn function_set_bits(self) -> u16 {
        match self {
            Self::Four => function_set::FOUR_BIT,
            Self::Eight => function_set::EIGHT_BIT,
        }
    }
}

/// What a transport can do, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusCapabilities {
    pub width: BusWidth,
    /// An RW line is wired, so busy flag and RAM reads work
    pub can_read: bool,
    /// A backlight line is wired
    pub can_control_backlight: bool,
}

/// Transport carrying 10-bit instruction words to an HD44780
///
/// Object safe so a controller can be built over `&mut dyn Hd44780Bus`
/// when the wiring is only known at runtime.
pub trait Hd44780Bus {
    fn capabilities(&self) -> BusCapabilities;

    /// Run the power-on reset sequence
    ///
    /// Waits for the controller to power up, then forces it into a known
    /// interface width with repeated function set instructions.
    fn init(&mut self) -> Result<(), Error>;

    /// Send a write instruction
    ///
    /// Fails with [`Error::NotAWriteCommand`] if RW is set.
    fn write(&mut self, command: Command) -> Result<(), Error>;

    /// Send a read instruction and return DB7..DB0
    ///
    /// Fails with [`Error::NotAReadCommand`] if RW is clear, and with
    /// [`Error::ReadNotSupported`] on write-only wiring.
    fn read(&mut self, command: Command) -> Result<u8, Error>;

    /// Switch the backlight
    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error>;
}

impl<B: Hd44780Bus + ?Sized> Hd44780Bus for &mut B {
    fn capabilities(&self) -> BusCapabilities {
        (**self).capabilities()
    }

    fn init(&mut self) -> Result<(), Error> {
        (**self).init()
    }

    fn write(&mut self, command: Command) -> Result<(), Error> {
        (**self).write(command)
    }

    fn read(&mut self, command: Command) -> Result<u8, Error> {
        (**self).read(command)
    }

    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        (**self).set_backlight(enabled)
    }
}

#[cfg(feature = "alloc")]
impl<B: Hd44780Bus + ?Sized> Hd44780Bus for alloc::boxed::Box<B> {
    fn capabilities(&self) -> BusCapabilities {
        (**self).capabilities()
    }

    fn init(&mut self) -> Result<(), Error> {
        (**self).init()
    }

    fn write(&mut self, command: Command) -> Result<(), Error> {
        (**self).write(command)
    }

    fn read(&mut self, command: Command) -> Result<u8, Error> {
        (**self).read(command)
    }

    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        (**self).set_backlight(enabled)
    }
}
