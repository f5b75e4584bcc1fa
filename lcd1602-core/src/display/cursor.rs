//! Cursor placement, scrolling and mode flags

use lcd1602_hal::{Clock, DelayUs};
use lcd1602_protocol::{display_control, entry_mode, shift, Command, Status};

use super::address::{address_to_position, position_to_address};
use super::Lcd1602;
use crate::error::Error;
use crate::traits::Hd44780Bus;

/// Cursor appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CursorType {
    /// Hidden
    #[default]
    None = 0,
    /// Underscore under the cursor cell
    Underscore = 1,
    /// Whole cell blinks
    BlinkingBlock = 2,
    /// Underscore with a blinking block on top
    Combined = 3,
}

impl CursorType {
    /// DISPLAY_CONTROL cursor and blink bits
    pub const fn bits(self) -> u16 {
        match self {
            Self::None => display_control::CURSOR_OFF | display_control::BLINK_OFF,
            Self::Underscore => display_control::CURSOR_ON | display_control::BLINK_OFF,
            Self::BlinkingBlock => display_control::CURSOR_OFF | display_control::BLINK_ON,
            Self::Combined => display_control::CURSOR_ON | display_control::BLINK_ON,
        }
    }
}

impl TryFrom<u8> for CursorType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Underscore),
            2 => Ok(Self::BlinkingBlock),
            3 => Ok(Self::Combined),
            _ => Err(Error::InvalidCursorType(value)),
        }
    }
}

impl<B: Hd44780Bus, T: DelayUs + Clock> Lcd1602<B, T> {
    /// Move the cursor to `column` (0-39) on `line` (0-1)
    ///
    /// Only 16 columns are visible at a time; moving outside them does
    /// not scroll.
    pub fn set_cursor_position(&mut self, column: u8, line: u8) -> Result<(), Error> {
        let address = position_to_address(column, line)?;
        self.execute_command(Command::set_ddram_address(address))
            .map(|_| ())
    }

    /// Current `(column, line)` read back from the controller
    pub fn get_cursor_position(&mut self) -> Result<(u8, u8), Error> {
        if !self.capabilities.can_read {
            return Err(Error::ReadNotSupported);
        }
        let byte = self
            .execute_command(Command::READ_BUSY_FLAG_AND_ADDRESS)?
            .unwrap_or_default();
        address_to_position(Status::from_byte(byte).address)
    }

    /// Move the cursor one cell left, wrapping to the end of the other line
    pub fn move_cursor_left(&mut self) -> Result<(), Error> {
        self.shift(shift::CURSOR | shift::LEFT)
    }

    /// Move the cursor one cell right, wrapping to the start of the other line
    pub fn move_cursor_right(&mut self) -> Result<(), Error> {
        self.shift(shift::CURSOR | shift::RIGHT)
    }

    /// Scroll both lines one cell left
    pub fn scroll_display_left(&mut self) -> Result<(), Error> {
        // Shifting the content right makes the view scroll left
        self.shift(shift::CONTENT | shift::RIGHT)
    }

    /// Scroll both lines one cell right
    pub fn scroll_display_right(&mut self) -> Result<(), Error> {
        self.shift(shift::CONTENT | shift::LEFT)
    }

    fn shift(&mut self, args: u16) -> Result<(), Error> {
        self.execute_command(Command::SHIFT.with(args)).map(|_| ())
    }

    pub fn set_cursor_type(&mut self, cursor: CursorType) -> Result<(), Error> {
        let cleared = self.display_control.bits()
            & !(display_control::CURSOR_ON | display_control::BLINK_ON);
        self.display_control = Command::DISPLAY_CONTROL.with(cleared | cursor.bits());
        self.execute_command(self.display_control).map(|_| ())
    }

    /// Turn the display on (backlight unaffected)
    pub fn set_display_on(&mut self) -> Result<(), Error> {
        self.update_display_control(display_control::DISPLAY_ON, true)
    }

    /// Turn the display off (backlight unaffected); DDRAM is preserved
    pub fn set_display_off(&mut self) -> Result<(), Error> {
        self.update_display_control(display_control::DISPLAY_ON, false)
    }

    /// Shift the display on every write so the cursor stays put
    pub fn set_autoscroll_on(&mut self) -> Result<(), Error> {
        self.update_entry_mode(entry_mode::AUTOSCROLL_ON, true)
    }

    pub fn set_autoscroll_off(&mut self) -> Result<(), Error> {
        self.update_entry_mode(entry_mode::AUTOSCROLL_ON, false)
    }

    pub fn set_left_to_right(&mut self) -> Result<(), Error> {
        self.update_entry_mode(entry_mode::LEFT_TO_RIGHT, true)
    }

    pub fn set_right_to_left(&mut self) -> Result<(), Error> {
        self.update_entry_mode(entry_mode::LEFT_TO_RIGHT, false)
    }

    fn update_entry_mode(&mut self, flag: u16, set: bool) -> Result<(), Error> {
        self.entry_mode = with_flag(self.entry_mode, flag, set);
        self.execute_command(self.entry_mode).map(|_| ())
    }

    fn update_display_control(&mut self, flag: u16, set: bool) -> Result<(), Error> {
        self.display_control = with_flag(self.display_control, flag, set);
        self.execute_command(self.display_control).map(|_| ())
    }
}

fn with_flag(command: Command, flag: u16, set: bool) -> Command {
    let bits = if set {
        command.bits() | flag
    } else {
        command.bits() & !flag
    };
    Command::NOOP.with(bits)
}
