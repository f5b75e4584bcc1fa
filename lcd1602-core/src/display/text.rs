//! Custom characters and text output

use lcd1602_hal::{Clock, DelayUs};
use lcd1602_protocol::Command;

use super::Lcd1602;
use crate::error::Error;
use crate::traits::Hd44780Bus;

/// CGRAM slots, addressed by character codes 0-7
pub const CUSTOM_CHARACTER_SLOTS: u8 = 8;

/// Rows per 5x8 glyph
pub const CUSTOM_CHARACTER_ROWS: usize = 8;

/// Widest bitmap row (5 pixels)
const MAX_BITMAP_ROW: u8 = 0b1_1111;

impl<B: Hd44780Bus, T: DelayUs + Clock> Lcd1602<B, T> {
    /// Define the glyph shown for character code `code` (0-7)
    ///
    /// Each row is a 5-bit pattern, MSB on the left. The last row is
    /// normally left blank since the underscore cursor is drawn there.
    ///
    /// The address counter is left pointing into CGRAM: position the
    /// cursor before issuing raw DDRAM reads or writes.
    pub fn create_character(
        &mut self,
        code: u8,
        bitmap: &[u8; CUSTOM_CHARACTER_ROWS],
    ) -> Result<(), Error> {
        if code >= CUSTOM_CHARACTER_SLOTS {
            return Err(Error::InvalidCustomCharacter(code));
        }
        if let Some(row) = bitmap.iter().find(|row| **row > MAX_BITMAP_ROW) {
            return Err(Error::InvalidBitmapRow(*row));
        }

        self.execute_command(Command::set_cgram_address(code << 3))?;
        for row in bitmap {
            self.execute_command(Command::write_data(*row))?;
        }
        Ok(())
    }

    /// Write `ch` as LCD code `code` in [`write_text`](Self::write_text)
    ///
    /// `code` is wider than a byte so out-of-range values are rejected
    /// here instead of reaching the display.
    pub fn map_character(&mut self, ch: char, code: u32) -> Result<(), Error> {
        let code = u8::try_from(code).map_err(|_| Error::InvalidCharacterCode(code))?;
        self.character_map.insert(ch, code).map(|_| ())
    }

    /// Forget a mapping made by [`map_character`](Self::map_character)
    pub fn unmap_character(&mut self, ch: char) {
        self.character_map.remove(ch);
    }

    /// Write `text` starting at (`column`, `line`)
    ///
    /// The cursor advances according to the entry mode; text running past
    /// column 39 continues on the other line.
    pub fn write_text(&mut self, column: u8, line: u8, text: &str) -> Result<(), Error> {
        self.set_cursor_position(column, line)?;
        for ch in text.chars() {
            let code = self.character_map.code_for(ch);
            self.execute_command(Command::write_data(code))?;
        }
        Ok(())
    }

    /// Write a single LCD character code at (`column`, `line`)
    pub fn write_code(&mut self, column: u8, line: u8, code: u8) -> Result<(), Error> {
        self.write_codes(column, line, &[code])
    }

    /// Write LCD character codes starting at (`column`, `line`)
    pub fn write_codes(&mut self, column: u8, line: u8, codes: &[u8]) -> Result<(), Error> {
        self.set_cursor_position(column, line)?;
        for code in codes {
            self.execute_command(Command::write_data(*code))?;
        }
        Ok(())
    }

    /// Read the LCD character code at (`column`, `line`)
    ///
    /// The controller advances its address counter after the read.
    pub fn read_code(&mut self, column: u8, line: u8) -> Result<u8, Error> {
        if !self.capabilities.can_read {
            return Err(Error::ReadNotSupported);
        }
        self.set_cursor_position(column, line)?;
        let code = self.execute_command(Command::READ_DATA)?;
        Ok(code.unwrap_or_default())
    }
}
