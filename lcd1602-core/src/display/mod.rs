//! LCD1602 display controller
//!
//! [`Lcd1602`] owns one transport and one timer. It keeps the entry mode,
//! display control and function set words in memory and re-sends the whole
//! word whenever a flag changes, so the device never drifts from what
//! the accessors report.
//!
//! Commands complete either by polling the busy flag (wiring with an RW
//! line) or by sleeping the datasheet execution time (write-only wiring).

mod address;
mod charmap;
mod cursor;
mod text;

pub use address::{address_to_position, position_to_address, LINE_COUNT, LINE_LENGTH, LINE_OFFSETS};
pub use charmap::{CharacterMap, BLANK_CODE, CHARACTER_MAP_CAPACITY};
pub use cursor::CursorType;
pub use text::{CUSTOM_CHARACTER_ROWS, CUSTOM_CHARACTER_SLOTS};

use lcd1602_hal::{Clock, DelayUs};
use lcd1602_protocol::{display_control, entry_mode, function_set, Command, Status};

use crate::error::Error;
use crate::timing::{EXEC_TIME_LONG_US, EXEC_TIME_SHORT_US};
use crate::traits::{BusCapabilities, Hd44780Bus};

/// Controller over a transport chosen at runtime
#[cfg(feature = "alloc")]
pub type DynLcd1602<T> = Lcd1602<alloc::boxed::Box<dyn Hd44780Bus>, T>;

/// HD44780 1602 display
pub struct Lcd1602<B, T> {
    bus: B,
    timer: T,
    capabilities: BusCapabilities,
    entry_mode: Command,
    display_control: Command,
    function_set: Command,
    character_map: CharacterMap,
    busy_timeouts: u32,
}

impl<B: Hd44780Bus, T: DelayUs + Clock> Lcd1602<B, T> {
    /// Wrap a transport without touching the hardware
    ///
    /// [`init`](Self::init) must run before any other operation.
    pub fn new(bus: B, timer: T) -> Self {
        let capabilities = bus.capabilities();
        Self {
            bus,
            timer,
            capabilities,
            entry_mode: Command::ENTRY_MODE_SET
                .with(entry_mode::LEFT_TO_RIGHT | entry_mode::AUTOSCROLL_OFF),
            display_control: Command::DISPLAY_CONTROL.with(
                display_control::DISPLAY_ON
                    | display_control::CURSOR_OFF
                    | display_control::BLINK_OFF,
            ),
            function_set: Self::default_function_set(capabilities),
            character_map: CharacterMap::new(),
            busy_timeouts: 0,
        }
    }

    /// Create and initialize a display
    pub fn begin(bus: B, timer: T) -> Result<Self, Error> {
        let mut lcd = Self::new(bus, timer);
        lcd.init()?;
        Ok(lcd)
    }

    fn default_function_set(capabilities: BusCapabilities) -> Command {
        Command::FUNCTION_SET.with(
            function_set::TWO_LINES
                | function_set::FONT_5X8
                | capabilities.width.function_set_bits(),
        )
    }

    /// Reset the controller and bring it to a known state
    ///
    /// Afterwards the display is on and cleared, the cursor is hidden at
    /// (0, 0), text runs left to right without autoscroll, all eight custom
    /// characters are blank, the character map is empty and the backlight
    /// is on when the wiring allows it.
    ///
    /// On error the display is in an unknown state and must be
    /// initialized again.
    pub fn init(&mut self) -> Result<(), Error> {
        self.character_map.clear();

        self.bus.init()?;

        self.function_set = Self::default_function_set(self.capabilities);
        self.execute_command(self.function_set)?;

        self.clear()?;

        self.entry_mode =
            Command::ENTRY_MODE_SET.with(entry_mode::LEFT_TO_RIGHT | entry_mode::AUTOSCROLL_OFF);
        self.execute_command(self.entry_mode)?;

        self.display_control = Command::DISPLAY_CONTROL.with(
            display_control::DISPLAY_ON | display_control::CURSOR_OFF | display_control::BLINK_OFF,
        );
        self.execute_command(self.display_control)?;

        let blank = [0u8; CUSTOM_CHARACTER_ROWS];
        for code in 0..CUSTOM_CHARACTER_SLOTS {
            self.create_character(code, &blank)?;
        }

        self.home()?;

        if self.capabilities.can_control_backlight {
            self.set_backlight_on()?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD initialized: {}", self.capabilities);

        Ok(())
    }

    /// Clear DDRAM, reset scrolling and move the cursor home
    pub fn clear(&mut self) -> Result<(), Error> {
        self.execute_command(Command::CLEAR).map(|_| ())
    }

    /// Move the cursor to (0, 0) and reset scrolling
    pub fn home(&mut self) -> Result<(), Error> {
        self.execute_command(Command::HOME).map(|_| ())
    }

    /// Execute a command and wait for it to complete
    ///
    /// Returns the byte read for read commands and `None` for writes.
    pub fn execute_command(&mut self, command: Command) -> Result<Option<u8>, Error> {
        let value = if command.is_read() {
            if !self.capabilities.can_read {
                return Err(Error::ReadNotSupported);
            }
            Some(self.bus.read(command)?)
        } else {
            self.bus.write(command)?;
            None
        };

        self.wait_for_completion(command)?;
        Ok(value)
    }

    /// Execute an unchecked 10-bit command word
    pub fn execute_raw(&mut self, bits: u16) -> Result<Option<u8>, Error> {
        if !self.is_command_supported(bits) {
            return Err(Error::UnsupportedCommand(bits));
        }
        let command = Command::new(bits)?;
        self.execute_command(command)
    }

    /// Whether [`execute_raw`](Self::execute_raw) would accept `bits`
    pub fn is_command_supported(&self, bits: u16) -> bool {
        match Command::new(bits) {
            Ok(command) => !command.is_read() || self.capabilities.can_read,
            Err(_) => false,
        }
    }

    fn wait_for_completion(&mut self, command: Command) -> Result<(), Error> {
        let budget_us = if command.is_long_running() {
            EXEC_TIME_LONG_US
        } else {
            EXEC_TIME_SHORT_US
        };

        if !self.capabilities.can_read {
            self.timer.delay_us(budget_us);
            return Ok(());
        }

        let started_at = self.timer.now_ms();
        loop {
            let status = Status::from_byte(self.bus.read(Command::READ_BUSY_FLAG_AND_ADDRESS)?);
            if !status.busy {
                return Ok(());
            }

            // The first tick may end right after `started_at`, so wait one
            // tick past the budget before giving up
            let elapsed_ms = self.timer.now_ms().wrapping_sub(started_at);
            if elapsed_ms > budget_us.div_ceil(1_000) {
                // Give up and assume the command finished
                self.busy_timeouts = self.busy_timeouts.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "LCD busy flag stuck after {} ms (command {=u16:#x})",
                    elapsed_ms,
                    command.bits()
                );
                return Ok(());
            }
        }
    }

    /// Turn the backlight on
    pub fn set_backlight_on(&mut self) -> Result<(), Error> {
        self.set_backlight(true)
    }

    /// Turn the backlight off
    pub fn set_backlight_off(&mut self) -> Result<(), Error> {
        self.set_backlight(false)
    }

    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        if !self.capabilities.can_control_backlight {
            return Err(Error::BacklightNotSupported);
        }
        self.bus.set_backlight(enabled)
    }

    pub fn entry_mode(&self) -> Command {
        self.entry_mode
    }

    pub fn display_control(&self) -> Command {
        self.display_control
    }

    pub fn function_set(&self) -> Command {
        self.function_set
    }

    pub fn character_map(&self) -> &CharacterMap {
        &self.character_map
    }

    pub fn capabilities(&self) -> BusCapabilities {
        self.capabilities
    }

    /// Commands whose busy flag never cleared within the execution time
    pub fn busy_timeouts(&self) -> u32 {
        self.busy_timeouts
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Give back the transport and timer
    pub fn release(self) -> (B, T) {
        (self.bus, self.timer)
    }
}

#[cfg(test)]
pub(crate) mod mock;
