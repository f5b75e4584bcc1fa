//! 4-bit parallel transport

use lcd1602_core::{BusCapabilities, BusWidth, Error, Hd44780Bus};
use lcd1602_hal::{DelayUs, FlexPin, OutputPin, PinDirection};
use lcd1602_protocol::Command;

use super::control::ControlLines;
use super::data_pin::{drive, sample, set_directions, DataPin};
use super::{check_read, check_write, ResetSequence};

/// LCD wired with RS, E and DB7..DB4 (DB3..DB0 left floating)
///
/// Each byte is transferred as two nibbles, high nibble first.
pub struct Parallel4Bus<P, O, D> {
    control: ControlLines<O, D>,
    /// DB7, DB6, DB5, DB4
    data: [DataPin<P>; 4],
}

impl<P: FlexPin, O: OutputPin, D: DelayUs> Parallel4Bus<P, O, D> {
    /// Create the transport; all lines are driven low
    ///
    /// `data` lists DB7 first. Reads need `rw`; backlight control needs
    /// `bl` wired to a switch that lights the LED when high.
    pub fn new(rs: O, e: O, data: [P; 4], rw: Option<O>, bl: Option<O>, delay: D) -> Self {
        Self {
            control: ControlLines::new(rs, e, rw, bl, delay),
            data: data.map(DataPin::new),
        }
    }

    fn write_nibble(&mut self, command: Command, nibble: u8) {
        self.control.select(command);
        drive(&mut self.data, nibble);
        self.control.strobe();
    }

    fn read_nibble(&mut self, command: Command) -> u8 {
        self.control.select(command);
        self.control.enable_high();
        let nibble = sample(&mut self.data);
        self.control.enable_low();
        nibble
    }
}

impl<P: FlexPin, O: OutputPin, D: DelayUs> ResetSequence for Parallel4Bus<P, O, D> {
    fn latch_function_set(&mut self, command: Command) -> Result<(), Error> {
        self.write_nibble(command, command.high_nibble());
        Ok(())
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.control.delay.delay_ms(ms);
    }
}

impl<P: FlexPin, O: OutputPin, D: DelayUs> Hd44780Bus for Parallel4Bus<P, O, D> {
    fn capabilities(&self) -> BusCapabilities {
        BusCapabilities {
            width: BusWidth::Four,
            can_read: self.control.can_read(),
            can_control_backlight: self.control.can_control_backlight(),
        }
    }

    fn init(&mut self) -> Result<(), Error> {
        self.reset(BusWidth::Four)
    }

    fn write(&mut self, command: Command) -> Result<(), Error> {
        check_write(command)?;
        self.write_nibble(command, command.high_nibble());
        self.write_nibble(command, command.low_nibble());
        Ok(())
    }

    fn read(&mut self, command: Command) -> Result<u8, Error> {
        check_read(command)?;
        if !self.control.can_read() {
            return Err(Error::ReadNotSupported);
        }

        set_directions(&mut self.data, PinDirection::Input);
        let high = self.read_nibble(command);
        let low = self.read_nibble(command);
        set_directions(&mut self.data, PinDirection::Output);

        Ok((high << 4) | low)
    }

    fn set_backlight(&mut self, enabled: bool) -> Result<(), Error> {
        self.control.set_backlight(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Bench, Event, Line, MockDelay, MockPin};

    type Bus<'a> = Parallel4Bus<MockPin<'a>, MockPin<'a>, MockDelay<'a>>;

    fn bus(bench: &Bench, rw: bool) -> Bus<'_> {
        let bus = Parallel4Bus::new(
            bench.pin(Line::Rs),
            bench.pin(Line::E),
            [
                bench.pin(Line::Db(7)),
                bench.pin(Line::Db(6)),
                bench.pin(Line::Db(5)),
                bench.pin(Line::Db(4)),
            ],
            rw.then(|| bench.pin(Line::Rw)),
            None,
            bench.delay(),
        );
        bench.clear();
        bus
    }

    /// Nibbles latched on falling E edges, read from the data line state
    fn latched_nibbles(events: &[Event]) -> heapless::Vec<u8, 16> {
        let mut lines = [false; 8];
        let mut nibbles = heapless::Vec::new();
        for event in events {
            match event {
                Event::Set(Line::Db(bit), high) => lines[*bit as usize] = *high,
                Event::Set(Line::E, false) => {
                    let nibble = (4..8)
                        .rev()
                        .fold(0u8, |acc, bit| (acc << 1) | u8::from(lines[bit]));
                    nibbles.push(nibble).unwrap();
                }
                _ => {}
            }
        }
        nibbles
    }

    #[test]
    fn test_init_sequence() {
        let bench = Bench::new();
        let mut bus = bus(&bench, false);
        bus.init().unwrap();

        let events = bench.events();
        assert_eq!(latched_nibbles(&events).as_slice(), &[0x3, 0x3, 0x3, 0x2]);

        let waits: heapless::Vec<u32, 8> = events
            .iter()
            .filter_map(|e| match e {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect();
        assert_eq!(waits.as_slice(), &[150, 5, 1, 1, 1]);

        // Write-only: data lines never switch to input and RS stays low
        assert!(!events
            .iter()
            .any(|e| matches!(e, Event::Direction(_, PinDirection::Input))));
        assert!(!events.contains(&Event::Set(Line::Rs, true)));
    }

    #[test]
    fn test_write_sends_high_nibble_first() {
        let bench = Bench::new();
        let mut bus = bus(&bench, false);
        bus.write(Command::write_data(0xA5)).unwrap();

        let events = bench.events();
        assert_eq!(latched_nibbles(&events).as_slice(), &[0xA, 0x5]);
        assert_eq!(events[0], Event::Set(Line::Rs, true));
    }

    #[test]
    fn test_write_strobe_timing() {
        let bench = Bench::new();
        let mut bus = bus(&bench, false);
        bus.write(Command::CLEAR).unwrap();

        let events = bench.events();
        // RS, four data lines, then tAS / E high / PWEH / E low / tcycE
        assert_eq!(
            &events[5..10],
            &[
                Event::DelayUs(1),
                Event::Set(Line::E, true),
                Event::DelayUs(1),
                Event::Set(Line::E, false),
                Event::DelayUs(1),
            ]
        );
    }

    #[test]
    fn test_rejects_wrong_direction() {
        let bench = Bench::new();
        let mut bus = bus(&bench, true);

        assert_eq!(
            bus.write(Command::READ_DATA),
            Err(Error::NotAWriteCommand(0x300))
        );
        assert_eq!(
            bus.read(Command::write_data(1)),
            Err(Error::NotAReadCommand(0x201))
        );
        assert!(bench.events().is_empty());
    }

    #[test]
    fn test_read_without_rw() {
        let bench = Bench::new();
        let mut bus = bus(&bench, false);

        assert!(!bus.capabilities().can_read);
        assert_eq!(
            bus.read(Command::READ_BUSY_FLAG_AND_ADDRESS),
            Err(Error::ReadNotSupported)
        );
        assert!(bench.events().is_empty());
    }

    #[test]
    fn test_read_two_nibbles() {
        let bench = Bench::new();
        let mut bus = bus(&bench, true);
        bench.present_nibbles(0xC7);

        assert_eq!(bus.read(Command::READ_DATA), Ok(0xC7));

        let events = bench.events();
        assert_eq!(events[0], Event::Direction(Line::Db(7), PinDirection::Input));
        assert!(events.contains(&Event::Set(Line::Rw, true)));
        assert!(events.contains(&Event::Set(Line::Rs, true)));
        assert_eq!(
            events.last(),
            Some(&Event::Direction(Line::Db(4), PinDirection::Output))
        );
    }

    #[test]
    fn test_backlight_requires_line() {
        let bench = Bench::new();
        let mut bus = bus(&bench, false);
        assert_eq!(bus.set_backlight(true), Err(Error::BacklightNotSupported));

        let mut bus = Parallel4Bus::new(
            bench.pin(Line::Rs),
            bench.pin(Line::E),
            [
                bench.pin(Line::Db(7)),
                bench.pin(Line::Db(6)),
                bench.pin(Line::Db(5)),
                bench.pin(Line::Db(4)),
            ],
            None,
            Some(bench.pin(Line::Bl)),
            bench.delay(),
        );
        assert!(bus.capabilities().can_control_backlight);
        bench.clear();
        bus.set_backlight(true).unwrap();
        assert_eq!(bench.events().as_slice(), &[Event::Set(Line::Bl, true)]);
    }
}
