//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by chip-specific HALs.

use core::fmt;

/// First address probed by [`I2cBus::scan`] (0x00-0x07 are reserved)
pub const SCAN_FIRST_ADDRESS: u8 = 0x08;

/// Last address probed by [`I2cBus::scan`] (0x78-0x7F are reserved)
pub const SCAN_LAST_ADDRESS: u8 = 0x77;

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Check whether a device acknowledges the given address
    ///
    /// The default implementation performs a single byte read, which is
    /// harmless for the I/O expanders found on LCD backpacks.
    fn probe(&mut self, address: u8) -> bool {
        let mut buf = [0u8; 1];
        self.read(address, &mut buf).is_ok()
    }

    /// Scan the bus for responding devices
    fn scan(&mut self) -> AddressSet {
        let mut found = AddressSet::new();
        for address in SCAN_FIRST_ADDRESS..=SCAN_LAST_ADDRESS {
            if self.probe(address) {
                found.insert(address);
            }
        }
        found
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read(address, buf)
    }

    fn probe(&mut self, address: u8) -> bool {
        (**self).probe(address)
    }

    fn scan(&mut self) -> AddressSet {
        (**self).scan()
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

/// Set of 7-bit I2C addresses
///
/// Returned by a bus scan. Stored as a 128-bit mask so it stays `Copy`
/// and can travel inside error values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressSet {
    bits: u128,
}

impl AddressSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Add an address (only the low 7 bits are used)
    pub fn insert(&mut self, address: u8) {
        self.bits |= 1u128 << (address & 0x7F);
    }

    /// Check whether an address is in the set
    pub fn contains(&self, address: u8) -> bool {
        address < 0x80 && self.bits & (1u128 << address) != 0
    }

    /// Number of addresses in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Lowest address in the set
    pub fn first(&self) -> Option<u8> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as u8)
        }
    }

    /// Iterate over the addresses in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..0x80).filter(move |address| self.contains(*address))
    }
}

impl FromIterator<u8> for AddressSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for address in iter {
            set.insert(address);
        }
        set
    }
}

impl fmt::Display for AddressSet {
    /// Formats as `0x27, 0x3F`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, address) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{:02X}", address)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock bus where only the listed addresses acknowledge
    struct MockBus {
        present: &'static [u8],
    }

    impl I2cBus for MockBus {
        type Error = ();

        fn write(&mut self, address: u8, _data: &[u8]) -> Result<(), ()> {
            if self.present.contains(&address) {
                Ok(())
            } else {
                Err(())
            }
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), ()> {
            if self.present.contains(&address) {
                buf.fill(0xFF);
                Ok(())
            } else {
                Err(())
            }
        }
    }

    #[test]
    fn test_scan_finds_present_devices() {
        let mut bus = MockBus {
            present: &[0x27, 0x3F],
        };
        let found = bus.scan();

        assert_eq!(found.len(), 2);
        assert!(found.contains(0x27));
        assert!(found.contains(0x3F));
        assert!(!found.contains(0x20));
        assert_eq!(found.first(), Some(0x27));
    }

    #[test]
    fn test_scan_skips_reserved_addresses() {
        let mut bus = MockBus {
            present: &[0x00, 0x07, 0x78],
        };
        assert!(bus.scan().is_empty());
    }

    #[test]
    fn test_address_set_iterates_in_order() {
        let set: AddressSet = [0x3F, 0x08, 0x27].into_iter().collect();
        let mut iter = set.iter();

        assert_eq!(iter.next(), Some(0x08));
        assert_eq!(iter.next(), Some(0x27));
        assert_eq!(iter.next(), Some(0x3F));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_address_set_display() {
        use core::fmt::Write;

        let set: AddressSet = [0x27, 0x3F].into_iter().collect();
        let mut out: heapless::String<32> = heapless::String::new();
        write!(out, "{}", set).unwrap();
        assert_eq!(out.as_str(), "0x27, 0x3F");
    }
}
