//! Transport wiring

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lcd1602_hal::i2c::{SCAN_FIRST_ADDRESS, SCAN_LAST_ADDRESS};

use crate::error::Error;
use crate::traits::{BusCapabilities, BusWidth};

/// Most GPIOs a wiring can use (8-bit bus with RW and BL)
pub const MAX_CONFIG_PINS: usize = 12;

/// How the LCD is connected
///
/// Pin numbers are GPIO numbers; data lines are listed DB7 first.
///
/// In TOML the variant is selected with a `bus` key:
/// ```toml
/// bus = "parallel4"
/// rs = 6
/// e = 7
/// data = [11, 10, 9, 8]
/// rw = 12
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "bus", rename_all = "snake_case"))]
pub enum BusConfig {
    /// DB7..DB4 wired directly to GPIOs
    Parallel4 {
        rs: u8,
        e: u8,
        data: [u8; 4],
        #[cfg_attr(feature = "serde", serde(default))]
        rw: Option<u8>,
        #[cfg_attr(feature = "serde", serde(default))]
        bl: Option<u8>,
    },
    /// DB7..DB0 wired directly to GPIOs
    Parallel8 {
        rs: u8,
        e: u8,
        data: [u8; 8],
        #[cfg_attr(feature = "serde", serde(default))]
        rw: Option<u8>,
        #[cfg_attr(feature = "serde", serde(default))]
        bl: Option<u8>,
    },
    /// PCF8574 backpack; `None` selects the only device on the bus
    I2c {
        #[cfg_attr(feature = "serde", serde(default))]
        address: Option<u8>,
    },
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::I2c { address: None }
    }
}

impl BusConfig {
    /// Check for pins used twice and reserved I2C addresses
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Self::I2c { address: Some(addr) } => {
                if !(SCAN_FIRST_ADDRESS..=SCAN_LAST_ADDRESS).contains(addr) {
                    return Err(Error::InvalidI2cAddress(*addr));
                }
                Ok(())
            }
            Self::I2c { address: None } => Ok(()),
            _ => {
                let pins = self.pins();
                for (i, pin) in pins.iter().enumerate() {
                    if pins[..i].contains(pin) {
                        return Err(Error::PinConflict(*pin));
                    }
                }
                Ok(())
            }
        }
    }

    /// Capabilities the resulting transport will report
    pub fn capabilities(&self) -> BusCapabilities {
        match self {
            Self::Parallel4 { rw, bl, .. } => BusCapabilities {
                width: BusWidth::Four,
                can_read: rw.is_some(),
                can_control_backlight: bl.is_some(),
            },
            Self::Parallel8 { rw, bl, .. } => BusCapabilities {
                width: BusWidth::Eight,
                can_read: rw.is_some(),
                can_control_backlight: bl.is_some(),
            },
            Self::I2c { .. } => BusCapabilities {
                width: BusWidth::Four,
                can_read: true,
                can_control_backlight: true,
            },
        }
    }

    /// GPIOs used by a parallel wiring: RS, E, data lines, then RW and BL
    pub fn pins(&self) -> Vec<u8, MAX_CONFIG_PINS> {
        let mut pins = Vec::new();
        let (rs, e, data, rw, bl): (u8, u8, &[u8], Option<u8>, Option<u8>) = match self {
            Self::Parallel4 { rs, e, data, rw, bl } => (*rs, *e, &data[..], *rw, *bl),
            Self::Parallel8 { rs, e, data, rw, bl } => (*rs, *e, &data[..], *rw, *bl),
            Self::I2c { .. } => return pins,
        };
        let lines = [rs, e]
            .into_iter()
            .chain(data.iter().copied())
            .chain([rw, bl].into_iter().flatten());
        for pin in lines {
            // At most 12 lines
            let _ = pins.push(pin);
        }
        pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parallel4() -> BusConfig {
        BusConfig::Parallel4 {
            rs: 6,
            e: 7,
            data: [11, 10, 9, 8],
            rw: Some(12),
            bl: None,
        }
    }

    #[test]
    fn test_valid_parallel_config() {
        assert_eq!(parallel4().validate(), Ok(()));

        assert_eq!(parallel4().pins().as_slice(), &[6, 7, 11, 10, 9, 8, 12]);
        assert!(BusConfig::default().pins().is_empty());
    }

    #[test]
    fn test_pin_conflict() {
        let config = BusConfig::Parallel8 {
            rs: 0,
            e: 1,
            data: [2, 3, 4, 5, 6, 7, 8, 9],
            rw: None,
            bl: Some(4),
        };
        assert_eq!(config.validate(), Err(Error::PinConflict(4)));
    }

    #[test]
    fn test_reserved_i2c_address() {
        assert_eq!(
            BusConfig::I2c { address: Some(0x78) }.validate(),
            Err(Error::InvalidI2cAddress(0x78))
        );
        assert_eq!(
            BusConfig::I2c { address: Some(0x03) }.validate(),
            Err(Error::InvalidI2cAddress(0x03))
        );
        assert_eq!(BusConfig::I2c { address: Some(0x27) }.validate(), Ok(()));
        assert_eq!(BusConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_capabilities() {
        let caps = parallel4().capabilities();
        assert_eq!(caps.width, BusWidth::Four);
        assert!(caps.can_read);
        assert!(!caps.can_control_backlight);

        let caps = BusConfig::default().capabilities();
        assert!(caps.can_read);
        assert!(caps.can_control_backlight);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parse_toml() {
        let config: BusConfig = toml::from_str(
            r#"
            bus = "parallel4"
            rs = 6
            e = 7
            data = [11, 10, 9, 8]
            rw = 12
            "#,
        )
        .unwrap();
        assert_eq!(config, parallel4());

        let config: BusConfig = toml::from_str(
            r#"
            bus = "i2c"
            address = 0x27
            "#,
        )
        .unwrap();
        assert_eq!(config, BusConfig::I2c { address: Some(0x27) });

        let config: BusConfig = toml::from_str(r#"bus = "i2c""#).unwrap();
        assert_eq!(config, BusConfig::I2c { address: None });
    }
}
