//! DDRAM address arithmetic
//!
//! The two lines are not contiguous in DDRAM: line 0 spans 0x00-0x27 and
//! line 1 spans 0x40-0x67 (datasheet p. 29).

use crate::error::Error;

/// Characters stored per line (only 16 are visible at once)
pub const LINE_LENGTH: u8 = 40;

/// Number of lines
pub const LINE_COUNT: u8 = 2;

/// DDRAM address of column 0 on each line
pub const LINE_OFFSETS: [u8; LINE_COUNT as usize] = [0x00, 0x40];

/// DDRAM address of a cell
pub fn position_to_address(column: u8, line: u8) -> Result<u8, Error> {
    if column >= LINE_LENGTH {
        return Err(Error::InvalidColumn(column));
    }
    let offset = LINE_OFFSETS
        .get(line as usize)
        .ok_or(Error::InvalidLine(line))?;
    Ok(offset + column)
}

/// `(column, line)` of a DDRAM address
pub fn address_to_position(address: u8) -> Result<(u8, u8), Error> {
    LINE_OFFSETS
        .iter()
        .zip(0u8..)
        .find(|(offset, _)| (**offset..**offset + LINE_LENGTH).contains(&address))
        .map(|(offset, line)| (address - offset, line))
        .ok_or(Error::AddressOutOfRange(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_windows() {
        assert_eq!(position_to_address(0, 0), Ok(0x00));
        assert_eq!(position_to_address(39, 0), Ok(0x27));
        assert_eq!(position_to_address(0, 1), Ok(0x40));
        assert_eq!(position_to_address(39, 1), Ok(0x67));
    }

    #[test]
    fn test_invalid_position() {
        assert_eq!(position_to_address(40, 0), Err(Error::InvalidColumn(40)));
        assert_eq!(position_to_address(0, 2), Err(Error::InvalidLine(2)));
    }

    #[test]
    fn test_gap_between_lines() {
        assert_eq!(address_to_position(0x27), Ok((39, 0)));
        assert_eq!(address_to_position(0x28), Err(Error::AddressOutOfRange(0x28)));
        assert_eq!(address_to_position(0x3F), Err(Error::AddressOutOfRange(0x3F)));
        assert_eq!(address_to_position(0x40), Ok((0, 1)));
        assert_eq!(address_to_position(0x68), Err(Error::AddressOutOfRange(0x68)));
    }
}
