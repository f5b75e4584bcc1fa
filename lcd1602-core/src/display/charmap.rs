//! Unicode to LCD character code mapping

use heapless::FnvIndexMap;

use crate::error::Error;

/// Entries the map can hold
pub const CHARACTER_MAP_CAPACITY: usize = 64;

/// Code written for characters that have no LCD code
pub const BLANK_CODE: u8 = 0x20;

/// Maps characters to LCD character codes
///
/// Characters without an entry are sent as their scalar value when it fits
/// in a byte (ASCII and Latin-1 largely match the A00 ROM) and as a blank
/// otherwise.
#[derive(Clone)]
pub struct CharacterMap {
    entries: FnvIndexMap<char, u8, CHARACTER_MAP_CAPACITY>,
}

impl CharacterMap {
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    /// Map `ch` to `code`, returning the previous code if any
    pub fn insert(&mut self, ch: char, code: u8) -> Result<Option<u8>, Error> {
        // heapless refuses inserts into a full map even when the key exists
        if let Some(existing) = self.entries.get_mut(&ch) {
            return Ok(Some(core::mem::replace(existing, code)));
        }
        self.entries
            .insert(ch, code)
            .map_err(|_| Error::CharacterMapFull)
    }

    pub fn remove(&mut self, ch: char) -> Option<u8> {
        self.entries.remove(&ch)
    }

    pub fn get(&self, ch: char) -> Option<u8> {
        self.entries.get(&ch).copied()
    }

    /// Code to write for `ch`
    pub fn code_for(&self, ch: char) -> u8 {
        self.get(ch)
            .or_else(|| u8::try_from(u32::from(ch)).ok())
            .unwrap_or(BLANK_CODE)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.entries.iter().map(|(ch, code)| (*ch, *code))
    }
}

impl Default for CharacterMap {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CharacterMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
