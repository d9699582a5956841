//! Inline, heap-free storage for short strings.
//!
//! A `FixedText` is nothing but `CAPACITY` code units. It does not know how
//! many of them are meaningful: the owner keeps the length next to it and
//! passes it back in on [`FixedText::decode`].
//!
//! The code unit is a Unicode scalar value (`char`), so any prefix of a stored
//! string decodes to valid text.

use crate::error::TextError;

/// Maximum number of code units a `FixedText` holds.
pub const CAPACITY: usize = 150;

#[derive(Clone, Copy)]
pub struct FixedText {
    units: [char; CAPACITY],
}

impl FixedText {
    pub const CAPACITY: usize = CAPACITY;

    /// Copy `source` into a fresh buffer and return it with its length in
    /// code units.
    ///
    /// Fails with `CapacityExceeded` instead of truncating.
    pub fn create(source: &str) -> Result<(Self, usize), TextError> {
        if source.chars().nth(Self::CAPACITY).is_some() {
            return Err(TextError::CapacityExceeded {
                length: source.chars().count(),
                capacity: Self::CAPACITY,
            });
        }

        let mut units = ['\0'; Self::CAPACITY];
        let mut length = 0;
        for (slot, ch) in units.iter_mut().zip(source.chars()) {
            *slot = ch;
            length += 1;
        }
        Ok((Self { units }, length))
    }

    /// Const counterpart of [`FixedText::create`] for string literals.
    ///
    /// Overlong input panics, which is a compile error when evaluated in a
    /// const context.
    pub const fn from_static_str(source: &str) -> (Self, usize) {
        let bytes = source.as_bytes();
        let mut units = ['\0'; Self::CAPACITY];
        let mut i = 0;
        let mut length = 0;
        while i < bytes.len() {
            assert!(length < Self::CAPACITY, "text exceeds the inline capacity");

            // `source` is valid UTF-8, so the lead byte gives the width.
            let lead = bytes[i] as u32;
            let (width, mut scalar) = if lead < 0x80 {
                (1, lead)
            } else if lead < 0xE0 {
                (2, lead & 0x1F)
            } else if lead < 0xF0 {
                (3, lead & 0x0F)
            } else {
                (4, lead & 0x07)
            };
            let mut k = 1;
            while k < width {
                scalar = (scalar << 6) | (bytes[i + k] as u32 & 0x3F);
                k += 1;
            }

            units[length] = match char::from_u32(scalar) {
                Some(ch) => ch,
                None => char::REPLACEMENT_CHARACTER,
            };
            i += width;
            length += 1;
        }
        (Self { units }, length)
    }

    /// Build a `String` from the first `length` code units.
    ///
    /// A `length` shorter than what was stored yields a prefix.
    pub fn decode(&self, length: usize) -> Result<String, TextError> {
        Self::check(length)?;
        Ok(self.units[..length].iter().collect())
    }

    /// Borrow the first `length` units. `length` is clamped to the capacity;
    /// owners only pass lengths they validated at construction.
    pub(crate) fn prefix(&self, length: usize) -> &[char] {
        &self.units[..length.min(Self::CAPACITY)]
    }

    fn check(length: usize) -> Result<(), TextError> {
        if length > Self::CAPACITY {
            return Err(TextError::CapacityExceeded {
                length,
                capacity: Self::CAPACITY,
            });
        }
        Ok(())
    }
}
