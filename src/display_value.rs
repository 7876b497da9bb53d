//! The number shown on the display, 0000 through 9999.

use core::fmt::{self, Write};

use heapless::String;

use crate::{CELL_COUNT, DIGIT_BASE, Error, Result};

/// An integer in `0..=9999`, rendered as four zero-padded decimal digits.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DisplayValue(u16);

impl DisplayValue {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(9999);

    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` is greater than 9999.
    pub fn new(value: u16) -> Result<Self> {
        if value > Self::MAX.0 {
            return Err(Error::ValueOutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// The following value, wrapping from 9999 back to 0.
    #[must_use]
    pub const fn next_wrapping(self) -> Self {
        if self.0 >= Self::MAX.0 {
            Self::ZERO
        } else {
            Self(self.0.saturating_add(1))
        }
    }

    /// Splits the value into its four digits, most significant first.
    ///
    /// The value is first formatted as a zero-padded 4-character decimal string
    /// (7 becomes "0007") and each character is then converted back to a digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`] if a formatted character is not 0-9.
    pub fn digits(self) -> Result<[u8; CELL_COUNT]> {
        let mut text: String<CELL_COUNT> = String::new();
        write!(text, "{:04}", self.0)?;

        let mut digits = [0; CELL_COUNT];
        let mut chars = text.chars();
        for slot in &mut digits {
            let symbol = chars.next().ok_or(Error::FormatError)?;
            let digit = symbol
                .to_digit(u32::from(DIGIT_BASE))
                .ok_or_else(|| Error::InvalidDigit(u32::from(symbol)))?;
            *slot = u8::try_from(digit).map_err(|_| Error::InvalidDigit(digit))?;
        }
        Ok(digits)
    }
}

impl TryFrom<u16> for DisplayValue {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DisplayValue> for u16 {
    fn from(value: DisplayValue) -> Self {
        value.0
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}
