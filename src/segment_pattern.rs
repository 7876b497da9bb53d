//! Segment patterns for the digits 0-9 on a 7-segment display.

use crate::{DIGIT_BASE, Error, Result, SEGMENT_COUNT};

// ============================================================================
// Segment
// ============================================================================

/// One of the eight lines of a single digit: segments A-G plus the decimal point.
///
/// ```text
///    A
///  F   B
///    G
///  E   C
///    D   DP
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Dp,
}

impl Segment {
    /// All segments in wire order, matching [`SEGMENT_PINS`](crate::SEGMENT_PINS).
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::Dp,
    ];

    /// Position of this segment in a [`SegmentPattern`] and in the segment pin array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

// ============================================================================
// SegmentPattern
// ============================================================================

/// Which of the eight segment lines are lit for one digit.
///
/// Bit `i` holds segment `i` of [`Segment::ALL`], so A is bit 0 and DP is bit 7.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Nothing lit.
    pub const BLANK: Self = Self(0);

    const DIGITS: [Self; DIGIT_BASE as usize] = [
        Self(0b_0011_1111), // 0
        Self(0b_0000_0110), // 1
        Self(0b_0101_1011), // 2
        Self(0b_0100_1111), // 3
        Self(0b_0110_0110), // 4
        Self(0b_0110_1101), // 5
        Self(0b_0111_1101), // 6
        Self(0b_0000_0111), // 7
        Self(0b_0111_1111), // 8
        Self(0b_0110_1111), // 9
    ];

    /// Raw bits, A in bit 0 through DP in bit 7.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    /// ON/OFF per segment in the order A, B, C, D, E, F, G, DP.
    #[must_use]
    pub fn levels(self) -> [bool; SEGMENT_COUNT] {
        Segment::ALL.map(|segment| self.is_lit(segment))
    }

    /// The same pattern with the decimal point lit.
    #[must_use]
    pub const fn with_decimal_point(self) -> Self {
        Self(self.0 | Segment::Dp.bit())
    }
}

/// Looks up the segment pattern for a decimal digit.
///
/// # Errors
///
/// Returns [`Error::InvalidDigit`] if `digit` is not in 0-9.
pub fn pattern_for(digit: u8) -> Result<SegmentPattern> {
    SegmentPattern::DIGITS
        .get(usize::from(digit))
        .copied()
        .ok_or(Error::InvalidDigit(u32::from(digit)))
}
