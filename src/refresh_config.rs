//! Timing knobs for multiplexing: per-digit hold and per-value repeat count.

use core::num::NonZeroU16;
use core::time::Duration;

use crate::{CELL_COUNT, Error, FLICKER_FUSION_BUDGET, MULTIPLEX_HOLD, REPEAT_COUNT, Result};

/// How long each digit is held lit and how many passes each value gets.
///
/// A full pass over the four digits must finish inside
/// [`FLICKER_FUSION_BUDGET`], otherwise the display visibly flickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshConfig {
    hold: Duration,
    repeat_count: NonZeroU16,
}

impl RefreshConfig {
    /// 1 ms per digit, 10 passes per value.
    pub const DEFAULT: Self = Self {
        hold: MULTIPLEX_HOLD,
        repeat_count: match NonZeroU16::new(REPEAT_COUNT) {
            Some(repeat_count) => repeat_count,
            None => panic!("REPEAT_COUNT must be non-zero"),
        },
    };

    /// # Errors
    ///
    /// Returns [`Error::RefreshTooSlow`] if four holds exceed the flicker budget, or
    /// [`Error::ZeroRepeatCount`] if `repeat_count` is zero.
    pub fn new(hold: Duration, repeat_count: u16) -> Result<Self> {
        check_hold(hold)?;
        let repeat_count = NonZeroU16::new(repeat_count).ok_or(Error::ZeroRepeatCount)?;
        Ok(Self { hold, repeat_count })
    }

    #[must_use]
    pub const fn hold(&self) -> Duration {
        self.hold
    }

    #[must_use]
    pub const fn repeat_count(&self) -> NonZeroU16 {
        self.repeat_count
    }

    /// Time to pulse all four digits once.
    #[must_use]
    pub fn full_scan(&self) -> Duration {
        self.hold.saturating_mul(CELL_COUNT_U32)
    }

    /// Time each value stays on the display.
    #[must_use]
    pub fn per_value(&self) -> Duration {
        self.full_scan()
            .saturating_mul(u32::from(self.repeat_count.get()))
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[expect(clippy::cast_possible_truncation, reason = "CELL_COUNT is 4")]
const CELL_COUNT_U32: u32 = CELL_COUNT as u32;

/// Checks that four holds fit the flicker budget and returns the hold in nanoseconds.
pub(crate) fn check_hold(hold: Duration) -> Result<u32> {
    let full_scan = hold.saturating_mul(CELL_COUNT_U32);
    if full_scan > FLICKER_FUSION_BUDGET {
        return Err(Error::RefreshTooSlow {
            hold_us: hold.as_micros(),
            budget_us: FLICKER_FUSION_BUDGET.as_micros(),
        });
    }
    // Inside the budget, so well under `u32::MAX` nanoseconds.
    u32::try_from(hold.as_nanos()).map_err(|_| Error::RefreshTooSlow {
        hold_us: hold.as_micros(),
        budget_us: FLICKER_FUSION_BUDGET.as_micros(),
    })
}
