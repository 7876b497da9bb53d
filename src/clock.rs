//! Shows wall-clock time as `HHMM` instead of a counter.

use time::Time;

use crate::{DisplayValue, Result, ValueSource};

/// Something that knows the current time of day.
pub trait WallClock {
    /// # Errors
    ///
    /// Returns an error if the time cannot be read.
    fn now(&mut self) -> Result<Time>;
}

/// The time of day as a 24-hour `HHMM` value: 00:00 is 0000, 23:59 is 2359.
///
/// # Errors
///
/// Never fails for a valid [`Time`]; the `Result` comes from [`DisplayValue::new`].
pub fn value_for_time(time: Time) -> Result<DisplayValue> {
    let hour = u16::from(time.hour());
    let minute = u16::from(time.minute());
    DisplayValue::new(hour.saturating_mul(100).saturating_add(minute))
}

/// A [`ValueSource`] reading `HHMM` from a [`WallClock`].
#[derive(Debug, Clone)]
pub struct ClockSource<W> {
    clock: W,
}

impl<W: WallClock> ClockSource<W> {
    pub const fn new(clock: W) -> Self {
        Self { clock }
    }
}

impl<W: WallClock> ValueSource for ClockSource<W> {
    fn next_value(&mut self) -> Result<DisplayValue> {
        value_for_time(self.clock.now()?)
    }
}

#[cfg(feature = "std")]
pub use system::SystemClock;

#[cfg(feature = "std")]
mod system {
    use time::{OffsetDateTime, Time, UtcOffset};

    use super::WallClock;
    use crate::{Error, Result};

    /// The system clock, shifted by a fixed UTC offset.
    ///
    /// The offset is fixed rather than detected: the local offset can't be read
    /// soundly once the interrupt handler's thread exists.
    #[derive(Debug, Clone, Copy)]
    pub struct SystemClock {
        offset: UtcOffset,
    }

    impl SystemClock {
        /// # Errors
        ///
        /// Returns [`Error::InvalidClockOffset`] unless `hours` is in -23..=23.
        pub fn with_offset_hours(hours: i8) -> Result<Self> {
            if !(-23..=23).contains(&hours) {
                return Err(Error::InvalidClockOffset(hours));
            }
            let offset =
                UtcOffset::from_hms(hours, 0, 0).map_err(|_| Error::InvalidClockOffset(hours))?;
            Ok(Self { offset })
        }
    }

    impl WallClock for SystemClock {
        fn now(&mut self) -> Result<Time> {
            Ok(OffsetDateTime::now_utc().to_offset(self.offset).time())
        }
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use time::macros::time;

    use super::*;

    struct FixedClock(Vec<Time>);

    impl WallClock for FixedClock {
        fn now(&mut self) -> Result<Time> {
            Ok(self.0.remove(0))
        }
    }

    #[test]
    fn test_value_for_time() {
        let cases = [
            (time!(0:00), 0),
            (time!(0:07), 7),
            (time!(9:30), 930),
            (time!(12:00:59), 1200),
            (time!(23:59:59.999), 2359),
        ];
        for (time, expected) in cases {
            assert_eq!(value_for_time(time).expect("valid").get(), expected, "{time:?}");
        }
    }

    #[test]
    fn test_clock_source_follows_clock() {
        let mut source = ClockSource::new(FixedClock(vec![time!(6:59), time!(7:00)]));
        assert_eq!(source.next_value().expect("valid").get(), 659);
        assert_eq!(source.next_value().expect("valid").get(), 700);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_offset_hours_range() {
        use crate::Error;

        assert!(SystemClock::with_offset_hours(-6).is_ok());
        assert!(SystemClock::with_offset_hours(23).is_ok());
        assert!(matches!(
            SystemClock::with_offset_hours(24),
            Err(Error::InvalidClockOffset(24))
        ));
        assert!(matches!(
            SystemClock::with_offset_hours(-24),
            Err(Error::InvalidClockOffset(-24))
        ));
    }
}
