//! A device abstraction for a multiplexed 4-digit, 7-segment LED display.
//!
//! The four digits share one set of eight segment lines; each digit has its own
//! enable line. Only one digit is lit at a time, and cycling through them fast
//! enough makes all four appear lit at once.
//!
//! See [`Led4`] for the main device abstraction and usage examples.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
#[cfg(feature = "display-trace")]
use log::trace;
use log::{debug, warn};

use crate::refresh_config::check_hold;
use crate::{CELL_COUNT, DisplayValue, Result, SEGMENT_COUNT, pattern_for};

// ============================================================================
// OutputArray Submodule
// ============================================================================

mod output_array;
pub use output_array::OutputArray;

// ============================================================================
// Constants
// ============================================================================

/// Level that enables a digit. The anode is shared per digit, so LOW lights it.
pub const CELL_ON: PinState = PinState::Low;

/// Level that disables a digit.
pub const CELL_OFF: PinState = PinState::High;

// ============================================================================
// Led4 Device
// ============================================================================

/// A device abstraction for a 4-digit, 7-segment common-anode LED display.
///
/// # Hardware Requirements
///
/// - Cell pins select which digit is active (LOW = on, HIGH = off)
/// - Segment pins select which segments light up (HIGH = on, LOW = off)
///
/// `Led4` owns every line of the display. Dropping it (or calling
/// [`Led4::release`]) switches all digits off.
///
/// # Example
///
/// ```no_run
/// use led4_counter::{DisplayValue, MULTIPLEX_HOLD, Result};
/// use led4_counter::led4::{Led4, OutputArray};
/// # use embedded_hal::{delay::DelayNs, digital::OutputPin};
///
/// fn show_1234<P: OutputPin, D: DelayNs>(
///     cells: [P; 4],
///     segments: [P; 8],
///     delay: D,
/// ) -> Result<()> {
///     let mut display = Led4::new(
///         OutputArray::new(cells),
///         OutputArray::new(segments),
///         delay,
///         MULTIPLEX_HOLD,
///     )?;
///     display.render(DisplayValue::new(1234)?)?;
///     display.release()
/// }
/// ```
pub struct Led4<P: OutputPin, D: DelayNs> {
    cells: OutputArray<P, CELL_COUNT>,
    segments: OutputArray<P, SEGMENT_COUNT>,
    delay: D,
    hold: Duration,
    hold_ns: u32,
    released: bool,
}

impl<P: OutputPin, D: DelayNs> Led4<P, D> {
    /// Takes ownership of the display lines and switches every digit off.
    ///
    /// # Errors
    ///
    /// Returns an error if `hold` is too long for a flicker-free scan, or if a cell
    /// pin cannot be driven.
    pub fn new(
        cell_pins: OutputArray<P, CELL_COUNT>,
        segment_pins: OutputArray<P, SEGMENT_COUNT>,
        delay: D,
        hold: Duration,
    ) -> Result<Self> {
        let hold_ns = check_hold(hold)?;
        let mut led4 = Self {
            cells: cell_pins,
            segments: segment_pins,
            delay,
            hold,
            hold_ns,
            released: false,
        };
        led4.cells.set_all(CELL_OFF)?;
        debug!("Led4 ready: {CELL_COUNT} digits off, hold {hold:?}");
        Ok(led4)
    }

    /// How long each digit is held lit during [`render`](Self::render).
    #[must_use]
    pub const fn hold(&self) -> Duration {
        self.hold
    }

    /// Pulses each of the four digits of `value` once, left to right.
    ///
    /// Returns with every digit off.
    ///
    /// # Errors
    ///
    /// Returns the first pin failure; the failure is not retried.
    pub fn render(&mut self, value: DisplayValue) -> Result<()> {
        self.render_digits(value.digits()?)
    }

    /// Pulses the given digits (most significant first), one at a time.
    ///
    /// Each position is enabled, given its segment pattern, held, then disabled
    /// before the next one starts, so no two digits are ever lit together.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`](crate::Error::InvalidDigit) for a digit over 9
    /// (nothing is lit for it), or the first pin failure.
    pub fn render_digits(&mut self, digits: [u8; CELL_COUNT]) -> Result<()> {
        for (index, digit) in digits.into_iter().enumerate() {
            let pattern = pattern_for(digit)?;
            #[cfg(feature = "display-trace")]
            trace!("cell {index}: digit {digit} bits {:#010b}", pattern.bits());

            self.cells.set_level_at_index(index, CELL_ON)?;
            self.segments.set_from_pattern(pattern)?;
            self.delay.delay_ns(self.hold_ns);
            self.cells.set_level_at_index(index, CELL_OFF)?;
        }
        Ok(())
    }

    /// Switches every digit off and every segment low, exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first pin failure; every pin is still attempted.
    pub fn release(mut self) -> Result<()> {
        self.shut_down()
    }

    fn shut_down(&mut self) -> Result<()> {
        self.released = true;
        let cells = self.cells.set_all(CELL_OFF);
        let segments = self.segments.set_all(PinState::Low);
        debug!("Led4 released");
        cells?;
        segments
    }
}

impl<P: OutputPin, D: DelayNs> Drop for Led4<P, D> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(err) = self.shut_down() {
                warn!("Led4 cleanup failed: {err}");
            }
        }
    }
}
