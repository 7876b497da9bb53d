use embedded_hal::digital::{OutputPin, PinState};

use crate::error::Error::IndexOutOfBounds;
use crate::{Error, Result, SEGMENT_COUNT, SegmentPattern};

/// Array of GPIO output pins for LED displays.
///
/// See the [`Led4`](crate::led4::Led4) documentation for usage examples.
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub const fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    #[inline]
    pub(crate) fn set_level_at_index(&mut self, index: usize, level: PinState) -> Result<()> {
        self.0
            .get_mut(index)
            .ok_or(IndexOutOfBounds)?
            .set_state(level)
            .map_err(Error::output)
    }

    /// Drives every pin to `level`, attempting all of them even if one fails.
    ///
    /// Returns the first failure.
    pub(crate) fn set_all(&mut self, level: PinState) -> Result<()> {
        let mut outcome = Ok(());
        for output in &mut self.0 {
            if let Err(err) = output.set_state(level) {
                outcome = outcome.and(Err(Error::output(err)));
            }
        }
        outcome
    }
}

impl<P: OutputPin> OutputArray<P, SEGMENT_COUNT> {
    /// Writes a pattern to the segment lines, A through DP. Lit is HIGH.
    #[inline]
    pub(crate) fn set_from_pattern(&mut self, pattern: SegmentPattern) -> Result<()> {
        for (output, lit) in self.0.iter_mut().zip(pattern.levels()) {
            output.set_state(PinState::from(lit)).map_err(Error::output)?;
        }
        Ok(())
    }
}
