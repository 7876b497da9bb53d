//! Keeps the display alive by rendering value after value.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, warn};

use crate::led4::Led4;
use crate::{DisplayValue, RefreshConfig, Result};

/// Supplies the next value to show.
pub trait ValueSource {
    /// # Errors
    ///
    /// Returns an error if no value can be produced (e.g. the clock is unreadable).
    fn next_value(&mut self) -> Result<DisplayValue>;
}

/// Counts 0000, 0001, ..., 9999, then starts over at 0000.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    next: DisplayValue,
}

impl Counter {
    #[must_use]
    pub const fn starting_at(start: DisplayValue) -> Self {
        Self { next: start }
    }
}

impl ValueSource for Counter {
    fn next_value(&mut self) -> Result<DisplayValue> {
        let value = self.next;
        self.next = value.next_wrapping();
        Ok(value)
    }
}

/// What a [`RefreshScheduler::run`] did before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Values that got their full set of repeats.
    pub values_shown: u64,
    /// Calls to [`Led4::render`].
    pub renders: u64,
}

/// Renders each value from a [`ValueSource`] `repeat_count` times in a row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshScheduler {
    config: RefreshConfig,
}

impl RefreshScheduler {
    #[must_use]
    pub const fn new(config: RefreshConfig) -> Self {
        Self { config }
    }

    /// Runs until `keep_running` returns `false` or something fails.
    ///
    /// `keep_running` is checked before every render; a render in progress is
    /// never cut short. Cleanup is left to the owner of `display`.
    ///
    /// # Errors
    ///
    /// Returns the first error from `source` or from rendering.
    pub fn run<P, D, V, K>(
        &self,
        display: &mut Led4<P, D>,
        source: &mut V,
        mut keep_running: K,
    ) -> Result<RunSummary>
    where
        P: OutputPin,
        D: DelayNs,
        V: ValueSource + ?Sized,
        K: FnMut() -> bool,
    {
        let repeat_count = self.config.repeat_count().get();
        let mut summary = RunSummary::default();
        debug!(
            "Refreshing: {repeat_count} passes of {:?} per value",
            self.config.full_scan()
        );

        'values: loop {
            let value = source.next_value()?;
            for _ in 0..repeat_count {
                if !keep_running() {
                    break 'values;
                }
                display.render(value)?;
                summary.renders = summary.renders.saturating_add(1);
            }
            summary.values_shown = summary.values_shown.saturating_add(1);
        }

        debug!("Refresh stopped: {summary:?}");
        Ok(summary)
    }

    /// Like [`run`](Self::run), but takes the display and releases it exactly
    /// once afterwards, however the run ended.
    ///
    /// A failed release is logged and does not replace the run's outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error from `source` or from rendering.
    pub fn run_then_release<P, D, V, K>(
        &self,
        mut display: Led4<P, D>,
        source: &mut V,
        keep_running: K,
    ) -> Result<RunSummary>
    where
        P: OutputPin,
        D: DelayNs,
        V: ValueSource + ?Sized,
        K: FnMut() -> bool,
    {
        let outcome = self.run(&mut display, source, keep_running);
        if let Err(err) = display.release() {
            warn!("Display cleanup failed: {err}");
        }
        outcome
    }
}
