//! Raspberry Pi wiring: BCM pins for the display, Ctrl-C handling, and the
//! acquire/run/release cycle the binaries share.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rppal::gpio::{Gpio, OutputPin};
use rppal::hal::Delay;

use crate::led4::{Led4, OutputArray};
use crate::{
    CELL_COUNT, CELL_PINS, RefreshConfig, RefreshScheduler, Result, RunSummary, SEGMENT_COUNT,
    SEGMENT_PINS, ValueSource,
};

/// The display lines, configured as outputs on the Raspberry Pi header.
///
/// rppal puts each pin back the way it found it when the pin is dropped.
pub struct Hardware {
    pub cells: OutputArray<OutputPin, CELL_COUNT>,
    pub segments: OutputArray<OutputPin, SEGMENT_COUNT>,
}

impl Hardware {
    /// Configures the cell pins as outputs (HIGH, all digits off) and the segment
    /// pins as outputs (LOW).
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO peripheral can't be opened or a pin is taken.
    pub fn new() -> Result<Self> {
        let gpio = Gpio::new()?;

        let [cell1, cell2, cell3, cell4] = CELL_PINS;
        let cells = OutputArray::new([
            output(&gpio, cell1, true)?,
            output(&gpio, cell2, true)?,
            output(&gpio, cell3, true)?,
            output(&gpio, cell4, true)?,
        ]);

        let [seg_a, seg_b, seg_c, seg_d, seg_e, seg_f, seg_g, seg_dp] = SEGMENT_PINS;
        let segments = OutputArray::new([
            output(&gpio, seg_a, false)?,
            output(&gpio, seg_b, false)?,
            output(&gpio, seg_c, false)?,
            output(&gpio, seg_d, false)?,
            output(&gpio, seg_e, false)?,
            output(&gpio, seg_f, false)?,
            output(&gpio, seg_g, false)?,
            output(&gpio, seg_dp, false)?,
        ]);

        Ok(Self { cells, segments })
    }

    /// Hands the lines to a [`Led4`] driver.
    ///
    /// # Errors
    ///
    /// Returns an error if `config`'s hold is too long or a cell pin can't be driven.
    pub fn into_display(self, config: &RefreshConfig) -> Result<Led4<OutputPin, Delay>> {
        Led4::new(self.cells, self.segments, Delay::new(), config.hold())
    }
}

fn output(gpio: &Gpio, bcm_pin: u8, high: bool) -> Result<OutputPin> {
    let pin = gpio.get(bcm_pin)?;
    debug!("GPIO{bcm_pin} -> output, {}", if high { "HIGH" } else { "LOW" });
    Ok(if high {
        pin.into_output_high()
    } else {
        pin.into_output_low()
    })
}

/// Installs a Ctrl-C/SIGTERM handler and returns the flag it clears.
///
/// # Errors
///
/// Returns an error if a handler is already installed.
pub fn install_interrupt_handler() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let handler_running = Arc::clone(&running);
    ctrlc::set_handler(move || {
        handler_running.store(false, Ordering::SeqCst);
    })?;
    Ok(running)
}

/// Acquires the display, refreshes it from `source` until interrupted, then
/// releases it exactly once, whatever the outcome.
///
/// A failed release is logged and otherwise ignored.
///
/// # Errors
///
/// Returns a setup error, or the error that stopped the refresh loop.
pub fn run_until_interrupted<V: ValueSource>(
    config: RefreshConfig,
    source: &mut V,
) -> Result<RunSummary> {
    let running = install_interrupt_handler()?;
    let display = Hardware::new()?.into_display(&config)?;
    info!(
        "Display on GPIO cells {CELL_PINS:?}, segments {SEGMENT_PINS:?}; hold {:?}, {} passes per value",
        config.hold(),
        config.repeat_count()
    );

    RefreshScheduler::new(config).run_then_release(display, source, || {
        running.load(Ordering::SeqCst)
    })
}
