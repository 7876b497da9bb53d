//! Driver for a multiplexed 4-digit, 7-segment common-anode LED display.
//!
//! The core is `no_std` and works with any `embedded-hal` output pins and delay.
//! With the `rpi` feature, [`hardware`] wires it to the Raspberry Pi header and
//! the `led4_counter` and `led4_clock` binaries drive it.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod clock;
mod display_value;
mod error;
#[cfg(feature = "rpi")]
pub mod hardware;
pub mod led4;
mod refresh_config;
mod scheduler;
mod segment_pattern;
mod shared_constants;

// Re-export commonly used items
pub use clock::{ClockSource, WallClock, value_for_time};
pub use display_value::DisplayValue;
pub use error::{Error, Result};
#[cfg(feature = "rpi")]
pub use hardware::{Hardware, install_interrupt_handler, run_until_interrupted};
pub use led4::{CELL_OFF, CELL_ON, Led4, OutputArray};
pub use refresh_config::RefreshConfig;
pub use scheduler::{Counter, RefreshScheduler, RunSummary, ValueSource};
pub use segment_pattern::{Segment, SegmentPattern, pattern_for};
pub use shared_constants::*;
