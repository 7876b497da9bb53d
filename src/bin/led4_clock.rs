//! Shows the time of day as `HHMM` on the 4-digit display until Ctrl-C.

use std::process::ExitCode;

use led4_counter::clock::SystemClock;
use led4_counter::{ClockSource, RefreshConfig, Result, RunSummary, run_until_interrupted};
use log::{error, info};

/// Hours to add to UTC. Fixed, like the pins.
const UTC_OFFSET_HOURS: i8 = -6;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(summary) => {
            info!("Stopped after {} clock reads", summary.values_shown);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<RunSummary> {
    let clock = SystemClock::with_offset_hours(UTC_OFFSET_HOURS)?;
    info!("Showing UTC{UTC_OFFSET_HOURS:+} as HHMM");
    run_until_interrupted(RefreshConfig::DEFAULT, &mut ClockSource::new(clock))
}
