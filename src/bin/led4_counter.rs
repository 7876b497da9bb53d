//! Counts 0000 through 9999 on the 4-digit display, over and over, until Ctrl-C.
//!
//! Each value gets 10 passes of 1 ms per digit (about 40 ms) before the counter
//! advances. Set `RUST_LOG=debug` to see pin setup.

use std::process::ExitCode;

use led4_counter::{Counter, RefreshConfig, run_until_interrupted};
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run_until_interrupted(RefreshConfig::DEFAULT, &mut Counter::default()) {
        Ok(summary) => {
            info!(
                "Stopped after {} values ({} refresh passes)",
                summary.values_shown, summary.renders
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
