use derive_more::derive::{Display, Error};
use embedded_hal::digital::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("Invalid digit: {_0} (expected 0-9)")]
    InvalidDigit(#[error(not(source))] u32),

    #[display("Display value {_0} is out of range (expected 0-9999)")]
    ValueOutOfRange(#[error(not(source))] u16),

    // `ErrorKind` does not implement `core::error::Error`, so it can't be a source.
    #[display("Error setting output state: {_0:?}")]
    CannotSetOutputState(#[error(not(source))] ErrorKind),

    #[display("Index out of bounds")]
    IndexOutOfBounds,

    #[display("Format error")]
    FormatError,

    #[display("A full scan takes {hold_us} us x 4, over the {budget_us} us flicker budget")]
    RefreshTooSlow { hold_us: u128, budget_us: u128 },

    #[display("Repeat count must be at least 1")]
    ZeroRepeatCount,

    #[display("UTC offset of {_0} hours is out of range (expected -23..=23)")]
    InvalidClockOffset(#[error(not(source))] i8),

    #[cfg(feature = "rpi")]
    #[display("GPIO error: {_0}")]
    Gpio(rppal::gpio::Error),

    #[cfg(feature = "rpi")]
    #[display("Cannot install interrupt handler: {_0}")]
    SignalHandler(ctrlc::Error),
}

impl Error {
    /// Wraps a failed [`OutputPin`](embedded_hal::digital::OutputPin) operation.
    pub(crate) fn output<E: embedded_hal::digital::Error>(err: E) -> Self {
        Self::CannotSetOutputState(err.kind())
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::FormatError
    }
}

#[cfg(feature = "rpi")]
impl From<rppal::gpio::Error> for Error {
    fn from(err: rppal::gpio::Error) -> Self {
        Self::Gpio(err)
    }
}

#[cfg(feature = "rpi")]
impl From<ctrlc::Error> for Error {
    fn from(err: ctrlc::Error) -> Self {
        Self::SignalHandler(err)
    }
}
