//! Error types for asynchronous sensor operations.
//!
//! Same shape as [`error`](crate::error), expressed over the async I2C trait
//! so `Error<I>` names the async bus's error type.

use core::fmt::{Debug, Formatter};
use embedded_hal_async::i2c::I2c;

/// Error during async driver construction. Wraps [`Error`] and hands the bus
/// back to the caller.
pub struct InitError<I>
where
    I: I2c,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for async sensor operations.
pub enum Error<I>
where
    I: I2c,
{
    /// I2C write failed
    WriteError(I::Error),
    /// I2C write-read failed
    WriteReadError(I::Error),
    /// WHO_AM_I did not identify an MPU-6050
    WrongDevice,
    /// The device kept producing empty frames past the settle retry budget
    CalibrationFailed,
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::WrongDevice => f.write_str("WrongDevice"),
            Self::CalibrationFailed => f.write_str("CalibrationFailed"),
        }
    }
}
