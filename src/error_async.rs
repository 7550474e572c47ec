//! Error types for asynchronous MPU-6050 operations.
//!
//! Mirrors [`crate::error`] for drivers built on `embedded-hal-async`.

use core::fmt::{Debug, Formatter};
use embedded_hal_async::i2c::I2c;

pub use crate::error::InvalidRange;

/// Error that occurs during async initialization of the MPU-6050 sensor.
/// Contains both the error and the I2C interface for error recovery.
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

/// Error types that can occur during async sensor operations.
pub enum Error<I>
where
    I: I2c,
{
    /// Error occurred during an I2C write operation
    WriteError(I::Error),
    /// Error occurred during an I2C write-read operation
    WriteReadError(I::Error),
    /// Device did not identify as an MPU-6050; carries the byte read
    UnrecognizedDevice(u8),
    /// A numeric full-scale range outside the supported set
    InvalidRange(u16),
}

impl<I> Error<I>
where
    I: I2c,
{
    /// True when the underlying bus transaction failed.
    pub fn is_bus_error(&self) -> bool {
        matches!(self, Self::WriteError(_) | Self::WriteReadError(_))
    }
}

impl<I> From<InvalidRange> for Error<I>
where
    I: I2c,
{
    fn from(range: InvalidRange) -> Self {
        Self::InvalidRange(range.0)
    }
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::UnrecognizedDevice(id) => f.debug_tuple("UnrecognizedDevice").field(id).finish(),
            Self::InvalidRange(range) => f.debug_tuple("InvalidRange").field(range).finish(),
        }
    }
}
