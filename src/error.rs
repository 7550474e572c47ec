use core::fmt::Debug;
use core::fmt::Formatter;
use embedded_hal::i2c::I2c;

/// A numeric full-scale range that the sensor does not support.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidRange(pub u16);

/// Error during initialization of sensor. Wraps [`Error`] and hands the bus back.
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

/// Error for sensor operations.
pub enum Error<I>
where
    I: I2c,
{
    /// Bus failure during a register write
    WriteError(I::Error),
    /// Bus failure during a register read
    WriteReadError(I::Error),
    /// The identity register did not hold the MPU-6050 value; carries the byte read
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
