//! MPU6050 Register Map
//!
//! Only the registers this driver touches are listed. They fall into three groups:
//! - Configuration registers: identity, power, sample rate and full-scale selection
//! - Data registers: start of the accelerometer and gyroscope burst reads
//! - Calibration registers: per-axis hardware offset (bias) pairs
//!
//! Multi-byte values are stored most-significant byte first, so a pair starting
//! at `*_H` is decoded with `i16::from_be_bytes`.

/// Value of [`Register::WhoAmI`] on a genuine MPU-6050, independent of the AD0 pin.
pub const WHO_AM_I_VALUE: u8 = 0x68;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Sample Rate Divider register (0x19)
    /// Sample rate = gyroscope output rate / (1 + SMPLRT_DIV)
    SmpRtDiv = 0x19,

    /// Gyroscope Configuration register (0x1B)
    /// Bits 4:3 select the full-scale range
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// Bits 4:3 select the full-scale range
    AccelConfig = 0x1C,

    /// Power Management 1 register (0x6B)
    /// Controls sleep and clock source
    PwrMgmt1 = 0x6B,

    /// Device identity register (0x75)
    WhoAmI = 0x75,

    // Accelerometer Data Registers
    /// High byte of X-axis acceleration, start of the 6-byte accel burst
    AccelX_H = 0x3B,

    // Gyroscope Data Registers
    /// High byte of X-axis angular rate, start of the 6-byte gyro burst
    GyroX_H = 0x43,

    // Accelerometer Calibration Registers
    /// High byte of X-axis accelerometer offset
    AccelOffsetX_H = 0x06,
    /// High byte of Y-axis accelerometer offset
    AccelOffsetY_H = 0x08,
    /// High byte of Z-axis accelerometer offset
    AccelOffsetZ_H = 0x0A,

    // Gyroscope Calibration Registers
    /// High byte of X-axis gyroscope offset
    GyroOffsetX_H = 0x13,
    /// High byte of Y-axis gyroscope offset
    GyroOffsetY_H = 0x15,
    /// High byte of Z-axis gyroscope offset
    GyroOffsetZ_H = 0x17,
}

impl Register {
    /// Register address on the bus.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Number of bytes the driver transfers starting at this register.
    pub const fn width(self) -> usize {
        match self {
            Self::SmpRtDiv | Self::GyroConfig | Self::AccelConfig | Self::PwrMgmt1 | Self::WhoAmI => 1,
            Self::AccelX_H | Self::GyroX_H => 6,
            Self::AccelOffsetX_H
            | Self::AccelOffsetY_H
            | Self::AccelOffsetZ_H
            | Self::GyroOffsetX_H
            | Self::GyroOffsetY_H
            | Self::GyroOffsetZ_H => 2,
        }
    }
}
