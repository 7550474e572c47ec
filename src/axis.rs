use crate::registers::Register;

/// One of the three sensing axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis inside a 3-element vector.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// First (high byte) register of this axis' gyroscope offset pair.
    pub const fn gyro_offset_register(self) -> Register {
        match self {
            Self::X => Register::GyroOffsetX_H,
            Self::Y => Register::GyroOffsetY_H,
            Self::Z => Register::GyroOffsetZ_H,
        }
    }

    /// First (high byte) register of this axis' accelerometer offset pair.
    pub const fn accel_offset_register(self) -> Register {
        match self {
            Self::X => Register::AccelOffsetX_H,
            Self::Y => Register::AccelOffsetY_H,
            Self::Z => Register::AccelOffsetZ_H,
        }
    }
}
