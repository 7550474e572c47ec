use crate::{error::InvalidRange, offset::OffsetScaling};

/// Raw gyro readings vector.
/// Also used to represent gyro calibration offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gyro {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Gyro {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_be_bytes(x),
            y: i16::from_be_bytes(y),
            z: i16::from_be_bytes(z),
        }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    /// Convert to °/s at the given full-scale range.
    pub fn scaled(&self, scale: GyroFullScale) -> GyroF32 {
        GyroF32 {
            x: scale.scale_value(self.x),
            y: scale.scale_value(self.y),
            z: scale.scale_value(self.z),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroFullScale {
    Deg250 = 0,
    Deg500 = 1,
    Deg1000 = 2,
    Deg2000 = 3,
}

impl GyroFullScale {
    /// LSB per °/s.
    pub const fn scale(self) -> f32 {
        match self {
            Self::Deg250 => 131.0,
            Self::Deg500 => 65.5,
            Self::Deg1000 => 32.8,
            Self::Deg2000 => 16.4,
        }
    }

    /// Full-scale magnitude in °/s.
    pub const fn dps(self) -> u16 {
        match self {
            Self::Deg250 => 250,
            Self::Deg500 => 500,
            Self::Deg1000 => 1000,
            Self::Deg2000 => 2000,
        }
    }

    /// Value written to [`Register::GyroConfig`](crate::registers::Register::GyroConfig).
    pub const fn config_value(self) -> u8 {
        (self as u8) << 3
    }

    pub fn scale_value(self, value: i16) -> f32 {
        (value as f32) / self.scale()
    }

    /// Scaling from the "±1000" offset convention to the offset register,
    /// whose resolution is fixed at 32.8 LSB per °/s.
    pub const fn offset_scaling(self) -> OffsetScaling {
        match self {
            Self::Deg250 => OffsetScaling::Divide(4),
            Self::Deg500 => OffsetScaling::Divide(2),
            Self::Deg1000 => OffsetScaling::Multiply(1),
            Self::Deg2000 => OffsetScaling::Multiply(2),
        }
    }
}

impl TryFrom<u16> for GyroFullScale {
    type Error = InvalidRange;

    /// Accepts the full-scale magnitude in °/s (250, 500, 1000 or 2000).
    fn try_from(dps: u16) -> Result<Self, Self::Error> {
        match dps {
            250 => Ok(Self::Deg250),
            500 => Ok(Self::Deg500),
            1000 => Ok(Self::Deg1000),
            2000 => Ok(Self::Deg2000),
            other => Err(InvalidRange(other)),
        }
    }
}

/// Angular rate in °/s.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl GyroF32 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}
