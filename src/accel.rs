use crate::{axis::Axis, error::InvalidRange, offset::OffsetScaling};

/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Raw acceleration readings vector.
/// Also used to represent acceleration calibration offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accel {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Accel {
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

    /// Convert to g at the given full-scale range.
    pub fn scaled(&self, scale: AccelFullScale) -> AccelF32 {
        AccelF32 {
            x: scale.scale_value(self.x),
            y: scale.scale_value(self.y),
            z: scale.scale_value(self.z),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelFullScale {
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelFullScale {
    /// LSB per g.
    pub const fn scale(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }

    /// Full-scale magnitude in g.
    pub const fn g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Value written to [`Register::AccelConfig`](crate::registers::Register::AccelConfig).
    pub const fn config_value(self) -> u8 {
        (self as u8) << 3
    }

    pub fn scale_value(self, value: i16) -> f32 {
        (value as f32) / self.scale()
    }

    /// Scaling applied to an offset expressed in the 8 g convention before it is
    /// subtracted from the offset register.
    ///
    /// The 16 g factors were measured per axis during commissioning and differ
    /// between Z and X/Y.
    pub const fn offset_scaling(self, axis: Axis) -> OffsetScaling {
        match (self, axis) {
            (Self::G2, _) => OffsetScaling::Divide(8),
            (Self::G4, _) => OffsetScaling::Divide(4),
            (Self::G8, _) => OffsetScaling::Divide(2),
            (Self::G16, Axis::X | Axis::Y) => OffsetScaling::Correction(1.156),
            (Self::G16, Axis::Z) => OffsetScaling::Correction(1.17),
        }
    }
}

impl TryFrom<u16> for AccelFullScale {
    type Error = InvalidRange;

    /// Accepts the full-scale magnitude in g (2, 4, 8 or 16).
    fn try_from(g: u16) -> Result<Self, Self::Error> {
        match g {
            2 => Ok(Self::G2),
            4 => Ok(Self::G4),
            8 => Ok(Self::G8),
            16 => Ok(Self::G16),
            other => Err(InvalidRange(other)),
        }
    }
}

/// Acceleration in g.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl AccelF32 {
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

    /// Same vector in m/s².
    pub fn to_meters_per_second_squared(&self) -> AccelF32 {
        AccelF32 {
            x: self.x * STANDARD_GRAVITY,
            y: self.y * STANDARD_GRAVITY,
            z: self.z * STANDARD_GRAVITY,
        }
    }
}
