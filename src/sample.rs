//! Motion Samples
//!
//! A [`RawSample`] is what the two 6-byte burst reads return. [`to_physical`]
//! turns it into SI-consistent values (m/s² and °/s) using the full-scale
//! ranges configured at init. [`Motion6`] bundles both for callers that just
//! want one reading.

use crate::{
    accel::{Accel, AccelF32},
    config::SENSOR_CONFIG,
    gyro::{Gyro, GyroF32},
};

/// Six raw 16-bit codes: acceleration then angular rate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    pub accel: Accel,
    pub gyro: Gyro,
}

impl RawSample {
    pub fn new(accel: Accel, gyro: Gyro) -> Self {
        Self { accel, gyro }
    }

    pub fn to_physical(&self) -> PhysicalSample {
        to_physical(*self)
    }
}

/// Acceleration in m/s² and angular rate in °/s.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalSample {
    pub accel: AccelF32,
    pub gyro: GyroF32,
}

/// Convert raw codes at the configured ±16 g / ±2000 °/s ranges.
pub fn to_physical(raw: RawSample) -> PhysicalSample {
    PhysicalSample {
        accel: raw
            .accel
            .scaled(SENSOR_CONFIG.accel_scale)
            .to_meters_per_second_squared(),
        gyro: raw.gyro.scaled(SENSOR_CONFIG.gyro_scale),
    }
}

/// One reading with both its raw codes and physical values.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion6 {
    pub raw: RawSample,
    pub physical: PhysicalSample,
}

impl From<RawSample> for Motion6 {
    fn from(raw: RawSample) -> Self {
        Self {
            raw,
            physical: to_physical(raw),
        }
    }
}
