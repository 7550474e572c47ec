//! MPU6050 Device Configuration Policy
//!
//! The driver always configures the device the same way:
//! - awake, clocked from the internal oscillator
//! - 1 kHz output rate (8 kHz gyroscope rate divided by 1 + 7)
//! - widest gyroscope range, ±2000 °/s
//! - widest accelerometer range, ±16 g
//!
//! The full-scale ranges written at init are also the ones used to convert raw
//! samples to physical units, so both sides read them from [`SENSOR_CONFIG`].

use crate::{accel::AccelFullScale, clock_source::ClockSource, gyro::GyroFullScale};

/// Gyroscope output rate with the digital low-pass filter disabled.
pub const GYRO_OUTPUT_RATE_HZ: u32 = 8_000;

/// Register values applied by `init`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SensorConfig {
    pub clock_source: ClockSource,
    pub sample_rate_divider: u8,
    pub gyro_scale: GyroFullScale,
    pub accel_scale: AccelFullScale,
}

impl SensorConfig {
    /// Resulting sample rate: gyroscope output rate / (1 + divider).
    pub const fn sample_rate_hz(&self) -> u32 {
        GYRO_OUTPUT_RATE_HZ / (1 + self.sample_rate_divider as u32)
    }
}

pub const SENSOR_CONFIG: SensorConfig = SensorConfig {
    clock_source: ClockSource::Internal,
    sample_rate_divider: 7,
    gyro_scale: GyroFullScale::Deg2000,
    accel_scale: AccelFullScale::G16,
};

#[cfg(test)]
mod tests {
    use super::SENSOR_CONFIG;

    #[test]
    fn fixed_policy() {
        assert_eq!(SENSOR_CONFIG.sample_rate_hz(), 1_000);
        assert_eq!(SENSOR_CONFIG.clock_source.power_management_value(), 0x00);
        assert_eq!(SENSOR_CONFIG.gyro_scale.config_value(), 0x18);
        assert_eq!(SENSOR_CONFIG.accel_scale.config_value(), 0x18);
        assert_eq!(SENSOR_CONFIG.accel_scale.scale(), 2048.0);
        assert_eq!(SENSOR_CONFIG.gyro_scale.scale(), 16.4);
    }
}
