//! MPU6050 Clock Source Selection
//!
//! Bits 2:0 of `PWR_MGMT_1` pick the clock. Writing the whole register with
//! the internal oscillator selected also clears the SLEEP bit, which is how the
//! driver wakes the device.

/// Available clock sources for the MPU6050.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockSource {
    /// Internal 8MHz oscillator
    Internal = 0,
    /// X-axis gyroscope reference
    Xgyro = 1,
    /// Y-axis gyroscope reference
    Ygyro = 2,
    /// Z-axis gyroscope reference
    Zgyro = 3,
    /// External 32.768kHz crystal
    External32768 = 4,
    /// External 19.2MHz crystal
    External19200 = 5,
    /// Stops the clock
    Stop = 7,
}

impl ClockSource {
    /// `PWR_MGMT_1` value selecting this clock with the device awake
    /// (reset, sleep, cycle and temperature-disable bits all clear).
    pub const fn power_management_value(self) -> u8 {
        self as u8
    }
}
