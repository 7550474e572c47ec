//! MPU6050 I2C Address Configuration
//!
//! The MPU6050 answers on one of two 7-bit addresses, picked by the AD0 pin:
//! - 0x68 (default, AD0 low or floating)
//! - 0x69 (alternate, AD0 high)

/// Represents an MPU6050 I2C address.
///
/// These are 7-bit addresses as expected by `embedded-hal`. The HAL shifts
/// them into the 8-bit address field on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Address {
    /// Address used when AD0 is connected to VCC.
    pub const fn alternate() -> Self {
        Self(0x69)
    }
}

impl Default for Address {
    /// Returns the default I2C address (0x68).
    fn default() -> Self {
        Self(0x68)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
