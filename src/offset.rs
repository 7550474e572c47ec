//! Hardware Offset Arithmetic
//!
//! The MPU-6050 keeps a per-axis bias in its offset registers, subtracted from
//! every sample before it is reported. This module holds the bus-free half of
//! writing those registers:
//! - rescaling a caller offset to the register's fixed resolution
//! - merging a new accelerometer bias into the current register value while
//!   keeping the reserved bit 0 intact
//!
//! Gyroscope offsets are taken in the "±1000" convention and the register has a
//! fixed density of 32.8 LSB per °/s, so the selected full-scale range decides
//! whether the value is divided or multiplied. Accelerometer offsets are taken
//! in the 8 g convention; at 16 g a per-axis empirical correction applies.

/// Reserved bit in the low byte of every accelerometer offset pair.
pub const PRESERVE_MASK: i16 = 0x0001;

/// How a caller offset is brought to register units for a given full-scale range.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum OffsetScaling {
    /// Integer division, truncating toward zero.
    Divide(i32),
    /// Integer multiplication, wrapping on overflow.
    Multiply(i32),
    /// Division by a near-unity factor in double precision, truncated toward zero.
    Correction(f64),
}

impl OffsetScaling {
    pub fn apply(self, value: i32) -> i32 {
        match self {
            Self::Divide(divisor) => value.wrapping_div(divisor),
            Self::Multiply(factor) => value.wrapping_mul(factor),
            Self::Correction(factor) => (value as f64 / factor) as i32,
        }
    }
}

/// Register value for a gyroscope offset, truncated to 16 bits.
pub fn gyro_register_value(scaled: i32) -> i16 {
    scaled as i16
}

/// New content of an accelerometer offset pair.
///
/// The scaled offset is subtracted from the bias currently stored (the register
/// holds a negative correction). Bit 0 of the result always equals bit 0 of
/// `current`; every other bit comes from the subtraction, wrapped to 16 bits.
pub fn merge_accel_offset(current: i16, scaled: i32) -> i16 {
    let biased = (current as i32).wrapping_sub(scaled) as i16;
    (current & PRESERVE_MASK) | (biased & !PRESERVE_MASK)
}
