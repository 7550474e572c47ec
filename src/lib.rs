//! `no_std` driver for the InvenSense MPU-6050 over `embedded-hal` I2C.
//!
//! ```ignore
//! use mpu6050_offsets::{address::Address, axis::Axis, gyro::GyroFullScale, sensor::Mpu6050};
//!
//! let mut mpu = Mpu6050::new(i2c, Address::default())?;
//! let sample = mpu.read_sample()?;
//! mpu.set_gyro_offset(Axis::Z, -120, GyroFullScale::Deg1000)?;
//! ```
#![cfg_attr(not(test), no_std)]

pub mod accel;
pub mod address;
pub mod axis;
pub mod clock_source;
pub mod config;
pub mod error;
pub mod error_async;
pub mod gyro;
pub mod offset;
pub mod registers;
pub mod sample;
pub mod sensor;
pub mod sensor_async;
