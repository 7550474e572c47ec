//! MPU6050 Asynchronous Driver Implementation
//!
//! Non-blocking interface to the InvenSense MPU-6050 built on
//! `embedded-hal-async`. It mirrors the blocking version (sensor.rs) one to
//! one: same register traffic, same ordering, same error taxonomy. Only the
//! bus calls are awaited; offset scaling and sample conversion are shared.
//!
//! Each call is still a single request/response exchange. The driver does no
//! locking, so sharing one bus between tasks needs an external mutex.

use crate::{
    accel::{Accel, AccelFullScale},
    address::Address,
    axis::Axis,
    config::SENSOR_CONFIG,
    error_async::{Error, InitError},
    gyro::{Gyro, GyroFullScale},
    offset::{gyro_register_value, merge_accel_offset},
    registers::{Register, WHO_AM_I_VALUE},
    sample::{Motion6, RawSample},
};

use embedded_hal_async::i2c::I2c;

#[cfg(feature = "defmt-03")]
use defmt::{debug, trace, warn};

#[cfg(not(feature = "defmt-03"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "defmt-03"))]
macro_rules! warn {
    ($($arg:tt)*) => {{}};
}

/// InvenSense MPU-6050 Driver
pub struct Mpu6050<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Construct a new i2c driver for the MPU-6050 and run [`Mpu6050::init`]
    pub async fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
        };

        if let Err(error) = sensor.init().await {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Verify WHO_AM_I, then write power management, sample rate divider,
    /// gyro range and accel range in that order, stopping at the first failure.
    pub async fn init(&mut self) -> Result<(), Error<I>> {
        let id = self.read_register(Register::WhoAmI).await?;
        if id != WHO_AM_I_VALUE {
            warn!("unexpected WHO_AM_I value {=u8:#x}", id);
            return Err(Error::UnrecognizedDevice(id));
        }

        let config = SENSOR_CONFIG;
        self.write_register(
            Register::PwrMgmt1,
            config.clock_source.power_management_value(),
        )
        .await?;
        self.write_register(Register::SmpRtDiv, config.sample_rate_divider)
            .await?;
        self.write_register(Register::GyroConfig, config.gyro_scale.config_value())
            .await?;
        self.write_register(Register::AccelConfig, config.accel_scale.config_value())
            .await?;
        debug!(
            "MPU-6050 configured at {=u32} Hz, {=u16} dps, {=u16} g",
            config.sample_rate_hz(),
            config.gyro_scale.dps(),
            config.accel_scale.g()
        );
        Ok(())
    }

    pub(crate) async fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .await
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(|e| Error::WriteError(e))
    }

    pub(crate) async fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg.addr()], &mut buf).await?;
        Ok(buf[0])
    }

    pub(crate) async fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg.addr()], buf).await?;
        Ok(buf)
    }

    pub(crate) async fn write_register(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<I>> {
        self.write(&[reg.addr(), value]).await
    }

    async fn write_pair(&mut self, reg: Register, value: i16) -> Result<(), Error<I>> {
        let [high, low] = value.to_be_bytes();
        self.write(&[reg.addr(), high, low]).await
    }

    async fn read_pair(&mut self, reg: Register) -> Result<i16, Error<I>> {
        let mut buf = [0; 2];
        self.read_registers(reg, &mut buf).await?;
        Ok(i16::from_be_bytes(buf))
    }

    pub async fn accel(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data).await?;
        Ok(Accel::from_bytes(data))
    }

    pub async fn gyro(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data).await?;
        Ok(Gyro::from_bytes(data))
    }

    /// Accelerometer burst followed by gyroscope burst.
    pub async fn read_raw(&mut self) -> Result<RawSample, Error<I>> {
        let accel = self.accel().await?;
        let gyro = self.gyro().await?;
        Ok(RawSample::new(accel, gyro))
    }

    pub async fn read_sample(&mut self) -> Result<Motion6, Error<I>> {
        self.read_raw().await.map(Motion6::from)
    }

    /// Overwrite one gyroscope offset pair, rescaled from the "±1000" convention
    /// for `range`.
    pub async fn set_gyro_offset(
        &mut self,
        axis: Axis,
        offset: i32,
        range: GyroFullScale,
    ) -> Result<(), Error<I>> {
        let value = gyro_register_value(range.offset_scaling().apply(offset));
        trace!("gyro offset {} <- {=i16}", axis, value);
        self.write_pair(axis.gyro_offset_register(), value).await
    }

    pub async fn set_gyro_offset_x(
        &mut self,
        offset: i32,
        range: GyroFullScale,
    ) -> Result<(), Error<I>> {
        self.set_gyro_offset(Axis::X, offset, range).await
    }

    pub async fn set_gyro_offset_y(
        &mut self,
        offset: i32,
        range: GyroFullScale,
    ) -> Result<(), Error<I>> {
        self.set_gyro_offset(Axis::Y, offset, range).await
    }

    pub async fn set_gyro_offset_z(
        &mut self,
        offset: i32,
        range: GyroFullScale,
    ) -> Result<(), Error<I>> {
        self.set_gyro_offset(Axis::Z, offset, range).await
    }

    pub async fn read_gyro_offsets(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroOffsetX_H, &mut data)
            .await?;
        Ok(Gyro::from_bytes(data))
    }

    /// Subtract a rescaled offset from the stored accelerometer bias, keeping the
    /// reserved bit 0 of the low byte.
    pub async fn set_accel_offset(
        &mut self,
        axis: Axis,
        offset: i32,
        range: AccelFullScale,
    ) -> Result<(), Error<I>> {
        let reg = axis.accel_offset_register();
        let current = self.read_pair(reg).await?;
        let value = merge_accel_offset(current, range.offset_scaling(axis).apply(offset));
        trace!("accel offset {} {=i16} -> {=i16}", axis, current, value);
        self.write_pair(reg, value).await
    }

    pub async fn set_accel_offset_x(
        &mut self,
        offset: i32,
        range: AccelFullScale,
    ) -> Result<(), Error<I>> {
        self.set_accel_offset(Axis::X, offset, range).await
    }

    pub async fn set_accel_offset_y(
        &mut self,
        offset: i32,
        range: AccelFullScale,
    ) -> Result<(), Error<I>> {
        self.set_accel_offset(Axis::Y, offset, range).await
    }

    pub async fn set_accel_offset_z(
        &mut self,
        offset: i32,
        range: AccelFullScale,
    ) -> Result<(), Error<I>> {
        self.set_accel_offset(Axis::Z, offset, range).await
    }

    pub async fn read_accel_offsets(&mut self) -> Result<[i32; 3], Error<I>> {
        let mut offsets = [0; 3];
        for axis in Axis::ALL {
            offsets[axis.index()] = self.read_pair(axis.accel_offset_register()).await? as i32;
        }
        Ok(offsets)
    }
}
