//! MPU6050 Blocking Driver
//!
//! Every method performs a fresh bus exchange and the driver caches nothing
//! about the device. It owns the bus value it is given; pass `&mut bus` to keep
//! ownership on the caller side, since `&mut I` is itself an `I2c`.
//!
//! Bus failures are returned as soon as they happen; retries are left to the
//! caller.

use crate::{
    accel::{Accel, AccelFullScale},
    address::Address,
    axis::Axis,
    config::SENSOR_CONFIG,
    error::{Error, InitError},
    gyro::{Gyro, GyroFullScale},
    offset::{gyro_register_value, merge_accel_offset},
    registers::{Register, WHO_AM_I_VALUE},
    sample::{Motion6, RawSample},
};
use embedded_hal::i2c::I2c;

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
    /// Construct a new i2c driver for the MPU-6050 and run [`Mpu6050::init`].
    ///
    /// On failure the bus is handed back inside [`InitError`].
    pub fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
        };

        if let Err(error) = sensor.init() {
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

    /// Check the device identity, then wake it and apply [`SENSOR_CONFIG`].
    ///
    /// Issues one read and, if the identity matches, four single-byte writes in
    /// this order: power management, sample rate divider, gyro range, accel
    /// range. Stops at the first failed write, which leaves the device partly
    /// configured. Calling it again on a configured device changes nothing.
    pub fn init(&mut self) -> Result<(), Error<I>> {
        let id = self.read_register(Register::WhoAmI)?;
        if id != WHO_AM_I_VALUE {
            warn!("unexpected WHO_AM_I value {=u8:#x}", id);
            return Err(Error::UnrecognizedDevice(id));
        }

        let config = SENSOR_CONFIG;
        self.write_register(
            Register::PwrMgmt1,
            config.clock_source.power_management_value(),
        )?;
        self.write_register(Register::SmpRtDiv, config.sample_rate_divider)?;
        self.write_register(Register::GyroConfig, config.gyro_scale.config_value())?;
        self.write_register(Register::AccelConfig, config.accel_scale.config_value())?;
        debug!(
            "MPU-6050 configured at {=u32} Hz, {=u16} dps, {=u16} g",
            config.sample_rate_hz(),
            config.gyro_scale.dps(),
            config.accel_scale.g()
        );
        Ok(())
    }

    pub(crate) fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|e| Error::WriteError(e))
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg.addr()], &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg.addr()], buf)?;
        Ok(buf)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg.addr(), value])
    }

    fn write_pair(&mut self, reg: Register, value: i16) -> Result<(), Error<I>> {
        let [high, low] = value.to_be_bytes();
        self.write(&[reg.addr(), high, low])
    }

    fn read_pair(&mut self, reg: Register) -> Result<i16, Error<I>> {
        let mut buf = [0; 2];
        self.read_registers(reg, &mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    pub fn accel(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data)?;
        Ok(Accel::from_bytes(data))
    }

    pub fn gyro(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    /// Two 6-byte burst reads: accelerometer, then gyroscope.
    pub fn read_raw(&mut self) -> Result<RawSample, Error<I>> {
        let accel = self.accel()?;
        let gyro = self.gyro()?;
        Ok(RawSample::new(accel, gyro))
    }

    /// [`Mpu6050::read_raw`] plus the conversion to m/s² and °/s.
    pub fn read_sample(&mut self) -> Result<Motion6, Error<I>> {
        self.read_raw().map(Motion6::from)
    }

    /// Overwrite one gyroscope offset pair.
    ///
    /// `offset` is in the "±1000" convention; `range` is the full-scale range the
    /// offset was measured at and decides how it is rescaled. Values that do not
    /// fit in 16 bits are truncated.
    pub fn set_gyro_offset(
        &mut self,
        axis: Axis,
        offset: i32,
        range: GyroFullScale,
    ) -> Result<(), Error<I>> {
        let value = gyro_register_value(range.offset_scaling().apply(offset));
        trace!("gyro offset {} <- {=i16}", axis, value);
        self.write_pair(axis.gyro_offset_register(), value)
    }

    pub fn set_gyro_offset_x(&mut self, offset: i32, range: GyroFullScale) -> Result<(), Error<I>> {
        self.set_gyro_offset(Axis::X, offset, range)
    }

    pub fn set_gyro_offset_y(&mut self, offset: i32, range: GyroFullScale) -> Result<(), Error<I>> {
        self.set_gyro_offset(Axis::Y, offset, range)
    }

    pub fn set_gyro_offset_z(&mut self, offset: i32, range: GyroFullScale) -> Result<(), Error<I>> {
        self.set_gyro_offset(Axis::Z, offset, range)
    }

    /// All three gyroscope offset pairs in one burst.
    pub fn read_gyro_offsets(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroOffsetX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    /// Read-modify-write of one accelerometer offset pair.
    ///
    /// `offset` is in the 8 g convention and is rescaled for `range`, then
    /// subtracted from the bias currently in the register. Bit 0 of the low
    /// byte is reserved and written back unchanged.
    pub fn set_accel_offset(
        &mut self,
        axis: Axis,
        offset: i32,
        range: AccelFullScale,
    ) -> Result<(), Error<I>> {
        let reg = axis.accel_offset_register();
        let current = self.read_pair(reg)?;
        let value = merge_accel_offset(current, range.offset_scaling(axis).apply(offset));
        trace!("accel offset {} {=i16} -> {=i16}", axis, current, value);
        self.write_pair(reg, value)
    }

    pub fn set_accel_offset_x(&mut self, offset: i32, range: AccelFullScale) -> Result<(), Error<I>> {
        self.set_accel_offset(Axis::X, offset, range)
    }

    pub fn set_accel_offset_y(&mut self, offset: i32, range: AccelFullScale) -> Result<(), Error<I>> {
        self.set_accel_offset(Axis::Y, offset, range)
    }

    pub fn set_accel_offset_z(&mut self, offset: i32, range: AccelFullScale) -> Result<(), Error<I>> {
        self.set_accel_offset(Axis::Z, offset, range)
    }

    /// Stored accelerometer biases, unscaled, one 2-byte read per axis.
    pub fn read_accel_offsets(&mut self) -> Result<[i32; 3], Error<I>> {
        let mut offsets = [0; 3];
        for axis in Axis::ALL {
            offsets[axis.index()] = self.read_pair(axis.accel_offset_register())? as i32;
        }
        Ok(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::Mpu6050;
    use crate::{
        accel::{Accel, AccelFullScale},
        address::Address,
        axis::Axis,
        error::Error,
        gyro::{Gyro, GyroFullScale},
        sample::RawSample,
    };
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x68;

    fn init_transactions() -> Vec<I2cTransaction> {
        vec![
            I2cTransaction::write_read(ADDR, vec![0x75], vec![0x68]),
            I2cTransaction::write(ADDR, vec![0x6B, 0x00]),
            I2cTransaction::write(ADDR, vec![0x19, 0x07]),
            I2cTransaction::write(ADDR, vec![0x1B, 0x18]),
            I2cTransaction::write(ADDR, vec![0x1C, 0x18]),
        ]
    }

    fn sensor(expectations: &[I2cTransaction]) -> Mpu6050<I2cMock> {
        let mut all = init_transactions();
        all.extend_from_slice(expectations);
        Mpu6050::new(I2cMock::new(&all), Address::default()).unwrap()
    }

    #[test]
    fn init_checks_identity_then_writes_configuration() {
        let mpu = sensor(&[]);
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn init_is_repeatable() {
        let mut mpu = sensor(&init_transactions());
        mpu.init().unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn init_rejects_unknown_device_without_writing() {
        let i2c = I2cMock::new(&[I2cTransaction::write_read(ADDR, vec![0x75], vec![0x70])]);
        let Err(mut err) = Mpu6050::new(i2c, Address::default()) else {
            panic!("unknown device accepted");
        };
        assert!(matches!(err.error, Error::UnrecognizedDevice(0x70)));
        assert!(!err.error.is_bus_error());
        err.i2c.done();
    }

    #[test]
    fn init_reports_failed_identity_read() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(ADDR, vec![0x75], vec![0x00]).with_error(ErrorKind::Other)
        ]);
        let Err(mut err) = Mpu6050::new(i2c, Address::default()) else {
            panic!("bus failure ignored");
        };
        assert!(matches!(err.error, Error::WriteReadError(ErrorKind::Other)));
        assert!(err.error.is_bus_error());
        err.i2c.done();
    }

    #[test]
    fn init_stops_at_first_failed_write() {
        for failing in 1..5 {
            let mut expectations = init_transactions();
            expectations.truncate(failing + 1);
            let last = expectations.pop().unwrap().with_error(ErrorKind::Other);
            expectations.push(last);

            let Err(mut err) = Mpu6050::new(I2cMock::new(&expectations), Address::default())
            else {
                panic!("write {} failure ignored", failing);
            };
            assert!(matches!(err.error, Error::WriteError(ErrorKind::Other)));
            err.i2c.done();
        }
    }

    #[test]
    fn alternate_address_still_expects_mpu6050_identity() {
        let i2c = I2cMock::new(&[
            I2cTransaction::write_read(0x69, vec![0x75], vec![0x68]),
            I2cTransaction::write(0x69, vec![0x6B, 0x00]),
            I2cTransaction::write(0x69, vec![0x19, 0x07]),
            I2cTransaction::write(0x69, vec![0x1B, 0x18]),
            I2cTransaction::write(0x69, vec![0x1C, 0x18]),
        ]);
        let mpu = Mpu6050::new(i2c, Address::alternate()).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn read_raw_uses_two_bursts() {
        let mut mpu = sensor(&[
            I2cTransaction::write_read(
                ADDR,
                vec![0x3B],
                vec![0x08, 0x00, 0xF8, 0x00, 0x00, 0x01],
            ),
            I2cTransaction::write_read(
                ADDR,
                vec![0x43],
                vec![0x00, 0xA4, 0xFF, 0x5C, 0x7F, 0xFF],
            ),
        ]);
        let raw = mpu.read_raw().unwrap();
        assert_eq!(
            raw,
            RawSample::new(Accel::new(2048, -2048, 1), Gyro::new(164, -164, i16::MAX))
        );
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn read_sample_converts_to_si_units() {
        let mut mpu = sensor(&[
            I2cTransaction::write_read(
                ADDR,
                vec![0x3B],
                vec![0x00, 0x00, 0x00, 0x00, 0x08, 0x00],
            ),
            I2cTransaction::write_read(
                ADDR,
                vec![0x43],
                vec![0x00, 0xA4, 0x00, 0x00, 0x00, 0x00],
            ),
        ]);
        let sample = mpu.read_sample().unwrap();
        assert_eq!(sample.raw.accel.z(), 2048);
        assert!((sample.physical.accel.z() - 9.80665).abs() < 1e-4);
        assert!((sample.physical.gyro.x() - 10.0).abs() < 1e-4);
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn read_raw_propagates_gyro_burst_failure() {
        let mut mpu = sensor(&[
            I2cTransaction::write_read(ADDR, vec![0x3B], vec![0; 6]),
            I2cTransaction::write_read(ADDR, vec![0x43], vec![0; 6]).with_error(ErrorKind::Other),
        ]);
        assert!(matches!(
            mpu.read_raw(),
            Err(Error::WriteReadError(ErrorKind::Other))
        ));
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn gyro_offset_is_rescaled_for_range() {
        let mut mpu = sensor(&[
            I2cTransaction::write(ADDR, vec![0x13, 0x00, 0xFA]),
            I2cTransaction::write(ADDR, vec![0x13, 0x01, 0xF4]),
            I2cTransaction::write(ADDR, vec![0x13, 0x03, 0xE8]),
            I2cTransaction::write(ADDR, vec![0x13, 0x07, 0xD0]),
        ]);
        mpu.set_gyro_offset_x(1000, GyroFullScale::Deg250).unwrap();
        mpu.set_gyro_offset_x(1000, GyroFullScale::Deg500).unwrap();
        mpu.set_gyro_offset_x(1000, GyroFullScale::Deg1000).unwrap();
        mpu.set_gyro_offset_x(1000, GyroFullScale::Deg2000).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn gyro_offset_targets_axis_pair() {
        let mut mpu = sensor(&[
            I2cTransaction::write(ADDR, vec![0x15, 0xF8, 0x30]),
            I2cTransaction::write(ADDR, vec![0x17, 0xFF, 0xFF]),
        ]);
        mpu.set_gyro_offset_y(-1000, GyroFullScale::Deg2000).unwrap();
        mpu.set_gyro_offset(Axis::Z, -7, GyroFullScale::Deg250).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn read_gyro_offsets_in_one_burst() {
        let mut mpu = sensor(&[I2cTransaction::write_read(
            ADDR,
            vec![0x13],
            vec![0x07, 0xD0, 0x00, 0x00, 0xFF, 0xFE],
        )]);
        assert_eq!(mpu.read_gyro_offsets().unwrap(), Gyro::new(2000, 0, -2));
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn accel_offset_at_16g_is_axis_asymmetric() {
        let mut mpu = sensor(&[
            I2cTransaction::write_read(ADDR, vec![0x06], vec![0x00, 0x00]),
            // 0 - 1156 / 1.156 = -1000
            I2cTransaction::write(ADDR, vec![0x06, 0xFC, 0x18]),
            I2cTransaction::write_read(ADDR, vec![0x0A], vec![0x00, 0x00]),
            // 0 - 1156 / 1.17 = -988
            I2cTransaction::write(ADDR, vec![0x0A, 0xFC, 0x24]),
        ]);
        mpu.set_accel_offset_x(1156, AccelFullScale::G16).unwrap();
        mpu.set_accel_offset_z(1156, AccelFullScale::G16).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn accel_offset_subtracts_from_stored_bias() {
        let mut mpu = sensor(&[
            // 0x0400 - 800 / 8 = 0x039C
            I2cTransaction::write_read(ADDR, vec![0x08], vec![0x04, 0x00]),
            I2cTransaction::write(ADDR, vec![0x08, 0x03, 0x9C]),
            // 0x0400 - (-800 / 2) = 0x0590
            I2cTransaction::write_read(ADDR, vec![0x0A], vec![0x04, 0x00]),
            I2cTransaction::write(ADDR, vec![0x0A, 0x05, 0x90]),
        ]);
        mpu.set_accel_offset_y(800, AccelFullScale::G2).unwrap();
        mpu.set_accel_offset(Axis::Z, -800, AccelFullScale::G8).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn accel_offset_preserves_reserved_bit() {
        let mut mpu = sensor(&[
            // 0x0401 - 72 / 8 = 0x03F8, reserved bit restored
            I2cTransaction::write_read(ADDR, vec![0x08], vec![0x04, 0x01]),
            I2cTransaction::write(ADDR, vec![0x08, 0x03, 0xF9]),
            // 0x0400 - 4 / 4 = 0x03FF, reserved bit stays clear
            I2cTransaction::write_read(ADDR, vec![0x06], vec![0x04, 0x00]),
            I2cTransaction::write(ADDR, vec![0x06, 0x03, 0xFE]),
        ]);
        mpu.set_accel_offset_y(72, AccelFullScale::G2).unwrap();
        mpu.set_accel_offset_x(4, AccelFullScale::G4).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn accel_offset_is_not_written_when_read_fails() {
        let mut mpu = sensor(&[I2cTransaction::write_read(ADDR, vec![0x06], vec![0x00, 0x00])
            .with_error(ErrorKind::Other)]);
        assert!(matches!(
            mpu.set_accel_offset_x(100, AccelFullScale::G2),
            Err(Error::WriteReadError(ErrorKind::Other))
        ));
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn accel_offsets_read_back_as_stored() {
        let mut mpu = sensor(&[
            I2cTransaction::write_read(ADDR, vec![0x06], vec![0x00, 0x00]),
            I2cTransaction::write(ADDR, vec![0x06, 0xFC, 0x18]),
            I2cTransaction::write_read(ADDR, vec![0x06], vec![0xFC, 0x18]),
            I2cTransaction::write_read(ADDR, vec![0x08], vec![0x00, 0x02]),
            I2cTransaction::write_read(ADDR, vec![0x0A], vec![0x12, 0x35]),
        ]);
        mpu.set_accel_offset_x(1156, AccelFullScale::G16).unwrap();
        // the stored register value, not the 1156 passed in
        assert_eq!(mpu.read_accel_offsets().unwrap(), [-1000, 2, 0x1235]);
        let mut i2c = mpu.release();
        i2c.done();
    }

    #[test]
    fn numeric_range_errors_convert() {
        fn offset_at(mpu: &mut Mpu6050<I2cMock>, dps: u16) -> Result<(), Error<I2cMock>> {
            let range = GyroFullScale::try_from(dps)?;
            mpu.set_gyro_offset_x(0, range)
        }

        let mut mpu = sensor(&[I2cTransaction::write(ADDR, vec![0x13, 0x00, 0x00])]);
        assert!(matches!(offset_at(&mut mpu, 300), Err(Error::InvalidRange(300))));
        offset_at(&mut mpu, 500).unwrap();
        let mut i2c = mpu.release();
        i2c.done();
    }
}
