//! Embassy Async MPU6050 Example
//!
//! Runs on a Raspberry Pi Pico 2 and shows how to:
//! - Initialize the sensor with async I2C
//! - Write commissioning-time offsets into the sensor's bias registers
//! - Continuously read samples in m/s² and °/s
//!
//! Hardware Setup:
//! - Connect MPU6050 to Raspberry Pi Pico:
//!   - SDA -> GP14
//!   - SCL -> GP15
//!   - VCC -> 3.3V
//!   - GND -> GND

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_rp::{block::ImageDef, config::Config, i2c::InterruptHandler};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use mpu6050_offsets::{
    accel::AccelFullScale, address::Address, gyro::GyroFullScale, sensor_async::Mpu6050,
};

embassy_rp::bind_interrupts!(struct Irqs {
    I2C1_IRQ => InterruptHandler<embassy_rp::peripherals::I2C1>;
});

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// Offsets measured on this board with the sensor lying flat, Z up.
const GYRO_OFFSETS: [i32; 3] = [-124, 38, 17];
const GYRO_OFFSET_RANGE: GyroFullScale = GyroFullScale::Deg1000;
const ACCEL_OFFSETS: [i32; 3] = [96, -40, 210];
const ACCEL_OFFSET_RANGE: AccelFullScale = AccelFullScale::G8;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    let sda = p.PIN_14;
    let scl = p.PIN_15;
    let config = embassy_rp::i2c::Config::default();
    let bus = embassy_rp::i2c::I2c::new_async(p.I2C1, scl, sda, Irqs, config);

    let mut sensor = match Mpu6050::new(bus, Address::default()).await {
        Ok(sensor) => sensor,
        Err(e) => {
            error!("MPU6050 init failed: {}", defmt::Debug2Format(&e));
            return;
        }
    };
    info!("MPU6050 Initialized");

    // The offset registers keep their value until power is removed, so this only
    // needs to run once per power cycle.
    sensor
        .set_gyro_offset_x(GYRO_OFFSETS[0], GYRO_OFFSET_RANGE)
        .await
        .unwrap();
    sensor
        .set_gyro_offset_y(GYRO_OFFSETS[1], GYRO_OFFSET_RANGE)
        .await
        .unwrap();
    sensor
        .set_gyro_offset_z(GYRO_OFFSETS[2], GYRO_OFFSET_RANGE)
        .await
        .unwrap();
    sensor
        .set_accel_offset_x(ACCEL_OFFSETS[0], ACCEL_OFFSET_RANGE)
        .await
        .unwrap();
    sensor
        .set_accel_offset_y(ACCEL_OFFSETS[1], ACCEL_OFFSET_RANGE)
        .await
        .unwrap();
    sensor
        .set_accel_offset_z(ACCEL_OFFSETS[2], ACCEL_OFFSET_RANGE)
        .await
        .unwrap();

    let accel_offsets = sensor.read_accel_offsets().await.unwrap();
    let gyro_offsets = sensor.read_gyro_offsets().await.unwrap();
    info!("Accel offset registers: {}", accel_offsets);
    info!("Gyro offset registers: {}", gyro_offsets);

    loop {
        match sensor.read_sample().await {
            Ok(sample) => {
                let a = sample.physical.accel;
                let w = sample.physical.gyro;
                info!(
                    "Accelerometer [m/s²]: x={}, y={}, z={}",
                    a.x(),
                    a.y(),
                    a.z()
                );
                info!("Gyroscope [deg/s]: x={}, y={}, z={}", w.x(), w.y(), w.z());
            }
            Err(e) => error!("read failed: {}", defmt::Debug2Format(&e)),
        }
        Timer::after_millis(1000).await;
    }
}
