//! Trim-register inspection and recalibration over the blocking API.
//!
//! Logs the device identity, the factory trim values, the measured resting
//! bias and the trim values after calibration, then streams scaled readings.
//! Useful for checking how far a board has drifted before deciding to bake
//! offsets into an application.
//!
//! Hardware setup:
//! - SDA -> GP14
//! - SCL -> GP15
//! - INT -> GP16 (required: the data-ready line paces the reads)
//! - VCC -> 3.3V
//! - GND -> GND

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::{
    block::ImageDef,
    config::Config,
    gpio::{Input, Pull},
};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use mpu6050_fusion::{
    address::Address, config::Mpu6050Config, data_ready::DataReady, sensor::Mpu6050,
};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

static DATA_READY: DataReady = DataReady::new();

#[embassy_executor::task]
async fn watch_data_ready(mut int_pin: Input<'static>) {
    loop {
        int_pin.wait_for_rising_edge().await;
        DATA_READY.notify();
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    let sda = p.PIN_14;
    let scl = p.PIN_15;
    let bus = embassy_rp::i2c::I2c::new_blocking(
        p.I2C1,
        scl,
        sda,
        embassy_rp::i2c::Config::default(),
    );

    let int_pin = Input::new(p.PIN_16, Pull::Down);
    spawner.spawn(watch_data_ready(int_pin)).unwrap();

    let mut delay = Delay;
    info!("initializing, keep the board level and still");
    let mut sensor = Mpu6050::new(
        bus,
        Address::default(),
        Mpu6050Config::default(),
        &DATA_READY,
        &mut delay,
    )
    .unwrap();

    info!("who_am_i: {=u8:x}", sensor.who_am_i().unwrap());
    log_trims(&mut sensor);

    info!("recalibrating");
    let offsets = sensor.calibrate(&mut delay).unwrap();
    info!(
        "measured bias: accel=({}, {}, {}) gyro=({}, {}, {})",
        offsets.accel.x(),
        offsets.accel.y(),
        offsets.accel.z(),
        offsets.gyro.x(),
        offsets.gyro.y(),
        offsets.gyro.z()
    );
    log_trims(&mut sensor);

    loop {
        if sensor.available() {
            let sample = sensor.read_scaled().unwrap();
            info!(
                "accel [g]: ({}, {}, {})  gyro [deg/s]: ({}, {}, {})  temp: {}",
                sample.accel.x(),
                sample.accel.y(),
                sample.accel.z(),
                sample.gyro.x(),
                sample.gyro.y(),
                sample.gyro.z(),
                sample.temperature
            );
        }
        Timer::after_millis(500).await;
    }
}

fn log_trims<I>(sensor: &mut Mpu6050<'_, I>)
where
    I: embedded_hal::i2c::I2c,
{
    let accel = sensor.get_accel_trim().unwrap();
    let gyro = sensor.get_gyro_trim().unwrap();
    info!(
        "trim registers: accel=({}, {}, {}) gyro=({}, {}, {})",
        accel.x(),
        accel.y(),
        accel.z(),
        gyro.x(),
        gyro.y(),
        gyro.z()
    );
}
