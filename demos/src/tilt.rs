//! Interrupt-driven tilt estimation on a Raspberry Pi Pico 2.
//!
//! Wires the full pipeline: a GPIO task forwards INT-pin edges to a shared
//! [`DataReady`] flag, the main loop drains frames when the flag is set,
//! median-filters each accelerometer axis and fuses the result with the gyro
//! rates into pitch and roll.
//!
//! Hardware setup:
//! - SDA -> GP14
//! - SCL -> GP15
//! - INT -> GP16
//! - VCC -> 3.3V
//! - GND -> GND
//!
//! Keep the board level and still until "calibrated" is logged.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::{
    block::ImageDef,
    config::Config,
    gpio::{Input, Pull},
    i2c::InterruptHandler,
};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use mpu6050_fusion::{
    accel::{Accel, AccelFullScale},
    address::Address,
    clock_source::ClockSource,
    complementary_filter::ComplementaryFilter,
    config::{DigitalLowPassFilter, Mpu6050Config},
    data_ready::DataReady,
    gyro::GyroFullScale,
    median_filter::MedianFilter,
    sensor_async::Mpu6050,
};

embassy_rp::bind_interrupts!(struct Irqs {
    I2C1_IRQ => InterruptHandler<embassy_rp::peripherals::I2C1>;
});

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

static DATA_READY: DataReady = DataReady::new();

const SAMPLE_RATE_HZ: u32 = 100;
const TIME_CONSTANT_S: f32 = 0.5;
const MEDIAN_WINDOW: usize = 9;

/// Forward INT-pin edges to the shared flag. The device drives INT
/// push-pull, active high.
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
    let bus = embassy_rp::i2c::I2c::new_async(
        p.I2C1,
        scl,
        sda,
        Irqs,
        embassy_rp::i2c::Config::default(),
    );

    let int_pin = Input::new(p.PIN_16, Pull::Down);
    spawner.spawn(watch_data_ready(int_pin)).unwrap();

    let config = Mpu6050Config {
        clock_source: ClockSource::Xgyro,
        sample_rate_hz: SAMPLE_RATE_HZ,
        digital_lowpass_filter: DigitalLowPassFilter::Filter2,
        accel_full_scale: AccelFullScale::G16,
        gyro_full_scale: GyroFullScale::Deg250,
    };

    let mut delay = Delay;
    info!("initializing, keep the board level and still");
    let mut sensor = Mpu6050::new(bus, Address::default(), config, &DATA_READY, &mut delay)
        .await
        .unwrap();
    info!("calibrated");

    let mut median_x: MedianFilter<MEDIAN_WINDOW> = MedianFilter::new();
    let mut median_y: MedianFilter<MEDIAN_WINDOW> = MedianFilter::new();
    let mut median_z: MedianFilter<MEDIAN_WINDOW> = MedianFilter::new();
    let mut fused = ComplementaryFilter::new(1.0 / SAMPLE_RATE_HZ as f32, TIME_CONSTANT_S);

    let mut frames: u32 = 0;
    loop {
        if sensor.available() {
            let sample = sensor.read_raw().await.unwrap();

            median_x.update(sample.accel.x());
            median_y.update(sample.accel.y());
            median_z.update(sample.accel.z());

            let accel = Accel::new(median_x.median(), median_y.median(), median_z.median());
            let gyro = sample.gyro.scaled(config.gyro_full_scale);
            fused.update(accel, gyro);

            frames += 1;
            if frames % SAMPLE_RATE_HZ == 0 {
                info!(
                    "pitch={} roll={} temp={}",
                    fused.pitch(),
                    fused.roll(),
                    sample.temperature.celsius()
                );
            }
        }
        Timer::after_millis(1).await;
    }
}
