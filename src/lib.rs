#![no_std]

pub mod accel;
pub mod address;
pub mod calibration;
pub mod calibration_async;
pub mod calibration_blocking;
pub mod circular_buffer;
pub mod clock_source;
pub mod complementary_filter;
pub mod config;
pub mod data_ready;
pub mod error;
pub mod error_async;
pub mod gyro;
pub mod median_filter;
pub mod registers;
pub mod sample;
pub mod sensor;
pub mod sensor_async;
pub mod temperature;
