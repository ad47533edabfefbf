//! Blocking calibration sequencing.
//!
//! Drives the settle loop, the offset measurement and the trim-register
//! rewrite over blocking I2C. The math lives in
//! [`calibration`](crate::calibration), shared with the async variant.

use crate::{
    accel::Accel,
    calibration::{
        accel_trim_bytes, gyro_trim_bytes, is_settled, MeasuredOffsets, MEASURE_DELAY_MS,
        SETTLE_ATTEMPTS, SETTLE_POLL_MS,
    },
    error::Error,
    gyro::Gyro,
    sample::RawSample,
    sensor::Mpu6050,
};
use embedded_hal::{delay::DelayNs, i2c::I2c};

/// Wait for live data after power-up.
///
/// Reads frames until one settles, or fails with
/// [`Error::CalibrationFailed`] once the retry budget runs out.
pub fn wait_for_settled<I>(
    mpu: &mut Mpu6050<'_, I>,
    delay: &mut impl DelayNs,
) -> Result<RawSample, Error<I>>
where
    I: I2c,
{
    for _ in 0..SETTLE_ATTEMPTS {
        let sample = mpu.read_raw()?;
        if is_settled(&sample) {
            return Ok(sample);
        }
        delay.delay_ms(SETTLE_POLL_MS);
    }
    Err(Error::CalibrationFailed)
}

/// Measure the resting bias and rewrite the device trim registers.
///
/// The device must be level and stationary. Gravity is removed from the Z
/// axis, so a successful run centers the resting output on (0, 0, +1g) and
/// zero rates.
pub fn calibrate<I>(
    mpu: &mut Mpu6050<'_, I>,
    delay: &mut impl DelayNs,
) -> Result<MeasuredOffsets, Error<I>>
where
    I: I2c,
{
    wait_for_settled(mpu, delay)?;
    delay.delay_ms(MEASURE_DELAY_MS);
    let sample = mpu.read_raw()?;
    let offsets = MeasuredOffsets::from_settled_sample(&sample, mpu.config().accel_full_scale);

    let factory = mpu.get_accel_trim()?;
    let accel_trim = Accel::from_bytes(accel_trim_bytes(&factory, &offsets.accel));
    mpu.set_accel_trim(&accel_trim, delay)?;

    let gyro_trim = Gyro::from_bytes(gyro_trim_bytes(
        &offsets.gyro,
        mpu.config().gyro_full_scale,
    ));
    mpu.set_gyro_trim(&gyro_trim, delay)?;

    Ok(offsets)
}
