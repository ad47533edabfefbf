//! Async calibration sequencing.
//!
//! Mirrors [`calibration_blocking`](crate::calibration_blocking) over the
//! async bus and delay traits; the math lives in
//! [`calibration`](crate::calibration).

use crate::{
    accel::Accel,
    calibration::{
        accel_trim_bytes, gyro_trim_bytes, is_settled, MeasuredOffsets, MEASURE_DELAY_MS,
        SETTLE_ATTEMPTS, SETTLE_POLL_MS,
    },
    error_async::Error,
    gyro::Gyro,
    sample::RawSample,
    sensor_async::Mpu6050,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// Wait for live data after power-up.
///
/// Reads frames until one settles, or fails with
/// [`Error::CalibrationFailed`] once the retry budget runs out.
pub async fn wait_for_settled<I>(
    mpu: &mut Mpu6050<'_, I>,
    delay: &mut impl DelayNs,
) -> Result<RawSample, Error<I>>
where
    I: I2c,
{
    for _ in 0..SETTLE_ATTEMPTS {
        let sample = mpu.read_raw().await?;
        if is_settled(&sample) {
            return Ok(sample);
        }
        delay.delay_ms(SETTLE_POLL_MS).await;
    }
    Err(Error::CalibrationFailed)
}

/// Measure the resting bias and rewrite the device trim registers.
///
/// The device must be level and stationary. Gravity is removed from the Z
/// axis, so a successful run centers the resting output on (0, 0, +1g) and
/// zero rates.
pub async fn calibrate<I>(
    mpu: &mut Mpu6050<'_, I>,
    delay: &mut impl DelayNs,
) -> Result<MeasuredOffsets, Error<I>>
where
    I: I2c,
{
    wait_for_settled(mpu, delay).await?;
    delay.delay_ms(MEASURE_DELAY_MS).await;
    let sample = mpu.read_raw().await?;
    let offsets = MeasuredOffsets::from_settled_sample(&sample, mpu.config().accel_full_scale);

    let factory = mpu.get_accel_trim().await?;
    let accel_trim = Accel::from_bytes(accel_trim_bytes(&factory, &offsets.accel));
    mpu.set_accel_trim(&accel_trim, delay).await?;

    let gyro_trim = Gyro::from_bytes(gyro_trim_bytes(
        &offsets.gyro,
        mpu.config().gyro_full_scale,
    ));
    mpu.set_gyro_trim(&gyro_trim, delay).await?;

    Ok(offsets)
}
