//! Offset calibration math.
//!
//! The device applies per-axis trim values in hardware before samples reach
//! the output registers. Calibration measures the resting bias of a level,
//! stationary device and rewrites the trim registers so the output centers on
//! (0, 0, +1g) for the accelerometer and zero rate for the gyro.
//!
//! Everything in this module is pure and shared by the blocking and async
//! sequencers in [`calibration_blocking`](crate::calibration_blocking) and
//! [`calibration_async`](crate::calibration_async).

use crate::accel::{Accel, AccelFullScale};
use crate::gyro::{Gyro, GyroFullScale};
use crate::sample::RawSample;

/// Retry budget for the power-up settle loop.
pub(crate) const SETTLE_ATTEMPTS: usize = 256;
/// Delay between settle-loop reads.
pub(crate) const SETTLE_POLL_MS: u32 = 2;
/// Pause between settling and taking the offset measurement.
pub(crate) const MEASURE_DELAY_MS: u32 = 100;

/// Number of exactly-zero axis values across one frame's accelerometer and
/// gyro readings.
pub(crate) fn zeroed_axes(sample: &RawSample) -> usize {
    let values = [
        sample.accel.x(),
        sample.accel.y(),
        sample.accel.z(),
        sample.gyro.x(),
        sample.gyro.y(),
        sample.gyro.z(),
    ];
    values.iter().filter(|value| **value == 0).count()
}

/// Whether a frame looks like live sensor data.
///
/// Right after power-up the output registers read zero until the signal paths
/// come alive. Frames with two or more exactly-zero axis values count as not
/// yet settled.
pub(crate) fn is_settled(sample: &RawSample) -> bool {
    zeroed_axes(sample) < 2
}

/// Resting bias measured from a settled, level, stationary device.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct MeasuredOffsets {
    pub accel: Accel,
    pub gyro: Gyro,
}

impl MeasuredOffsets {
    /// Extract the bias from a settled frame.
    ///
    /// One g is subtracted from the accelerometer Z axis so a level device
    /// contributes only its bias, not gravity.
    pub fn from_settled_sample(sample: &RawSample, accel_scale: AccelFullScale) -> Self {
        let accel = Accel::new(
            sample.accel.x(),
            sample.accel.y(),
            sample.accel.z().wrapping_sub(accel_scale.gravity_lsb()),
        );
        Self {
            accel,
            gyro: sample.gyro,
        }
    }
}

/// New accelerometer trim bytes from the factory trim and a measured bias.
///
/// Bit 0 of each factory trim word is a temperature-compensation flag that
/// must survive the rewrite: the new magnitude is `factory - measured / 8`
/// (truncating division) and the preserved bit is OR-ed back into the low
/// byte. Output is big-endian, x/y/z order, ready for the six trim registers.
pub fn accel_trim_bytes(factory: &Accel, measured: &Accel) -> [u8; 6] {
    let factory = [factory.x(), factory.y(), factory.z()];
    let measured = [measured.x(), measured.y(), measured.z()];
    let mut out = [0u8; 6];
    for axis in 0..3 {
        let preserved = (factory[axis] & 0x0001) as u8;
        let trimmed = factory[axis].wrapping_sub(measured[axis] / 8);
        let bytes = trimmed.to_be_bytes();
        out[axis * 2] = bytes[0];
        out[axis * 2 + 1] = bytes[1] | preserved;
    }
    out
}

/// New gyro trim bytes from a measured bias.
///
/// The trim registers run at the ±1000 deg/s scale, so the measured value is
/// divided by [`GyroFullScale::offset_divisor`] before negation. Output is
/// big-endian, x/y/z order, ready for the six trim registers.
pub fn gyro_trim_bytes(measured: &Gyro, scale: GyroFullScale) -> [u8; 6] {
    let divisor = scale.offset_divisor();
    let measured = [measured.x(), measured.y(), measured.z()];
    let mut out = [0u8; 6];
    for axis in 0..3 {
        let bias = (-(measured[axis] as f32 / divisor)) as i16;
        let bytes = bias.to_be_bytes();
        out[axis * 2] = bytes[0];
        out[axis * 2 + 1] = bytes[1];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        accel_trim_bytes, gyro_trim_bytes, is_settled, zeroed_axes, MeasuredOffsets,
    };
    use crate::accel::{Accel, AccelFullScale};
    use crate::gyro::{Gyro, GyroFullScale};
    use crate::sample::RawSample;
    use crate::temperature::Temperature;

    fn frame(accel: Accel, gyro: Gyro) -> RawSample {
        RawSample {
            accel,
            temperature: Temperature::new(0),
            gyro,
        }
    }

    #[test]
    fn powerup_frames_are_not_settled() {
        let empty = frame(Accel::new(0, 0, 0), Gyro::new(0, 0, 0));
        assert_eq!(zeroed_axes(&empty), 6);
        assert!(!is_settled(&empty));

        let partial = frame(Accel::new(12, 0, 16400), Gyro::new(0, 3, -2));
        assert_eq!(zeroed_axes(&partial), 2);
        assert!(!is_settled(&partial));
    }

    #[test]
    fn live_frames_are_settled() {
        let live = frame(Accel::new(12, 0, 16400), Gyro::new(1, 3, -2));
        assert_eq!(zeroed_axes(&live), 1);
        assert!(is_settled(&live));
    }

    #[test]
    fn gravity_removed_from_z() {
        let sample = frame(Accel::new(5, -3, 16500), Gyro::new(2, -1, 4));
        let offsets = MeasuredOffsets::from_settled_sample(&sample, AccelFullScale::G2);
        assert_eq!(offsets.accel, Accel::new(5, -3, 116));
        assert_eq!(offsets.gyro, Gyro::new(2, -1, 4));

        let offsets = MeasuredOffsets::from_settled_sample(&sample, AccelFullScale::G4);
        assert_eq!(offsets.accel.z(), 16500 - 8192);
    }

    #[test]
    fn accel_trim_preserves_low_bit() {
        // factory word 1 has the compensation bit set; a measured bias of 8
        // trims the magnitude to 0 and the bit must come back
        let factory = Accel::new(1, 1, 1);
        let measured = Accel::new(8, 8, 8);
        assert_eq!(
            accel_trim_bytes(&factory, &measured),
            [0x00, 0x01, 0x00, 0x01, 0x00, 0x01]
        );

        // even factory word: nothing to re-assert
        let factory = Accel::new(100, 100, 100);
        let measured = Accel::new(80, 80, 80);
        assert_eq!(
            accel_trim_bytes(&factory, &measured),
            [0x00, 0x5A, 0x00, 0x5A, 0x00, 0x5A]
        );
    }

    #[test]
    fn accel_trim_reasserts_bit_on_even_result() {
        // 9 - 8/8 = 8, then the preserved bit turns it into 9
        let factory = Accel::new(9, 9, 9);
        let measured = Accel::new(8, 8, 8);
        assert_eq!(
            accel_trim_bytes(&factory, &measured),
            [0x00, 0x09, 0x00, 0x09, 0x00, 0x09]
        );
    }

    #[test]
    fn accel_trim_truncates_toward_zero() {
        // -15 / 8 truncates to -1
        let factory = Accel::new(0, 0, 0);
        let measured = Accel::new(-15, -15, -15);
        let bytes = accel_trim_bytes(&factory, &measured);
        assert_eq!(i16::from_be_bytes([bytes[0], bytes[1]]), 1);
    }

    #[test]
    fn accel_trim_negative_factory() {
        let factory = Accel::new(-2, -2, -2);
        let measured = Accel::new(16, 16, 16);
        let bytes = accel_trim_bytes(&factory, &measured);
        assert_eq!(i16::from_be_bytes([bytes[0], bytes[1]]), -4);
        // -2 is even, so no bit gets re-asserted
        assert_eq!(bytes[1] & 0x01, 0);
    }

    #[test]
    fn gyro_trim_divides_and_negates() {
        let measured = Gyro::new(40, -40, 131);
        let bytes = gyro_trim_bytes(&measured, GyroFullScale::Deg250);
        assert_eq!(i16::from_be_bytes([bytes[0], bytes[1]]), -10);
        assert_eq!(i16::from_be_bytes([bytes[2], bytes[3]]), 10);
        // 131 / 4 = 32.75; the cast truncates toward zero
        assert_eq!(i16::from_be_bytes([bytes[4], bytes[5]]), -32);
    }

    #[test]
    fn gyro_trim_divisor_below_one_scales_up() {
        let measured = Gyro::new(100, 0, 0);
        let bytes = gyro_trim_bytes(&measured, GyroFullScale::Deg2000);
        assert_eq!(i16::from_be_bytes([bytes[0], bytes[1]]), -200);
    }

    #[test]
    fn gyro_trim_saturates_at_i16() {
        let measured = Gyro::new(i16::MIN, 0, 0);
        let bytes = gyro_trim_bytes(&measured, GyroFullScale::Deg2000);
        assert_eq!(i16::from_be_bytes([bytes[0], bytes[1]]), i16::MAX);
    }
}
