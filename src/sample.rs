//! Sample frames as burst-read from the device.
//!
//! The output registers 0x3B..=0x48 hold accelerometer, temperature and gyro
//! values back to back, so one 14-byte read captures all of them from the same
//! sampling instant.

use crate::accel::{Accel, AccelF32, AccelFullScale};
use crate::gyro::{Gyro, GyroF32, GyroFullScale};
use crate::temperature::Temperature;

/// Byte length of one output frame, ACCEL_XOUT_H through GYRO_ZOUT_L.
pub const RAW_SAMPLE_BYTES: usize = 14;

/// One raw output frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RawSample {
    pub accel: Accel,
    pub temperature: Temperature,
    pub gyro: Gyro,
}

impl RawSample {
    /// Decode a burst read starting at ACCEL_XOUT_H.
    ///
    /// Layout: accel x/y/z in bytes 0..6, temperature in 6..8, gyro x/y/z in
    /// 8..14, every value a big-endian two's-complement i16.
    pub fn from_bytes(data: [u8; RAW_SAMPLE_BYTES]) -> Self {
        Self {
            accel: Accel::from_bytes([data[0], data[1], data[2], data[3], data[4], data[5]]),
            temperature: Temperature::from_bytes([data[6], data[7]]),
            gyro: Gyro::from_bytes([data[8], data[9], data[10], data[11], data[12], data[13]]),
        }
    }

    /// Convert to physical units under the given full-scale ranges.
    pub fn scaled(&self, accel_scale: AccelFullScale, gyro_scale: GyroFullScale) -> ScaledSample {
        ScaledSample {
            accel: self.accel.scaled(accel_scale),
            temperature: self.temperature.celsius(),
            gyro: self.gyro.scaled(gyro_scale),
        }
    }
}

/// A frame in physical units: g, degrees Celsius and degrees per second.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ScaledSample {
    pub accel: AccelF32,
    /// Die temperature in degrees Celsius.
    pub temperature: f32,
    pub gyro: GyroF32,
}

#[cfg(test)]
mod tests {
    use super::{RawSample, RAW_SAMPLE_BYTES};
    use crate::accel::AccelFullScale;
    use crate::gyro::GyroFullScale;

    #[test]
    fn frame_decode() {
        let data: [u8; RAW_SAMPLE_BYTES] = [
            0x10, 0x00, // accel x = 4096
            0x00, 0x00, // accel y = 0
            0xC0, 0x00, // accel z = -16384
            0x00, 0x00, // temperature = 0
            0x00, 0x01, // gyro x = 1
            0x00, 0x00, // gyro y = 0
            0xFF, 0xFF, // gyro z = -1
        ];
        let sample = RawSample::from_bytes(data);
        assert_eq!(sample.accel.x(), 4096);
        assert_eq!(sample.accel.y(), 0);
        assert_eq!(sample.accel.z(), -16384);
        assert_eq!(sample.temperature.raw(), 0);
        assert_eq!(sample.gyro.x(), 1);
        assert_eq!(sample.gyro.y(), 0);
        assert_eq!(sample.gyro.z(), -1);
    }

    #[test]
    fn frame_scaling() {
        let data: [u8; RAW_SAMPLE_BYTES] = [
            0x40, 0x00, // accel x = 16384
            0x00, 0x00, //
            0x00, 0x00, //
            0x01, 0x54, // temperature = 340
            0x00, 0x83, // gyro x = 131
            0x00, 0x00, //
            0x00, 0x00, //
        ];
        let scaled =
            RawSample::from_bytes(data).scaled(AccelFullScale::G2, GyroFullScale::Deg250);
        assert_eq!(scaled.accel.x(), 1.0);
        assert_eq!(scaled.temperature, 37.53);
        assert_eq!(scaled.gyro.x(), 1.0);
    }
}
