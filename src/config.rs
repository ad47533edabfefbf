//! Sampling configuration: low-pass filter, sample rate and full scales.
//!
//! The sample rate is derived, not programmed directly: the SMPLRT_DIV
//! register divides the gyro output rate, and the gyro output rate itself
//! depends on whether the digital low-pass filter is active. The helpers here
//! keep that coupling in one place.

use crate::accel::AccelFullScale;
use crate::clock_source::ClockSource;
use crate::gyro::GyroFullScale;

/// Digital low-pass filter bandwidth codes (DLPF_CFG bits of CONFIG).
///
/// Higher codes filter harder and delay longer. Accelerometer / gyro
/// bandwidths per code: 0: 260/256 Hz, 1: 184/188 Hz, 2: 94/98 Hz,
/// 3: 44/42 Hz, 4: 21/20 Hz, 5: 10/10 Hz, 6: 5/5 Hz.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DigitalLowPassFilter {
    /// Filter off, 260 Hz accel bandwidth, 8 kHz gyro output rate
    Filter0 = 0,
    /// 184 Hz accel bandwidth
    Filter1 = 1,
    /// 94 Hz accel bandwidth
    Filter2 = 2,
    /// 44 Hz accel bandwidth
    Filter3 = 3,
    /// 21 Hz accel bandwidth
    Filter4 = 4,
    /// 10 Hz accel bandwidth
    Filter5 = 5,
    /// 5 Hz accel bandwidth
    Filter6 = 6,
}

impl DigitalLowPassFilter {
    /// Gyro output rate under this filter setting.
    ///
    /// 8 kHz with the filter off, 1 kHz with any filter active. This is the
    /// rate the sample-rate divider divides.
    pub const fn gyro_output_rate_hz(self) -> u32 {
        match self {
            Self::Filter0 => 8_000,
            _ => 1_000,
        }
    }
}

/// SMPLRT_DIV value for a target sample rate under the given filter setting.
///
/// Sample rate = gyro output rate / (1 + divider), so the divider is
/// `rate / target - 1` with the quotient truncated. Targets above the output
/// rate saturate to divider 0 (full rate); targets too slow for the 8-bit
/// register saturate to 255.
pub const fn sample_rate_divider(filter: DigitalLowPassFilter, sample_rate_hz: u32) -> u8 {
    let rate = filter.gyro_output_rate_hz();
    if sample_rate_hz == 0 {
        return u8::MAX;
    }
    let divider = (rate / sample_rate_hz).saturating_sub(1);
    if divider > u8::MAX as u32 {
        u8::MAX
    } else {
        divider as u8
    }
}

/// Device configuration applied at startup and cached by the driver.
///
/// The cached copy is what converts raw samples to physical units, so it must
/// track the registers; the driver's setters update both together.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mpu6050Config {
    pub clock_source: ClockSource,
    pub sample_rate_hz: u32,
    pub digital_lowpass_filter: DigitalLowPassFilter,
    pub accel_full_scale: AccelFullScale,
    pub gyro_full_scale: GyroFullScale,
}

impl Default for Mpu6050Config {
    /// X-gyro PLL clock, 100 Hz sample rate, 184 Hz filter, ±4g, ±500 deg/s.
    fn default() -> Self {
        Self {
            clock_source: ClockSource::Xgyro,
            sample_rate_hz: 100,
            digital_lowpass_filter: DigitalLowPassFilter::Filter1,
            accel_full_scale: AccelFullScale::G4,
            gyro_full_scale: GyroFullScale::Deg500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sample_rate_divider, DigitalLowPassFilter};

    #[test]
    fn divider_at_1khz_output_rate() {
        // 1000 / 100 - 1
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter1, 100),
            9
        );
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter6, 200),
            4
        );
    }

    #[test]
    fn divider_at_8khz_output_rate() {
        // 8000 / 1000 - 1
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter0, 1_000),
            7
        );
    }

    #[test]
    fn divider_truncates() {
        // 1000 / 300 = 3 truncated, minus 1
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter1, 300),
            2
        );
    }

    #[test]
    fn divider_saturates_at_full_rate() {
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter1, 2_000),
            0
        );
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter1, 1_000),
            0
        );
    }

    #[test]
    fn divider_saturates_at_register_width() {
        // 8000 / 4 - 1 = 1999, clamped to the 8-bit register
        assert_eq!(
            sample_rate_divider(DigitalLowPassFilter::Filter0, 4),
            255
        );
        assert_eq!(sample_rate_divider(DigitalLowPassFilter::Filter1, 0), 255);
    }
}
