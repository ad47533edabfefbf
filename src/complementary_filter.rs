//! Complementary pitch/roll estimation.
//!
//! The accelerometer gives an absolute inclination that is noisy under motion;
//! the gyro gives a clean rate that drifts when integrated. A first-order
//! complementary filter blends both: each step integrates the gyro rate and
//! pulls the result toward the accelerometer angle with weight `1 - w`, where
//! `w = tau / (tau + dt)`. The estimate follows rotation at gyro speed and
//! settles on the accelerometer reference with time constant `tau`.

use crate::accel::Accel;
use crate::gyro::GyroF32;
use libm::{atan2f, sqrtf};

/// First-order complementary filter producing pitch and roll in degrees.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ComplementaryFilter {
    sample_period: f32,
    gyro_weight: f32,
    accel_weight: f32,
    pitch: f32,
    roll: f32,
}

impl ComplementaryFilter {
    /// Build a filter for a fixed sample period and time constant, both in
    /// seconds. Angles start at zero.
    pub fn new(sample_period: f32, time_constant: f32) -> Self {
        let gyro_weight = time_constant / (time_constant + sample_period);
        Self {
            sample_period,
            gyro_weight,
            accel_weight: 1.0 - gyro_weight,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Fold one sample pair into the estimate.
    ///
    /// `accel` is a raw reading, typically median-filtered; the inclination
    /// depends only on its direction, so no unit conversion is involved.
    /// `gyro` must be in degrees per second. Pitch integrates the negated Y
    /// rate and roll the positive X rate, matching the device's axes.
    pub fn update(&mut self, accel: Accel, gyro: GyroF32) {
        let ax = accel.x() as i32;
        let ay = accel.y() as i32;
        let az = accel.z() as i32;

        // i16 squares cannot overflow an i32; the sums go through f32.
        let pitch_accel =
            atan2f(ax as f32, sqrtf((ay * ay) as f32 + (az * az) as f32)).to_degrees();
        let roll_accel =
            atan2f(ay as f32, sqrtf((ax * ax) as f32 + (az * az) as f32)).to_degrees();

        self.pitch = self.gyro_weight * (self.pitch - gyro.y() * self.sample_period)
            + self.accel_weight * pitch_accel;
        self.roll = self.gyro_weight * (self.roll + gyro.x() * self.sample_period)
            + self.accel_weight * roll_accel;
    }

    /// Current pitch estimate in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current roll estimate in degrees.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Current (pitch, roll) in degrees.
    pub fn angles(&self) -> (f32, f32) {
        (self.pitch, self.roll)
    }

    /// Weight applied to the integrated gyro term, `tau / (tau + dt)`.
    pub fn gyro_weight(&self) -> f32 {
        self.gyro_weight
    }
}

#[cfg(test)]
mod tests {
    use super::ComplementaryFilter;
    use crate::accel::Accel;
    use crate::gyro::GyroF32;

    const DT: f32 = 0.01;
    const TAU: f32 = 0.5;

    fn resting_gyro() -> GyroF32 {
        GyroF32::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn weight_from_time_constant() {
        let filter = ComplementaryFilter::new(DT, TAU);
        assert!((filter.gyro_weight() - TAU / (TAU + DT)).abs() < 1e-6);
    }

    #[test]
    fn converges_to_accel_pitch() {
        let mut filter = ComplementaryFilter::new(DT, TAU);
        // 45 degrees nose-up: equal x and z gravity components
        let accel = Accel::new(8192, 0, 8192);
        for _ in 0..600 {
            filter.update(accel, resting_gyro());
        }
        assert!((filter.pitch() - 45.0).abs() < 1e-2);
        assert!(filter.roll().abs() < 1e-2);
    }

    #[test]
    fn converges_regardless_of_starting_state() {
        let mut driven = ComplementaryFilter::new(DT, TAU);
        let mut fresh = ComplementaryFilter::new(DT, TAU);

        // push one filter far away first
        for _ in 0..200 {
            driven.update(Accel::new(16384, 0, 0), resting_gyro());
        }
        assert!(driven.pitch() > 80.0);

        let accel = Accel::new(0, 8192, 8192);
        for _ in 0..900 {
            driven.update(accel, resting_gyro());
            fresh.update(accel, resting_gyro());
        }
        assert!((driven.roll() - 45.0).abs() < 1e-2);
        assert!(driven.pitch().abs() < 1e-2);
        assert!((driven.pitch() - fresh.pitch()).abs() < 1e-3);
        assert!((driven.roll() - fresh.roll()).abs() < 1e-3);
    }

    #[test]
    fn negative_y_rate_raises_pitch() {
        let mut filter = ComplementaryFilter::new(DT, TAU);
        filter.update(Accel::new(0, 0, 0), GyroF32::new(0.0, -10.0, 0.0));
        // one step integrates w * rate * dt
        assert!(filter.pitch() > 0.09 && filter.pitch() < 0.1);
        assert_eq!(filter.roll(), 0.0);
    }

    #[test]
    fn positive_x_rate_raises_roll() {
        let mut filter = ComplementaryFilter::new(DT, TAU);
        filter.update(Accel::new(0, 0, 0), GyroF32::new(10.0, 0.0, 0.0));
        assert!(filter.roll() > 0.09 && filter.roll() < 0.1);
        assert_eq!(filter.pitch(), 0.0);
    }

    #[test]
    fn level_device_reads_level() {
        let mut filter = ComplementaryFilter::new(DT, TAU);
        for _ in 0..300 {
            filter.update(Accel::new(0, 0, 16384), resting_gyro());
        }
        assert!(filter.pitch().abs() < 1e-3);
        assert!(filter.roll().abs() < 1e-3);
    }
}
