/// Raw gyro reading vector, in LSB at the active full-scale range.
/// Also carries gyro trim values, which use the same encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Gyro {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Gyro {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Decode three big-endian i16 values, x first.
    pub fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_be_bytes(x),
            y: i16::from_be_bytes(y),
            z: i16::from_be_bytes(z),
        }
    }

    /// Encode as three big-endian i16 values, x first.
    pub fn to_bytes(&self) -> [u8; 6] {
        let x = self.x.to_be_bytes();
        let y = self.y.to_be_bytes();
        let z = self.z.to_be_bytes();
        [x[0], x[1], y[0], y[1], z[0], z[1]]
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    /// Convert to degrees per second under the given full-scale range.
    pub fn scaled(&self, scale: GyroFullScale) -> GyroF32 {
        GyroF32 {
            x: scale.scale_value(self.x),
            y: scale.scale_value(self.y),
            z: scale.scale_value(self.z),
        }
    }
}

/// Gyroscope full-scale ranges (GYRO_CONFIG bits 4:3).
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroFullScale {
    /// ±250 deg/s
    Deg250 = 0,
    /// ±500 deg/s
    Deg500 = 1,
    /// ±1000 deg/s
    Deg1000 = 2,
    /// ±2000 deg/s
    Deg2000 = 3,
}

impl GyroFullScale {
    /// Scale factor in LSB per deg/s, from the device's sensitivity table.
    pub const fn scale(self) -> f32 {
        match self {
            Self::Deg250 => 131.0,
            Self::Deg500 => 65.6,
            Self::Deg1000 => 32.8,
            Self::Deg2000 => 16.4,
        }
    }

    /// Divisor mapping a measured bias at this range into the trim registers,
    /// which always run at the ±1000 deg/s scale.
    pub const fn offset_divisor(self) -> f32 {
        match self {
            Self::Deg250 => 4.0,
            Self::Deg500 => 2.0,
            Self::Deg1000 => 1.0,
            Self::Deg2000 => 0.5,
        }
    }

    pub fn scale_value(self, value: i16) -> f32 {
        (value as f32) / self.scale()
    }
}

/// Angular rate in degrees per second.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct GyroF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl GyroF32 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}

#[cfg(test)]
mod tests {
    use super::{Gyro, GyroFullScale};

    #[test]
    fn scale_factors_per_range() {
        assert_eq!(GyroFullScale::Deg250.scale(), 131.0);
        assert_eq!(GyroFullScale::Deg500.scale(), 65.6);
        assert_eq!(GyroFullScale::Deg1000.scale(), 32.8);
        assert_eq!(GyroFullScale::Deg2000.scale(), 16.4);
    }

    #[test]
    fn offset_divisors_per_range() {
        assert_eq!(GyroFullScale::Deg250.offset_divisor(), 4.0);
        assert_eq!(GyroFullScale::Deg500.offset_divisor(), 2.0);
        assert_eq!(GyroFullScale::Deg1000.offset_divisor(), 1.0);
        assert_eq!(GyroFullScale::Deg2000.offset_divisor(), 0.5);
    }

    #[test]
    fn full_scale_reading_scales_to_range() {
        let raw = Gyro::new(131, -262, 0);
        let scaled = raw.scaled(GyroFullScale::Deg250);
        assert_eq!(scaled.x(), 1.0);
        assert_eq!(scaled.y(), -2.0);
        assert_eq!(scaled.z(), 0.0);
    }
}
