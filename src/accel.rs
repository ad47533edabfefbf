/// Raw accelerometer reading vector, in LSB at the active full-scale range.
/// Also carries accelerometer trim values, which use the same encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Accel {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Accel {
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

    /// Convert to g under the given full-scale range.
    pub fn scaled(&self, scale: AccelFullScale) -> AccelF32 {
        AccelF32 {
            x: scale.scale_value(self.x),
            y: scale.scale_value(self.y),
            z: scale.scale_value(self.z),
        }
    }
}

/// Accelerometer full-scale ranges (ACCEL_CONFIG bits 4:3).
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccelFullScale {
    /// ±2g
    G2 = 0,
    /// ±4g
    G4 = 1,
    /// ±8g
    G8 = 2,
    /// ±16g
    G16 = 3,
}

impl AccelFullScale {
    /// Scale factor in LSB per g.
    pub const fn scale(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }

    /// Raw value of one g at this range, the reading a resting, level device
    /// shows on its Z axis.
    pub const fn gravity_lsb(self) -> i16 {
        match self {
            Self::G2 => 16384,
            Self::G4 => 8192,
            Self::G8 => 4096,
            Self::G16 => 2048,
        }
    }

    pub fn scale_value(self, value: i16) -> f32 {
        (value as f32) / self.scale()
    }
}

/// Acceleration in g.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[derive(Debug, Clone, Copy)]
pub struct AccelF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl AccelF32 {
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
    use super::{Accel, AccelFullScale};

    #[test]
    fn scale_factors_per_range() {
        assert_eq!(AccelFullScale::G2.scale(), 16384.0);
        assert_eq!(AccelFullScale::G4.scale(), 8192.0);
        assert_eq!(AccelFullScale::G8.scale(), 4096.0);
        assert_eq!(AccelFullScale::G16.scale(), 2048.0);
    }

    #[test]
    fn gravity_matches_scale_factor() {
        for scale in [
            AccelFullScale::G2,
            AccelFullScale::G4,
            AccelFullScale::G8,
            AccelFullScale::G16,
        ] {
            assert_eq!(scale.gravity_lsb() as f32, scale.scale());
        }
    }

    #[test]
    fn one_g_scales_to_one() {
        let raw = Accel::new(8192, -8192, 0);
        let scaled = raw.scaled(AccelFullScale::G4);
        assert_eq!(scaled.x(), 1.0);
        assert_eq!(scaled.y(), -1.0);
        assert_eq!(scaled.z(), 0.0);
    }

    #[test]
    fn byte_roundtrip() {
        let accel = Accel::new(4096, -1, 0x0102);
        assert_eq!(accel.to_bytes(), [0x10, 0x00, 0xFF, 0xFF, 0x01, 0x02]);
        assert_eq!(Accel::from_bytes(accel.to_bytes()), accel);
    }
}
