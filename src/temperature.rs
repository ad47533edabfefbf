/// Reading from the MPU-6050's internal temperature sensor.
///
/// This is die temperature, not ambient: expect it a few degrees above the
/// room because of self-heating.
///
/// # Example
/// ```
/// # use mpu6050_fusion::temperature::Temperature;
/// let temp = Temperature::new(3990);
/// let celsius = temp.celsius(); // ~48.26 °C
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Temperature {
    pub(crate) raw: i16,
}

impl Temperature {
    pub fn new(raw: i16) -> Self {
        Self { raw }
    }

    pub fn from_bytes(data: [u8; 2]) -> Self {
        Self {
            raw: i16::from_be_bytes(data),
        }
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        self.raw.to_be_bytes()
    }

    pub fn raw(&self) -> i16 {
        self.raw
    }

    /// Degrees Celsius.
    /// Datasheet formula: TEMP_OUT / 340 + 36.53
    pub fn celsius(&self) -> f32 {
        (self.raw as f32) / 340.0 + 36.53
    }
}

#[cfg(test)]
mod tests {
    use super::Temperature;

    #[test]
    fn celsius_conversion() {
        assert_eq!(Temperature::new(0).celsius(), 36.53);
        assert_eq!(Temperature::new(340).celsius(), 37.53);
        assert_eq!(Temperature::new(-340).celsius(), 35.53);
    }
}
