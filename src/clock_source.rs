//! MPU-6050 clock source selection.
//!
//! The device defaults to its internal 8 MHz oscillator, but the datasheet
//! recommends running the PLL off one of the gyro axes once the gyro is up,
//! for better timing stability and lower temperature drift.

/// Clock sources selectable through PWR_MGMT_1.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockSource {
    /// Internal 8 MHz oscillator
    Internal = 0,
    /// PLL with X-axis gyro reference (recommended)
    Xgyro = 1,
    /// PLL with Y-axis gyro reference
    Ygyro = 2,
    /// PLL with Z-axis gyro reference
    Zgyro = 3,
    /// PLL with external 32.768 kHz crystal
    External32768 = 4,
    /// PLL with external 19.2 MHz crystal
    External19200 = 5,
    /// Stops the clock; the device halts until reconfigured
    Stop = 7,
}
