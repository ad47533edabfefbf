//! MPU-6050 I2C address selection.
//!
//! The device answers on one of two 7-bit addresses depending on the AD0 pin:
//! 0x68 with AD0 tied low (or floating, it has an internal pulldown) and 0x69
//! with AD0 tied high. Two devices can share a bus this way.

/// 7-bit I2C address of an MPU-6050.
///
/// Some I2C peripherals want the 8-bit form; shift left by one for those.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Default for Address {
    /// The AD0-low address, 0x68.
    fn default() -> Self {
        Self(0x68)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
