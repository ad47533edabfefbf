//! MPU-6050 register map.
//!
//! Only the registers this driver touches are listed: power and clock control,
//! sampling configuration, the hardware offset (trim) registers rewritten by
//! calibration, the interrupt registers and the sensor output block. The
//! output registers 0x3B..=0x48 are laid out so one burst read starting at
//! `AccelX_H` returns accelerometer, temperature and gyro data in a single
//! 14-byte frame.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    // Hardware offset (trim) registers. Factory-programmed, rewritten by
    // calibration one byte at a time.
    /// High byte of X-axis accelerometer trim
    AccelOffsetX_H = 0x06,
    /// Low byte of X-axis accelerometer trim
    AccelOffsetX_L = 0x07,
    /// High byte of Y-axis accelerometer trim
    AccelOffsetY_H = 0x08,
    /// Low byte of Y-axis accelerometer trim
    AccelOffsetY_L = 0x09,
    /// High byte of Z-axis accelerometer trim
    AccelOffsetZ_H = 0x0A,
    /// Low byte of Z-axis accelerometer trim
    AccelOffsetZ_L = 0x0B,

    /// High byte of X-axis gyroscope trim
    GyroOffsetX_H = 0x13,
    /// Low byte of X-axis gyroscope trim
    GyroOffsetX_L = 0x14,
    /// High byte of Y-axis gyroscope trim
    GyroOffsetY_H = 0x15,
    /// Low byte of Y-axis gyroscope trim
    GyroOffsetY_L = 0x16,
    /// High byte of Z-axis gyroscope trim
    GyroOffsetZ_H = 0x17,
    /// Low byte of Z-axis gyroscope trim
    GyroOffsetZ_L = 0x18,

    /// Sample Rate Divider (0x19)
    /// Divides the gyro output rate down to the sample rate
    SmplrtDiv = 0x19,

    /// Configuration (0x1A)
    /// Digital low-pass filter bandwidth and external sync
    Config = 0x1A,

    /// Gyroscope Configuration (0x1B)
    /// Full-scale range in bits 4:3
    GyroConfig = 0x1B,

    /// Accelerometer Configuration (0x1C)
    /// Full-scale range in bits 4:3
    AccelConfig = 0x1C,

    /// Interrupt Enable (0x38)
    IntEnable = 0x38,

    /// Interrupt Status (0x3A)
    /// Cleared by reading
    IntStatus = 0x3A,

    // Sensor output block. Each value is a big-endian i16 split over an H/L
    // register pair.
    /// High byte of X-axis acceleration
    AccelX_H = 0x3B,
    /// Low byte of X-axis acceleration
    AccelX_L = 0x3C,
    /// High byte of Y-axis acceleration
    AccelY_H = 0x3D,
    /// Low byte of Y-axis acceleration
    AccelY_L = 0x3E,
    /// High byte of Z-axis acceleration
    AccelZ_H = 0x3F,
    /// Low byte of Z-axis acceleration
    AccelZ_L = 0x40,

    /// High byte of temperature reading
    TempOut_H = 0x41,
    /// Low byte of temperature reading
    TempOut_L = 0x42,

    /// High byte of X-axis angular rate
    GyroX_H = 0x43,
    /// Low byte of X-axis angular rate
    GyroX_L = 0x44,
    /// High byte of Y-axis angular rate
    GyroY_H = 0x45,
    /// Low byte of Y-axis angular rate
    GyroY_L = 0x46,
    /// High byte of Z-axis angular rate
    GyroZ_H = 0x47,
    /// Low byte of Z-axis angular rate
    GyroZ_L = 0x48,

    /// Signal Path Reset (0x68)
    /// Clears the gyro, accel and temperature signal paths
    SignalPathReset = 0x68,

    /// Power Management 1 (0x6B)
    /// Device reset, sleep and clock source
    PwrMgmt1 = 0x6B,

    /// Power Management 2 (0x6C)
    /// Per-axis standby and wake control
    PwrMgmt2 = 0x6C,

    /// Device identity (0x75), reads 0x68
    WhoAmI = 0x75,
}

impl Register {
    /// Accelerometer trim registers in write order, X high byte first.
    pub(crate) const ACCEL_TRIM: [Register; 6] = [
        Register::AccelOffsetX_H,
        Register::AccelOffsetX_L,
        Register::AccelOffsetY_H,
        Register::AccelOffsetY_L,
        Register::AccelOffsetZ_H,
        Register::AccelOffsetZ_L,
    ];

    /// Gyroscope trim registers in write order, X high byte first.
    pub(crate) const GYRO_TRIM: [Register; 6] = [
        Register::GyroOffsetX_H,
        Register::GyroOffsetX_L,
        Register::GyroOffsetY_H,
        Register::GyroOffsetY_L,
        Register::GyroOffsetZ_H,
        Register::GyroOffsetZ_L,
    ];
}
