//! Asynchronous MPU-6050 driver.
//!
//! Non-blocking twin of [`sensor`](crate::sensor) over embedded-hal-async:
//!
//! - async I2C register access with the same write-settle discipline
//! - identity check, configuration and startup calibration in `new`
//! - data-ready signalling through a borrowed [`DataReady`] flag
//! - raw and scaled frame reads, individual sensor reads, trim access
//!
//! Mirrors the blocking driver operation for operation, so code can move
//! between executors and bare-metal loops without API changes.

use crate::{
    accel::{Accel, AccelFullScale},
    address::Address,
    calibration::MeasuredOffsets,
    calibration_async::calibrate,
    clock_source::ClockSource,
    config::{sample_rate_divider, DigitalLowPassFilter, Mpu6050Config},
    data_ready::DataReady,
    error_async::{Error, InitError},
    gyro::{Gyro, GyroFullScale},
    registers::Register,
    sample::{RawSample, ScaledSample, RAW_SAMPLE_BYTES},
    sensor::{DATA_RDY_EN, DEVICE_ID, DEVICE_RESET, RESET_ALL_SIGNAL_PATHS, WRITE_SETTLE_MS},
    temperature::Temperature,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// InvenSense MPU-6050 driver.
///
/// Owns the bus and borrows a [`DataReady`] flag for its lifetime. The
/// application's INT-pin task marks the flag through [`DataReady::notify`];
/// the driver is the flag's only consumer.
pub struct Mpu6050<'d, I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    config: Mpu6050Config,
    frame: [u8; RAW_SAMPLE_BYTES],
    data_ready: &'d DataReady,
}

impl<'d, I> Mpu6050<'d, I>
where
    I: I2c,
{
    /// Construct a driver: verify, configure and calibrate the device.
    ///
    /// Checks WHO_AM_I, applies `config`, enables the data-ready interrupt
    /// and runs the startup calibration, which needs the device level and
    /// stationary. On failure the bus comes back inside [`InitError`].
    pub async fn new(
        i2c: I,
        address: Address,
        config: Mpu6050Config,
        data_ready: &'d DataReady,
        delay: &mut impl DelayNs,
    ) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            config,
            frame: [0; RAW_SAMPLE_BYTES],
            data_ready,
        };

        if let Err(error) = sensor.initialize(delay).await {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    async fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        if self.who_am_i().await? != DEVICE_ID {
            return Err(Error::WrongDevice);
        }
        self.configure(delay).await?;
        self.enable_data_ready_interrupt(delay).await?;
        self.calibrate(delay).await?;
        Ok(())
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    ///
    /// Call [`Self::disable_interrupts`] first so a still-wired device cannot
    /// keep signalling a flag nobody clears.
    pub fn release(self) -> I {
        self.i2c
    }

    /// Active configuration, kept in sync with the device registers.
    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    pub(crate) async fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .await
            .map_err(Error::WriteReadError)
    }

    pub(crate) async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(Error::WriteError)
    }

    pub(crate) async fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf).await?;
        Ok(buf[0])
    }

    pub(crate) async fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg as u8], buf).await?;
        Ok(buf)
    }

    /// Write one register, then hold for the device's write settle time.
    pub(crate) async fn write_register(
        &mut self,
        reg: Register,
        value: u8,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value]).await?;
        delay.delay_ms(WRITE_SETTLE_MS).await;
        Ok(())
    }

    /// Read the device identity register, 0x68 on an MPU-6050.
    pub async fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        self.read_register(Register::WhoAmI).await
    }

    /// Apply the stored configuration to the device.
    ///
    /// Wakes every axis, selects the clock source, programs both full-scale
    /// ranges, the low-pass filter and the sample-rate divider. Also the way
    /// back to a working device after [`Self::reset`].
    pub async fn configure(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        // all axes out of standby before anything else
        self.write_register(Register::PwrMgmt2, 0x00, delay).await?;
        self.set_clock_source(self.config.clock_source, delay)
            .await?;
        self.set_accel_full_scale(self.config.accel_full_scale, delay)
            .await?;
        self.set_gyro_full_scale(self.config.gyro_full_scale, delay)
            .await?;
        self.set_digital_lowpass_filter(self.config.digital_lowpass_filter, delay)
            .await?;
        Ok(())
    }

    /// Select the clock source. The write also clears the sleep bit, keeping
    /// the device awake.
    pub async fn set_clock_source(
        &mut self,
        clock_source: ClockSource,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, clock_source as u8, delay)
            .await?;
        self.config.clock_source = clock_source;
        Ok(())
    }

    pub async fn set_accel_full_scale(
        &mut self,
        scale: AccelFullScale,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::AccelConfig, (scale as u8) << 3, delay)
            .await?;
        self.config.accel_full_scale = scale;
        Ok(())
    }

    pub async fn set_gyro_full_scale(
        &mut self,
        scale: GyroFullScale,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::GyroConfig, (scale as u8) << 3, delay)
            .await?;
        self.config.gyro_full_scale = scale;
        Ok(())
    }

    /// Select the low-pass filter, then reprogram the sample-rate divider:
    /// the divider divides the filter-dependent gyro output rate, so it must
    /// follow the filter to keep the configured sample rate true.
    pub async fn set_digital_lowpass_filter(
        &mut self,
        filter: DigitalLowPassFilter,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::Config, filter as u8, delay)
            .await?;
        self.config.digital_lowpass_filter = filter;
        self.set_sample_rate(self.config.sample_rate_hz, delay).await
    }

    /// Program the sample rate by deriving the divider from the active
    /// low-pass filter setting.
    pub async fn set_sample_rate(
        &mut self,
        sample_rate_hz: u32,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        let divider = sample_rate_divider(self.config.digital_lowpass_filter, sample_rate_hz);
        self.write_register(Register::SmplrtDiv, divider, delay)
            .await?;
        self.config.sample_rate_hz = sample_rate_hz;
        Ok(())
    }

    /// Enable the data-ready interrupt: the INT pin signals each time a full
    /// frame lands in the output registers.
    pub async fn enable_data_ready_interrupt(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        self.write_register(Register::IntEnable, DATA_RDY_EN, delay)
            .await
    }

    pub async fn disable_interrupts(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::IntEnable, 0x00, delay).await
    }

    /// Read the interrupt status register and clear it.
    pub async fn interrupt_read_clear(&mut self) -> Result<u8, Error<I>> {
        self.read_register(Register::IntStatus).await
    }

    /// Whether a data-ready interrupt has fired since the last
    /// [`Self::read_raw`]. Never blocks and never touches the bus.
    pub fn available(&self) -> bool {
        self.data_ready.ready()
    }

    /// Burst-read one sample frame.
    ///
    /// The data-ready flag is cleared whether or not the bus read succeeds:
    /// it reports interrupts since the last read attempt, not since the last
    /// good frame, so back-to-back interrupts coalesce instead of going
    /// stale.
    pub async fn read_raw(&mut self) -> Result<RawSample, Error<I>> {
        let result = self
            .i2c
            .write_read(self.address, &[Register::AccelX_H as u8], &mut self.frame)
            .await
            .map_err(Error::WriteReadError);
        self.data_ready.clear();
        result?;
        Ok(RawSample::from_bytes(self.frame))
    }

    /// One frame in physical units under the active full-scale ranges.
    pub async fn read_scaled(&mut self) -> Result<ScaledSample, Error<I>> {
        let raw = self.read_raw().await?;
        Ok(raw.scaled(self.config.accel_full_scale, self.config.gyro_full_scale))
    }

    /// Read the accelerometer alone. Does not touch the data-ready flag.
    pub async fn accel(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data).await?;
        Ok(Accel::from_bytes(data))
    }

    /// Read the gyro alone. Does not touch the data-ready flag.
    pub async fn gyro(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data).await?;
        Ok(Gyro::from_bytes(data))
    }

    /// Read the internal temperature sensor.
    pub async fn temperature(&mut self) -> Result<Temperature, Error<I>> {
        let mut data = [0; 2];
        self.read_registers(Register::TempOut_H, &mut data).await?;
        Ok(Temperature::from_bytes(data))
    }

    /// Current accelerometer trim registers.
    pub async fn get_accel_trim(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelOffsetX_H, &mut data)
            .await?;
        Ok(Accel::from_bytes(data))
    }

    /// Current gyro trim registers.
    pub async fn get_gyro_trim(&mut self) -> Result<Gyro, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroOffsetX_H, &mut data)
            .await?;
        Ok(Gyro::from_bytes(data))
    }

    /// Rewrite the accelerometer trim registers, one register at a time with
    /// the settle delay after each write.
    pub async fn set_accel_trim(
        &mut self,
        values: &Accel,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        let data = values.to_bytes();
        for (reg, value) in Register::ACCEL_TRIM.iter().zip(data) {
            self.write_register(*reg, value, delay).await?;
        }
        Ok(())
    }

    /// Rewrite the gyro trim registers, one register at a time with the
    /// settle delay after each write.
    pub async fn set_gyro_trim(
        &mut self,
        values: &Gyro,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error<I>> {
        let data = values.to_bytes();
        for (reg, value) in Register::GYRO_TRIM.iter().zip(data) {
            self.write_register(*reg, value, delay).await?;
        }
        Ok(())
    }

    /// Measure the resting bias and rewrite the device trim registers.
    ///
    /// Runs once during construction; call again to recalibrate after
    /// remounting or a temperature change. The device must be level and
    /// stationary. Returns the bias that was measured.
    pub async fn calibrate(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<MeasuredOffsets, Error<I>> {
        calibrate(self, delay).await
    }

    /// Full device reset followed by a signal-path clear.
    ///
    /// Every register reverts to its power-on default; run
    /// [`Self::configure`] and [`Self::enable_data_ready_interrupt`]
    /// afterwards.
    pub async fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I>> {
        self.write_register(Register::PwrMgmt1, DEVICE_RESET, delay)
            .await?;
        delay.delay_ms(100).await;
        self.write_register(Register::SignalPathReset, RESET_ALL_SIGNAL_PATHS, delay)
            .await?;
        Ok(())
    }
}
