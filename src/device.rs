//! High-level LIS2DE12 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Lis2de12Interface;
use crate::params::{FifoMode, FullScale, OutputDataRate, SamplingMode, WritePolicy};
use crate::registers::{
    CtrlReg1,
    CtrlReg4,
    CtrlReg5,
    FifoControl,
    FifoSource,
    Register,
    Status,
    EXPECTED_WHO_AM_I,
    FIFO_SRC_LEVEL_MASK,
    REG_FIFO_SRC,
    REG_OUT_X,
    REG_OUT_Y,
    REG_OUT_Z,
    REG_STATUS,
    REG_WHO_AM_I,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Wait after bus bring-up and after programming the control registers (milliseconds).
const SETTLE_DELAY_MS: u32 = 10;

/// High-level synchronous driver for the LIS2DE12 accelerometer.
pub struct Lis2de12<IFACE> {
    interface: IFACE,
    config: Config,
    mode: SamplingMode,
    // Requested values, kept verbatim even when the device fell back to a default.
    scale_g: u8,
    sample_rate_hz: u16,
    sensitivity: f32,
}

impl<IFACE> Lis2de12<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// Nothing is sent on the bus until [`begin`](Self::begin) or
    /// [`begin_with`](Self::begin_with) is called.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self {
            interface,
            config,
            mode: SamplingMode::OneShot,
            scale_g: FullScale::G4.g(),
            sample_rate_hz: OutputDataRate::PowerDown.hz(),
            sensitivity: FullScale::G4.sensitivity(),
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================================================================
    // == Cached State ==================================================
    // ==================================================================
    /// Returns the last requested output data rate in hertz.
    ///
    /// This is the value passed to the last `begin*` call, not a device query, and
    /// is reported as requested even if the device fell back to 100 Hz.
    pub fn acceleration_sample_rate(&self) -> u16 {
        self.sample_rate_hz
    }

    /// Returns the last requested full-scale range in g.
    pub fn acceleration_scale(&self) -> u8 {
        self.scale_g
    }

    /// Returns the g-per-count factor applied by [`read_acceleration`](Self::read_acceleration).
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Returns the active sampling mode.
    pub fn sampling_mode(&self) -> SamplingMode {
        self.mode
    }

    /// Returns `true` while FIFO streaming is selected.
    pub fn is_continuous(&self) -> bool {
        self.mode == SamplingMode::Continuous
    }
}

impl<I2C> Lis2de12<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c), config)
    }

    /// Releases the driver, returning the I²C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Lis2de12<IFACE>
where
    IFACE: Lis2de12Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Shutdown =====================================
    // ==================================================================
    /// Probes the device and programs the rate and range from the active [`Config`].
    ///
    /// With the default configuration this is 100 Hz at ±4 g. Calling it again
    /// simply re-runs the probe and rewrites the same registers.
    pub fn begin(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let odr = self.config.odr;
        let full_scale = self.config.full_scale;

        self.probe(delay)?;

        self.sample_rate_hz = odr.hz();
        self.scale_g = full_scale.g();
        let result = self.apply_rate_and_scale(odr, full_scale);
        delay.delay_ms(SETTLE_DELAY_MS);
        result
    }

    /// Probes the device and programs a rate in hertz and a range in g.
    ///
    /// Rates outside `{0, 1, 10, 25, 50, 100, 200, 400, 1620, 5376}` fall back to
    /// 100 Hz and ranges outside `{2, 4, 8, 16}` fall back to ±4 g; the two lookups
    /// are independent. The requested values are kept as-is for
    /// [`acceleration_sample_rate`](Self::acceleration_sample_rate) and
    /// [`acceleration_scale`](Self::acceleration_scale), even if the probe fails.
    pub fn begin_with(
        &mut self,
        delay: &mut impl DelayNs,
        scale_g: u8,
        rate_hz: u16,
    ) -> Result<(), CommE> {
        self.sample_rate_hz = rate_hz;
        self.scale_g = scale_g;

        self.probe(delay)?;

        let odr = OutputDataRate::from_hz(rate_hz).unwrap_or_else(|| {
            debug!("unsupported rate {=u16} Hz, using 100 Hz", rate_hz);
            OutputDataRate::Hz100
        });
        let full_scale = FullScale::from_g(scale_g).unwrap_or_else(|| {
            debug!("unsupported range {=u8} g, using 4 g", scale_g);
            FullScale::G4
        });

        let result = self.apply_rate_and_scale(odr, full_scale);
        delay.delay_ms(SETTLE_DELAY_MS);
        result
    }

    /// Powers the device down, resets the range bits, and closes the bus.
    ///
    /// Safe to call whether or not `begin` ever succeeded.
    pub fn end(&mut self) -> Result<(), CommE> {
        let mut first_error = None;

        self.attempt_write(
            CtrlReg1::all_axes(OutputDataRate::PowerDown),
            &mut first_error,
        );
        self.attempt_write(CtrlReg4::new(), &mut first_error);

        if let Err(err) = self.interface.close() {
            warn!("closing the bus failed");
            first_error.get_or_insert(Error::Interface(err));
        }

        self.conclude(first_error)
    }

    // ==================================================================
    // == Sampling Mode =================================================
    // ==================================================================
    /// Enables the FIFO in stream mode.
    pub fn set_continuous_mode(&mut self) -> Result<(), CommE> {
        let mut first_error = None;

        self.attempt_write(CtrlReg5::new().with_fifo_enable(true), &mut first_error);
        self.attempt_write(
            FifoControl::new().with_mode(FifoMode::Stream),
            &mut first_error,
        );

        self.mode = SamplingMode::Continuous;
        self.conclude(first_error)
    }

    /// Disables the FIFO and returns to single-sample polling.
    pub fn set_one_shot_mode(&mut self) -> Result<(), CommE> {
        let mut first_error = None;

        self.attempt_write(CtrlReg5::new(), &mut first_error);
        self.attempt_write(
            FifoControl::new().with_mode(FifoMode::Bypass),
            &mut first_error,
        );

        self.mode = SamplingMode::OneShot;
        self.conclude(first_error)
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the raw `WHO_AM_I` register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_WHO_AM_I)
    }

    /// Returns a snapshot of `STATUS_REG`.
    pub fn read_status(&mut self) -> Result<Status, CommE> {
        self.read_register(REG_STATUS).map(Status::from)
    }

    /// Returns a snapshot of `FIFO_SRC_REG`.
    pub fn read_fifo_source(&mut self) -> Result<FifoSource, CommE> {
        self.read_register(REG_FIFO_SRC).map(FifoSource::from)
    }

    /// Returns the number of unread samples held by the FIFO.
    pub fn fifo_level(&mut self) -> Result<u8, CommE> {
        self.read_fifo_source().map(|src| src.stored())
    }

    /// Reports whether a new sample is ready.
    ///
    /// In continuous mode this checks the low six bits of `FIFO_SRC_REG`; in
    /// one-shot mode it checks the X data-ready bit of `STATUS_REG`.
    pub fn acceleration_available(&mut self) -> Result<bool, CommE> {
        match self.mode {
            SamplingMode::Continuous => {
                let raw = self.read_register(REG_FIFO_SRC)?;
                Ok(raw & FIFO_SRC_LEVEL_MASK != 0)
            }
            SamplingMode::OneShot => Ok(self.read_status()?.x_available()),
        }
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads the signed 8-bit output of each axis.
    pub fn read_acceleration_raw(&mut self) -> Result<[i8; 3], CommE> {
        let x = self.read_register(REG_OUT_X)?;
        let y = self.read_register(REG_OUT_Y)?;
        let z = self.read_register(REG_OUT_Z)?;

        Ok([x as i8, y as i8, z as i8])
    }

    /// Returns acceleration in g as `[x, y, z]`.
    pub fn read_acceleration(&mut self) -> Result<[f32; 3], CommE> {
        let sensitivity = self.sensitivity;
        let raw = self.read_acceleration_raw()?;

        Ok(raw.map(|count| f32::from(count) * sensitivity))
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Reads one register of the configured device.
    pub fn read_register(&mut self, register: u8) -> Result<u8, CommE> {
        let address = self.config.address.addr();
        self.interface
            .read_register(address, register)
            .map_err(Error::from)
    }

    /// Writes one register of the configured device.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        let address = self.config.address.addr();
        trace!("write {=u8:#x} <- {=u8:#x}", register, value);
        self.interface
            .write_register(address, register, value)
            .map_err(Error::from)
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn probe(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.interface.open().map_err(Error::from)?;
        delay.delay_ms(SETTLE_DELAY_MS);

        match self.device_id() {
            Ok(EXPECTED_WHO_AM_I) => Ok(()),
            Ok(found) => {
                warn!("unexpected WHO_AM_I {=u8:#x}", found);
                let _ = self.end();
                Err(Error::DeviceIdMismatch(found))
            }
            Err(err) => {
                warn!("WHO_AM_I read failed");
                let _ = self.end();
                Err(err)
            }
        }
    }

    fn apply_rate_and_scale(
        &mut self,
        odr: OutputDataRate,
        full_scale: FullScale,
    ) -> Result<(), CommE> {
        let mut first_error = None;

        self.attempt_write(CtrlReg1::all_axes(odr), &mut first_error);
        if self.attempt_write(CtrlReg4::new().with_full_scale(full_scale), &mut first_error) {
            self.sensitivity = full_scale.sensitivity();
        }

        debug!(
            "configured {=u16} Hz, {=u8} g, {=f32} g/LSB",
            odr.hz(),
            full_scale.g(),
            self.sensitivity
        );
        self.conclude(first_error)
    }

    /// Writes one typed register, recording the first failure instead of returning it.
    fn attempt_write<R>(&mut self, value: R, first_error: &mut Option<Error<CommE>>) -> bool
    where
        R: Register<Raw = u8> + Into<u8>,
    {
        match self.write_register(R::ADDRESS, value.into()) {
            Ok(()) => true,
            Err(err) => {
                warn!("write to {=u8:#x} failed", R::ADDRESS);
                first_error.get_or_insert(err);
                false
            }
        }
    }

    fn conclude(&self, first_error: Option<Error<CommE>>) -> Result<(), CommE> {
        match (first_error, self.config.write_policy) {
            (Some(err), WritePolicy::Strict) => Err(err),
            _ => Ok(()),
        }
    }
}
