//! Configuration primitives for the LIS2DE12 driver.

use crate::params::{FullScale, OutputDataRate, SlaveAddr, WritePolicy};

/// User-facing configuration for the LIS2DE12 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Bus address of the device.
    pub address: SlaveAddr,
    /// Output data rate programmed by [`Lis2de12::begin`](crate::Lis2de12::begin).
    pub odr: OutputDataRate,
    /// Full-scale range programmed by [`Lis2de12::begin`](crate::Lis2de12::begin).
    pub full_scale: FullScale,
    /// Reporting of failed configuration writes.
    pub write_policy: WritePolicy,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the bus address.
    pub fn address(mut self, address: SlaveAddr) -> Self {
        self.config.address = address;
        self
    }

    /// Overrides the output data rate.
    pub fn odr(mut self, odr: OutputDataRate) -> Self {
        self.config.odr = odr;
        self
    }

    /// Overrides the full-scale range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Selects how failed configuration writes are reported.
    pub fn write_policy(mut self, policy: WritePolicy) -> Self {
        self.config.write_policy = policy;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: SlaveAddr::Default,
            odr: OutputDataRate::Hz100,
            full_scale: FullScale::G4,
            write_policy: WritePolicy::Lenient,
        }
    }
}
