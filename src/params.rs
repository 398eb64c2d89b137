//! Strongly typed parameter enumerations for the LIS2DE12 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis2de12::params::{FullScale, OutputDataRate};
//!
//! assert_eq!(OutputDataRate::from_hz(400), Some(OutputDataRate::Hz400));
//! assert_eq!(FullScale::from_g(3), None);
//! assert_eq!(FullScale::G8.sensitivity(), 0.0625);
//! ```

use modular_bitfield::prelude::Specifier;

/// Output data rate selections encoded in `CTRL_REG1.ODR[3:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// Power-down mode.
    PowerDown = 0b0000,
    /// 1 Hz.
    Hz1 = 0b0001,
    /// 10 Hz.
    Hz10 = 0b0010,
    /// 25 Hz.
    Hz25 = 0b0011,
    /// 50 Hz.
    Hz50 = 0b0100,
    /// 100 Hz.
    Hz100 = 0b0101,
    /// 200 Hz.
    Hz200 = 0b0110,
    /// 400 Hz.
    Hz400 = 0b0111,
    /// 1.62 kHz low-power mode.
    Hz1620 = 0b1000,
    /// 5.376 kHz low-power mode.
    Hz5376 = 0b1001,
}

impl OutputDataRate {
    /// Returns the ODR in hertz, `0` for power-down.
    pub const fn hz(self) -> u16 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Hz1620 => 1_620,
            Self::Hz5376 => 5_376,
        }
    }

    /// Looks up the selection matching `hz` exactly.
    pub const fn from_hz(hz: u16) -> Option<Self> {
        match hz {
            0 => Some(Self::PowerDown),
            1 => Some(Self::Hz1),
            10 => Some(Self::Hz10),
            25 => Some(Self::Hz25),
            50 => Some(Self::Hz50),
            100 => Some(Self::Hz100),
            200 => Some(Self::Hz200),
            400 => Some(Self::Hz400),
            1_620 => Some(Self::Hz1620),
            5_376 => Some(Self::Hz5376),
            _ => None,
        }
    }
}

impl Default for OutputDataRate {
    fn default() -> Self {
        Self::Hz100
    }
}

/// Full-scale selections encoded in `CTRL_REG4.FS[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl FullScale {
    /// Returns the range in g.
    pub const fn g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Looks up the selection matching `g` exactly.
    pub const fn from_g(g: u8) -> Option<Self> {
        match g {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }

    /// Conversion factor from one 8-bit output count to g.
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 0.0156,
            Self::G4 => 0.0312,
            Self::G8 => 0.0625,
            Self::G16 => 0.1875,
        }
    }
}

impl Default for FullScale {
    fn default() -> Self {
        Self::G4
    }
}

/// FIFO operating modes encoded in `FIFO_CTRL_REG.FM[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum FifoMode {
    /// FIFO bypassed.
    Bypass = 0b00,
    /// FIFO fills and stops.
    Fifo = 0b01,
    /// Streaming mode (circular buffer).
    Stream = 0b10,
    /// Stream until trigger, then FIFO.
    StreamToFifo = 0b11,
}

/// Sampling mode toggled by the driver's mode setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplingMode {
    /// Poll `STATUS_REG` for a single fresh sample.
    #[default]
    OneShot,
    /// FIFO streaming; poll the FIFO level.
    Continuous,
}

/// I²C slave address selected by the SA0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddr {
    /// SA0 tied high, `0x19`.
    #[default]
    Default,
    /// SA0 tied low, `0x18`.
    Alternative,
    /// Any other address.
    Custom(u8),
}

impl SlaveAddr {
    /// Returns the 7-bit bus address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Default => 0x19,
            Self::Alternative => 0x18,
            Self::Custom(addr) => addr,
        }
    }
}

/// How failed configuration writes are reported.
///
/// Every write of a configuration sequence is attempted regardless of the policy;
/// the policy only decides what the sequence reports afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WritePolicy {
    /// Log failed writes and report success.
    #[default]
    Lenient,
    /// Report the first failed write.
    Strict,
}
