//! Register map definitions for the LIS2DE12 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{FifoMode, FullScale, OutputDataRate};

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: u8 = 0x20;
/// Register address of `CTRL_REG4`.
pub const REG_CTRL_REG4: u8 = 0x23;
/// Register address of `CTRL_REG5`.
pub const REG_CTRL_REG5: u8 = 0x24;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X`.
pub const REG_OUT_X: u8 = 0x29;
/// Register address of `OUT_Y`.
pub const REG_OUT_Y: u8 = 0x2B;
/// Register address of `OUT_Z`.
pub const REG_OUT_Z: u8 = 0x2D;
/// Register address of `FIFO_CTRL_REG`.
pub const REG_FIFO_CTRL: u8 = 0x2E;
/// Register address of `FIFO_SRC_REG`.
pub const REG_FIFO_SRC: u8 = 0x2F;

/// Value reported by `WHO_AM_I` on a genuine LIS2DE12.
pub const EXPECTED_WHO_AM_I: u8 = 0x33;

/// Bits of `FIFO_SRC_REG` inspected when polling for buffered data.
pub const FIFO_SRC_LEVEL_MASK: u8 = 0x3F;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

macro_rules! byte_register {
    ($ty:ident) => {
        impl From<u8> for $ty {
            fn from(value: u8) -> Self {
                Self::from_bytes([value])
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.into_bytes()[0]
            }
        }
    };
}

/// Bitfield representation of `CTRL_REG1` (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Low-power mode enable (bit 3).
    pub low_power: bool,
    // Output data rate selection (bits 7:4).
    pub odr: OutputDataRate,
}

byte_register!(CtrlReg1);

impl CtrlReg1 {
    /// All axes on in low-power mode at the given rate.
    pub fn all_axes(odr: OutputDataRate) -> Self {
        Self::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_low_power(true)
            .with_odr(odr)
    }
}

/// Bitfield representation of `CTRL_REG4` (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // SPI serial interface mode (bit 0).
    pub spi_3wire: bool,
    // Self-test selection (bits 2:1).
    pub self_test: B2,
    #[skip]
    __: B1,
    // Full-scale selection (bits 5:4).
    pub full_scale: FullScale,
    #[skip]
    __: B1,
    // Block data update (bit 7).
    pub block_data_update: bool,
}

byte_register!(CtrlReg4);

/// Bitfield representation of `CTRL_REG5` (address `0x24`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg5 {
    // 4D detection on INT2 (bit 0).
    pub d4d_int2: bool,
    // Latch INT2 (bit 1).
    pub lir_int2: bool,
    // 4D detection on INT1 (bit 2).
    pub d4d_int1: bool,
    // Latch INT1 (bit 3).
    pub lir_int1: bool,
    #[skip]
    __: B2,
    // FIFO enable (bit 6).
    pub fifo_enable: bool,
    // Reboot memory content (bit 7).
    pub boot: bool,
}

byte_register!(CtrlReg5);

/// Bitfield representation of `STATUS_REG` (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X sample (bit 0).
    pub x_available: bool,
    // New Y sample (bit 1).
    pub y_available: bool,
    // New Z sample (bit 2).
    pub z_available: bool,
    // New sample on all axes (bit 3).
    pub xyz_available: bool,
    // X overrun (bit 4).
    pub x_overrun: bool,
    // Y overrun (bit 5).
    pub y_overrun: bool,
    // Z overrun (bit 6).
    pub z_overrun: bool,
    // Overrun on any axis (bit 7).
    pub xyz_overrun: bool,
}

byte_register!(Status);

/// Bitfield representation of `FIFO_CTRL_REG` (address `0x2E`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoControl {
    // Watermark threshold (bits 4:0).
    pub threshold: B5,
    // Route the trigger to INT2 instead of INT1 (bit 5).
    pub trigger_int2: bool,
    // FIFO mode selection (bits 7:6).
    pub mode: FifoMode,
}

byte_register!(FifoControl);

/// Bitfield representation of `FIFO_SRC_REG` (address `0x2F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoSource {
    // Unread samples stored in the FIFO (bits 4:0).
    pub stored: B5,
    // FIFO empty (bit 5).
    pub empty: bool,
    // FIFO overrun (bit 6).
    pub overrun: bool,
    // Watermark reached (bit 7).
    pub watermark: bool,
}

byte_register!(FifoSource);

impl Register for CtrlReg1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for CtrlReg4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for CtrlReg5 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL_REG5;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for FifoControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_CTRL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for FifoSource {
    type Raw = u8;
    const ADDRESS: u8 = REG_FIFO_SRC;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}
