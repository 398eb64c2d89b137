#![no_std]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::device::Lis2de12;
pub use crate::error::{Error, Result};
