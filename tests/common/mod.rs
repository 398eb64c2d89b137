//! Shared test doubles for the LIS2DE12 driver.

#![allow(dead_code)]

use lis2de12::interface::Lis2de12Interface;

pub const ADDR: u8 = 0x19;

/// Delay that records every requested wait instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Error raised by [`SimulatedBus`] when a fault is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nack;

/// In-memory register file standing in for a LIS2DE12 on the bus.
#[derive(Debug)]
pub struct SimulatedBus {
    pub registers: [u8; 0x40],
    pub writes: Vec<(u8, u8)>,
    pub opened: usize,
    pub closed: usize,
    pub fail_writes_to: Option<u8>,
    pub fail_reads: bool,
}

impl SimulatedBus {
    pub fn new() -> Self {
        let mut registers = [0u8; 0x40];
        registers[0x0F] = 0x33;
        Self {
            registers,
            writes: Vec::new(),
            opened: 0,
            closed: 0,
            fail_writes_to: None,
            fail_reads: false,
        }
    }

    /// Values written to `register`, oldest first.
    pub fn writes_to(&self, register: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(reg, _)| *reg == register)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl Lis2de12Interface for SimulatedBus {
    type Error = Nack;

    fn open(&mut self) -> Result<(), Self::Error> {
        self.opened += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.closed += 1;
        Ok(())
    }

    fn write_register(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        assert_eq!(address, ADDR, "unexpected device address");
        self.writes.push((register, value));
        if self.fail_writes_to == Some(register) {
            return Err(Nack);
        }
        self.registers[register as usize] = value;
        Ok(())
    }

    fn read_register(&mut self, address: u8, register: u8) -> Result<u8, Self::Error> {
        assert_eq!(address, ADDR, "unexpected device address");
        if self.fail_reads {
            return Err(Nack);
        }
        Ok(self.registers[register as usize])
    }
}

/// Assert that two floating point values are approximately equal.
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    let diff = (a - b).abs();
    assert!(
        diff < epsilon,
        "Values not equal within epsilon: {} vs {} (diff: {}, epsilon: {})",
        a,
        b,
        diff,
        epsilon
    );
}
