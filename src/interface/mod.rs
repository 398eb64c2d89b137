//! Bus interface abstraction for the LIS2DE12 driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// Every call is a single bus transaction; implementations must not retry.
pub trait Lis2de12Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Brings the bus up before the first transaction.
    ///
    /// Most HAL buses are ready once constructed, so the default does nothing.
    fn open(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Shuts the bus down after the device has been powered down.
    fn close(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Writes `value` to `register` of the device at `address`.
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> core::result::Result<(), Self::Error>;

    /// Reads a single register of the device at `address`.
    fn read_register(&mut self, address: u8, register: u8) -> core::result::Result<u8, Self::Error>;
}
