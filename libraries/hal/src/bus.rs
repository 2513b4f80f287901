/// Register bus interface

/// Two-wire addressed register bus
///
/// Models the byte-oriented register access of an SMBus/I2C controller: one
/// register is read or written per transaction.
///
/// # Invariants
///
/// - Only one owner per bus instance
/// - Device addresses are 7-bit (0x00..=0x7F)
pub trait RegisterBus {
    /// Error raised by the bus when a transaction fails
    type Error: core::fmt::Debug;

    /// Read a single register from a device
    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error>;

    /// Write to a single register on a device
    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}
