// Adapter from an embedded-hal I2C master to the byte-oriented register bus

use embedded_hal::i2c::I2c;
use hal::RegisterBus;

/// Register bus over any blocking `embedded-hal` 1.0 I2C implementation
///
/// Reads are a write of the register address followed by a repeated-start
/// read of one byte. Writes send the register address and value in a single
/// transaction.
pub struct I2cBus<I: I2c> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    /// Wrap an I2C master
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the wrapped I2C master
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> RegisterBus for I2cBus<I> {
    type Error = I::Error;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error> {
        let mut buffer = [0u8; 1];
        self.i2c.write_read(device, &[register], &mut buffer)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(device, &[register, value])
    }
}
