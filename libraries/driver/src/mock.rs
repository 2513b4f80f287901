//! Mock register bus for testing
//!
//! Available during test builds and when the `mock` feature is enabled.

use hal::RegisterBus;

/// Bus access recorded by [`MockBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusAccess {
    /// Single-register read
    Read { device: u8, register: u8 },
    /// Single-register write
    Write { device: u8, register: u8, value: u8 },
}

/// Error returned once the mock has been told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// Register-file backed bus
///
/// Holds one 256-byte register map shared by every device address, records
/// every access, and can be programmed to fail after a number of successful
/// transactions.
#[derive(Debug)]
pub struct MockBus {
    registers: [u8; 256],
    log: Vec<BusAccess>,
    fail_after: Option<usize>,
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBus {
    /// Create a bus with every register set to zero
    pub fn new() -> Self {
        Self {
            registers: [0; 256],
            log: Vec::new(),
            fail_after: None,
        }
    }

    /// Set a single register
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    /// Store a signed word big-endian at `register`/`register + 1`
    pub fn set_word(&mut self, register: u8, value: i16) {
        let [high, low] = value.to_be_bytes();
        self.set_register(register, high);
        self.set_register(register + 1, low);
    }

    /// Store three consecutive axis words starting at `base`
    pub fn set_axes(&mut self, base: u8, values: [i16; 3]) {
        for (i, value) in values.iter().enumerate() {
            self.set_word(base + 2 * i as u8, *value);
        }
    }

    /// Fail every transaction after the next `count` successful ones
    pub fn fail_after(&mut self, count: usize) {
        self.fail_after = Some(count);
    }

    /// Accesses recorded so far, including failed ones
    pub fn log(&self) -> &[BusAccess] {
        &self.log
    }

    fn check_budget(&mut self) -> Result<(), MockBusError> {
        match self.fail_after {
            Some(0) => Err(MockBusError),
            Some(ref mut remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl RegisterBus for MockBus {
    type Error = MockBusError;

    fn read_byte(&mut self, device: u8, register: u8) -> Result<u8, Self::Error> {
        self.log.push(BusAccess::Read { device, register });
        self.check_budget()?;
        Ok(self.registers[register as usize])
    }

    fn write_byte(&mut self, device: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.log.push(BusAccess::Write { device, register, value });
        self.check_budget()?;
        self.registers[register as usize] = value;
        Ok(())
    }
}
