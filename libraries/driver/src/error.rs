use thiserror::Error;

/// Errors raised by the sensor drivers
#[derive(Error, Debug)]
pub enum DriverError<E: core::fmt::Debug> {
    /// A register transaction on the bus failed (device absent, NACK, bus error)
    #[error("Bus transaction failed at register {register:#04x}: {cause:?}")]
    Bus {
        /// Register being accessed when the transaction failed
        register: u8,
        /// Error reported by the bus
        cause: E,
    },
}

impl<E: core::fmt::Debug> DriverError<E> {
    /// Register that was being accessed when the error occurred
    pub fn register(&self) -> u8 {
        match self {
            DriverError::Bus { register, .. } => *register,
        }
    }
}
