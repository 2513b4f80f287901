use crate::error::DriverError;
use crate::imu::decode_word;
use hal::{ImuSensor, RegisterBus, Vector3d};
use log::{info, trace};

// MPU-6050 I2C addresses (depends on AD0 pin state)
pub const MPU6050_I2C_ADDR_PRIMARY: u8 = 0x68;
pub const MPU6050_I2C_ADDR_SECONDARY: u8 = 0x69;

// Register addresses
pub const MPU6050_REG_ACCEL_XOUT_H: u8 = 0x3B;
pub const MPU6050_REG_ACCEL_YOUT_H: u8 = 0x3D;
pub const MPU6050_REG_ACCEL_ZOUT_H: u8 = 0x3F;
pub const MPU6050_REG_GYRO_XOUT_H: u8 = 0x43;
pub const MPU6050_REG_GYRO_YOUT_H: u8 = 0x45;
pub const MPU6050_REG_GYRO_ZOUT_H: u8 = 0x47;
pub const MPU6050_REG_PWR_MGMT_1: u8 = 0x6B;
pub const MPU6050_REG_WHO_AM_I: u8 = 0x75;

// Value written to PWR_MGMT_1 to leave sleep mode
pub const MPU6050_WAKE_CMD: u8 = 0x00;

// Chip ID for verification
pub const MPU6050_CHIP_ID: u8 = 0x68;

// Sensitivity at the power-on full-scale ranges
pub const MPU6050_GYRO_SENSITIVITY_250DPS: f32 = 131.0; // LSB per °/s
pub const MPU6050_ACCEL_SENSITIVITY_2G: f32 = 16384.0; // LSB per g

/// Configuration for MPU-6050 sensor
#[derive(Debug, Clone, Copy)]
pub struct Mpu6050Config {
    /// I2C address of the MPU-6050 (0x68 or 0x69)
    pub address: u8,

    /// Gyroscope scale in LSB per degree/second
    pub gyro_sensitivity: f32,

    /// Accelerometer scale in LSB per g
    pub accel_sensitivity: f32,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            address: MPU6050_I2C_ADDR_PRIMARY,
            gyro_sensitivity: MPU6050_GYRO_SENSITIVITY_250DPS,
            accel_sensitivity: MPU6050_ACCEL_SENSITIVITY_2G,
        }
    }
}

/// MPU-6050 accelerometer/gyroscope driver
pub struct Mpu6050<B: RegisterBus> {
    /// Register bus for communication
    bus: B,
    /// Sensor configuration
    config: Mpu6050Config,
}

impl<B: RegisterBus> Mpu6050<B> {
    /// Create a driver and wake the sensor from sleep mode
    ///
    /// The wake-up write to `PWR_MGMT_1` is the only write the driver issues.
    pub fn new(bus: B, config: Mpu6050Config) -> Result<Self, DriverError<B::Error>> {
        let mut sensor = Self { bus, config };
        sensor.write_register(MPU6050_REG_PWR_MGMT_1, MPU6050_WAKE_CMD)?;
        info!("MPU-6050 at {:#04x} woken up", sensor.config.address);
        Ok(sensor)
    }

    /// Create a driver at the primary address (0x68) with default scaling
    pub fn new_primary(bus: B) -> Result<Self, DriverError<B::Error>> {
        Self::new(bus, Mpu6050Config::default())
    }

    /// Current configuration
    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// Read the WHO_AM_I register
    pub fn who_am_i(&mut self) -> Result<u8, DriverError<B::Error>> {
        self.read_register(MPU6050_REG_WHO_AM_I)
    }

    /// Verify the chip ID as a simple self-test
    pub fn self_test(&mut self) -> Result<bool, DriverError<B::Error>> {
        Ok(self.who_am_i()? == MPU6050_CHIP_ID)
    }

    /// Raw accelerometer counts (x, y, z)
    pub fn read_accel_raw(&mut self) -> Result<[i16; 3], DriverError<B::Error>> {
        self.read_axes([
            MPU6050_REG_ACCEL_XOUT_H,
            MPU6050_REG_ACCEL_YOUT_H,
            MPU6050_REG_ACCEL_ZOUT_H,
        ])
    }

    /// Raw gyroscope counts (x, y, z)
    pub fn read_gyro_raw(&mut self) -> Result<[i16; 3], DriverError<B::Error>> {
        self.read_axes([
            MPU6050_REG_GYRO_XOUT_H,
            MPU6050_REG_GYRO_YOUT_H,
            MPU6050_REG_GYRO_ZOUT_H,
        ])
    }

    /// Direct access to the bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }

    /// Read a register
    fn read_register(&mut self, reg: u8) -> Result<u8, DriverError<B::Error>> {
        self.bus
            .read_byte(self.config.address, reg)
            .map_err(|cause| DriverError::Bus { register: reg, cause })
    }

    /// Write to a register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), DriverError<B::Error>> {
        self.bus
            .write_byte(self.config.address, reg, value)
            .map_err(|cause| DriverError::Bus { register: reg, cause })
    }

    /// Read a signed word: high byte at `reg`, low byte at `reg + 1`
    fn read_word_2c(&mut self, reg: u8) -> Result<i16, DriverError<B::Error>> {
        let high = self.read_register(reg)?;
        let low = self.read_register(reg + 1)?;
        let value = decode_word(high, low);
        trace!("reg {:#04x}: {:#04x}{:02x} -> {}", reg, high, low, value);
        Ok(value)
    }

    fn read_axes(&mut self, regs: [u8; 3]) -> Result<[i16; 3], DriverError<B::Error>> {
        Ok([
            self.read_word_2c(regs[0])?,
            self.read_word_2c(regs[1])?,
            self.read_word_2c(regs[2])?,
        ])
    }
}

fn scale(raw: [i16; 3], sensitivity: f32) -> Vector3d {
    Vector3d::new(
        raw[0] as f32 / sensitivity,
        raw[1] as f32 / sensitivity,
        raw[2] as f32 / sensitivity,
    )
}

impl<B: RegisterBus> ImuSensor for Mpu6050<B> {
    type Error = DriverError<B::Error>;

    fn read_accel(&mut self) -> Result<Vector3d, Self::Error> {
        let raw = self.read_accel_raw()?;
        Ok(scale(raw, self.config.accel_sensitivity))
    }

    fn read_gyro(&mut self) -> Result<Vector3d, Self::Error> {
        let raw = self.read_gyro_raw()?;
        Ok(scale(raw, self.config.gyro_sensitivity))
    }
}
