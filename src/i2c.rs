use crate::device::{AsyncRegisterBus, RegisterBus};
use crate::is31fl3731::{Async, Blocking, IS31FL3731};

impl<BUS: embedded_hal::i2c::I2c> IS31FL3731<I2cBus<BUS>, Blocking> {
    /// Create a new blocking IS31FL3731 driver on top of an I2C peripheral
    /// # Arguments
    /// * `i2c` - The I2C bus to use
    /// * `address` - The I2C address of the device
    ///
    /// # Returns
    /// A new IS31FL3731 driver
    pub fn new_with_i2c_bus(i2c: BUS, address: u8) -> Self {
        Self::new_blocking(I2cBus::new(i2c), address)
    }
}

impl<BUS: embedded_hal_async::i2c::I2c> IS31FL3731<I2cBus<BUS>, Async> {
    /// Create a new async IS31FL3731 driver on top of an I2C peripheral
    pub fn new_with_async_i2c_bus(i2c: BUS, address: u8) -> Self {
        Self::new_async(I2cBus::new(i2c), address)
    }
}

/// Adapts an `embedded-hal` I2C peripheral into a register bus
pub struct I2cBus<BUS> {
    i2c: BUS,
}

impl<BUS> I2cBus<BUS> {
    pub fn new(i2c: BUS) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> BUS {
        self.i2c
    }
}

impl<BUS: embedded_hal::i2c::I2c> RegisterBus for I2cBus<BUS> {
    type Error = BUS::Error;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        self.i2c.transaction(
            address,
            &mut [
                embedded_hal::i2c::Operation::Write(&[register]),
                embedded_hal::i2c::Operation::Write(data),
            ],
        )?;

        Ok(())
    }
}

impl<BUS: embedded_hal_async::i2c::I2c> AsyncRegisterBus for I2cBus<BUS> {
    type Error = BUS::Error;

    async fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        self.i2c
            .transaction(
                address,
                &mut [
                    embedded_hal_async::i2c::Operation::Write(&[register]),
                    embedded_hal_async::i2c::Operation::Write(data),
                ],
            )
            .await?;

        Ok(())
    }
}
