use crate::config::*;
use crate::device::{AsyncRegisterBus, RegisterBus};

pub trait Mode {}

#[derive(Debug)]
pub struct Async;
#[derive(Debug)]
pub struct Blocking;

impl Mode for Async {}
impl Mode for Blocking {}

/// IS31FL3731 driver.
///
/// The driver does not cache any chip state: every helper selects the bank
/// it writes to, and bus errors are returned exactly as the bus reported
/// them.
pub struct IS31FL3731<BUS, M: Mode> {
    bus: BUS,
    address: u8,
    _phantom: core::marker::PhantomData<M>,
}

// General implementation
impl<BUS, M: Mode> IS31FL3731<BUS, M> {
    /// Create a new IS31FL3731 driver
    /// # Arguments
    /// * `bus` - The register bus to use
    /// * `address` - The I2C address of the device, see [`DEFAULT_ADDRESS`]
    ///
    /// # Returns
    /// A new IS31FL3731 driver
    pub fn new(bus: BUS, address: u8) -> Self {
        Self {
            bus,
            address,
            _phantom: core::marker::PhantomData,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn into_inner(self) -> BUS {
        self.bus
    }

    pub fn inner(&self) -> &BUS {
        &self.bus
    }

    pub fn inner_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }
}

impl<BUS: RegisterBus> IS31FL3731<BUS, Blocking> {
    pub fn new_blocking(bus: BUS, address: u8) -> Self {
        Self::new(bus, address)
    }

    /// Write `data` starting at `register`, in one bus transaction.
    /// `data` is not validated: an empty buffer still reaches the bus as a
    /// register-only write.
    ///
    /// # Returns
    /// * Ok(()) if the bus accepted the write
    /// * Err(BUS::Error) unchanged if it did not
    pub fn write_register(
        &mut self,
        register: u8,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        log::trace!(
            "write {:#04x}: register {:#04x}, {} byte(s)",
            self.address,
            register,
            data.len()
        );
        self.bus.write_register(self.address, register, data)
    }

    /// Point the command register at a frame or the function bank
    pub fn select_bank(&mut self, bank: Bank) -> Result<(), BUS::Error> {
        log::debug!("select bank {:?}", bank);
        self.write_register(COMMAND, &[bank.into()])
    }

    /// Select the function bank and write `value` to one of its registers
    pub fn write_function(
        &mut self,
        register: FunctionRegister,
        value: u8,
    ) -> Result<(), BUS::Error> {
        self.select_bank(Bank::Function)?;
        self.write_register(register.into(), &[value])
    }

    pub fn set_display_mode(
        &mut self,
        mode: DisplayMode,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::DisplayMode, mode.into())
    }

    /// Set the frame shown in picture mode
    pub fn set_active_frame(&mut self, frame: Frame) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::ActiveFrame, frame.into())
    }

    pub fn set_audiosync(
        &mut self,
        audiosync: AudioSync,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::AudioSync, audiosync.into())
    }

    /// Enter software shutdown (`Software::Off`) or resume normal
    /// operation (`Software::On`)
    pub fn set_software(
        &mut self,
        software: Software,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::Shutdown, software.into())
    }

    /// Select `frame` and write `data` at the start of one of its blocks
    ///
    /// # Arguments
    /// * `frame` - The frame bank to write to
    /// * `block` - LED on/off control or LED PWM block
    /// * `data` - Raw register contents, written as is
    pub fn write_frame(
        &mut self,
        frame: Frame,
        block: FrameBlock,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        self.select_bank(Bank::Frame(frame))?;
        self.write_register(block.into(), data)
    }
}

impl<BUS: AsyncRegisterBus> IS31FL3731<BUS, Async> {
    pub fn new_async(bus: BUS, address: u8) -> Self {
        Self::new(bus, address)
    }

    /// Write `data` starting at `register`, in one bus transaction.
    /// `data` is not validated, an empty buffer still reaches the bus.
    pub async fn write_register(
        &mut self,
        register: u8,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        log::trace!(
            "write {:#04x}: register {:#04x}, {} byte(s)",
            self.address,
            register,
            data.len()
        );
        self.bus.write_register(self.address, register, data).await
    }

    pub async fn select_bank(&mut self, bank: Bank) -> Result<(), BUS::Error> {
        log::debug!("select bank {:?}", bank);
        self.write_register(COMMAND, &[bank.into()]).await
    }

    pub async fn write_function(
        &mut self,
        register: FunctionRegister,
        value: u8,
    ) -> Result<(), BUS::Error> {
        self.select_bank(Bank::Function).await?;
        self.write_register(register.into(), &[value]).await
    }

    pub async fn set_display_mode(
        &mut self,
        mode: DisplayMode,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::DisplayMode, mode.into())
            .await
    }

    pub async fn set_active_frame(
        &mut self,
        frame: Frame,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::ActiveFrame, frame.into())
            .await
    }

    pub async fn set_audiosync(
        &mut self,
        audiosync: AudioSync,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::AudioSync, audiosync.into())
            .await
    }

    pub async fn set_software(
        &mut self,
        software: Software,
    ) -> Result<(), BUS::Error> {
        self.write_function(FunctionRegister::Shutdown, software.into())
            .await
    }

    pub async fn write_frame(
        &mut self,
        frame: Frame,
        block: FrameBlock,
        data: &[u8],
    ) -> Result<(), BUS::Error> {
        self.select_bank(Bank::Frame(frame)).await?;
        self.write_register(block.into(), data).await
    }
}
