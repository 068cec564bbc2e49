use embedded_hal::i2c::{Error, ErrorKind, ErrorType, Operation};

use crate::device::{AsyncRegisterBus, RegisterBus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeI2cError {
    Nack,
}

impl Error for FakeI2cError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(
            embedded_hal::i2c::NoAcknowledgeSource::Address,
        )
    }
}

/// I2C peripheral recording every written byte and the address of every
/// transaction
pub struct FakeI2cBus<const N: usize> {
    pub addresses: heapless::Vec<u8, N>,
    pub write_data: heapless::Vec<u8, N>,
    failing: bool,
}

impl<const N: usize> ErrorType for FakeI2cBus<N> {
    type Error = FakeI2cError;
}

impl<const N: usize> FakeI2cBus<N> {
    pub fn new() -> Self {
        Self {
            addresses: heapless::Vec::new(),
            write_data: heapless::Vec::new(),
            failing: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn addresses_as_ref(&self) -> &[u8] {
        self.addresses.as_slice()
    }

    pub fn write_data_as_ref(&self) -> &[u8] {
        self.write_data.as_slice()
    }

    fn record(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), FakeI2cError> {
        if self.failing {
            return Err(FakeI2cError::Nack);
        }

        self.addresses.push(address).unwrap();
        for operation in operations {
            match operation {
                Operation::Write(write) => {
                    self.write_data.extend_from_slice(write).unwrap();
                }
                Operation::Read(_) => panic!("unexpected read"),
            }
        }
        Ok(())
    }
}

impl<const N: usize> embedded_hal::i2c::I2c for FakeI2cBus<N> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.record(address, operations)
    }
}

impl<const N: usize> embedded_hal_async::i2c::I2c for FakeI2cBus<N> {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.record(address, operations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeBusError(pub u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCall {
    pub address: u8,
    pub register: u8,
    pub data: heapless::Vec<u8, 32>,
}

/// Register bus recording every successful call. Once `fail_from` calls
/// have been attempted, every further call fails with a fixed error.
pub struct RecordingBus {
    pub calls: heapless::Vec<WriteCall, 16>,
    pub attempts: usize,
    fail_from: Option<(usize, FakeBusError)>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
            attempts: 0,
            fail_from: None,
        }
    }

    pub fn new_failing(error: FakeBusError) -> Self {
        Self::new_failing_from(0, error)
    }

    pub fn new_failing_from(attempt: usize, error: FakeBusError) -> Self {
        Self {
            fail_from: Some((attempt, error)),
            ..Self::new()
        }
    }

    pub fn calls_as_ref(&self) -> &[WriteCall] {
        self.calls.as_slice()
    }

    fn record(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), FakeBusError> {
        let attempt = self.attempts;
        self.attempts += 1;

        if let Some((fail_from, error)) = self.fail_from {
            if attempt >= fail_from {
                return Err(error);
            }
        }

        self.calls
            .push(WriteCall {
                address,
                register,
                data: heapless::Vec::from_slice(data).unwrap(),
            })
            .unwrap();
        Ok(())
    }
}

impl RegisterBus for RecordingBus {
    type Error = FakeBusError;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), FakeBusError> {
        self.record(address, register, data)
    }
}

impl AsyncRegisterBus for RecordingBus {
    type Error = FakeBusError;

    async fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), FakeBusError> {
        self.record(address, register, data)
    }
}
