/// Blocking register bus: writes `data` starting at `register` of the
/// device at `address`, in a single transaction.
pub trait RegisterBus {
    type Error;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}

/// Async counterpart of [`RegisterBus`]
#[allow(async_fn_in_trait)]
pub trait AsyncRegisterBus {
    type Error;

    async fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}

impl<T> RegisterBus for &mut T
where
    T: RegisterBus,
{
    type Error = T::Error;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        T::write_register(self, address, register, data)
    }
}

impl<T> AsyncRegisterBus for &mut T
where
    T: AsyncRegisterBus,
{
    type Error = T::Error;

    async fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        T::write_register(self, address, register, data).await
    }
}
