//! Minimal driver for the IS31FL3731 LED matrix driver.
//!
//! The crate exposes the chip's register map ([`config`]) and a driver
//! issuing register writes through a [`RegisterBus`] (or
//! [`AsyncRegisterBus`]). [`I2cBus`] implements both on top of
//! `embedded-hal` I2C peripherals.
#![no_std]

pub mod config;
mod device;
mod i2c;
mod is31fl3731;

#[cfg(test)]
mod test_utils;

pub use device::{AsyncRegisterBus, RegisterBus};
pub use i2c::I2cBus;
pub use is31fl3731::{Async, Blocking, Mode, IS31FL3731};
