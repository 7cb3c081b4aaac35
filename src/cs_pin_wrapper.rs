// src/cs_pin_wrapper.rs

use embedded_hal::digital::OutputPin;
use crate::errors::As6501Error;

/// Active-low chip select.
pub struct CsPinWrapper<CS> {
    cs: CS,
}

impl<CS> CsPinWrapper<CS>
where
    CS: OutputPin,
{
    pub fn new(cs: CS) -> Self {
        CsPinWrapper { cs }
    }

    pub fn set_high(&mut self) -> Result<(), As6501Error> {
        self.cs.set_high().map_err(|_| As6501Error::PinError)
    }

    pub fn set_low(&mut self) -> Result<(), As6501Error> {
        self.cs.set_low().map_err(|_| As6501Error::PinError)
    }

    /// Asserts chip select. The line goes high again when the guard is dropped.
    pub fn select(&mut self) -> Result<Selected<'_, CS>, As6501Error> {
        self.set_low()?;
        Ok(Selected { wrapper: self })
    }

    pub fn release(self) -> CS {
        self.cs
    }
}

pub struct Selected<'a, CS>
where
    CS: OutputPin,
{
    wrapper: &'a mut CsPinWrapper<CS>,
}

impl<CS> Drop for Selected<'_, CS>
where
    CS: OutputPin,
{
    fn drop(&mut self) {
        self.wrapper.set_high().ok();
    }
}
