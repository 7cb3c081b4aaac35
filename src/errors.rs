use core::fmt::{Debug, Formatter, Result};
use ufmt::{uDebug, uWrite};

#[derive(PartialEq, Clone, Copy)]
pub enum As6501Error {
    CommunicationError, // SPI transfer or flush failed
    PinError,           // Chip select could not be driven
    ConfigMismatch,     // Retry policy ran out before the readback matched
    ChannelDisabled,    // Channel B read outside dual channel mode
}

impl Debug for As6501Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            As6501Error::CommunicationError => write!(f, "CommunicationError"),
            As6501Error::PinError => write!(f, "PinError"),
            As6501Error::ConfigMismatch => write!(f, "ConfigMismatch"),
            As6501Error::ChannelDisabled => write!(f, "ChannelDisabled"),
        }
    }
}

impl uDebug for As6501Error {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            As6501Error::CommunicationError => f.write_str("CommunicationError"),
            As6501Error::PinError => f.write_str("PinError"),
            As6501Error::ConfigMismatch => f.write_str("ConfigMismatch"),
            As6501Error::ChannelDisabled => f.write_str("ChannelDisabled"),
        }
    }
}
