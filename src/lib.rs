#![no_std]
// src/lib.rs

pub mod registers;
pub mod commands;
pub mod errors;
pub mod channel_types;
pub mod retry_policy;
pub mod as6501;
pub mod cs_pin_wrapper;

pub use as6501::{As6501, SPI_FREQUENCY_HZ, SPI_MODE, SPI_MSB_FIRST};
pub use channel_types::{Channel, ChannelMode, Measurement, ResultSlot};
pub use errors::As6501Error;
pub use retry_policy::RetryPolicy;
