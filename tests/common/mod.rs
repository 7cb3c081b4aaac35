//! Common test utilities and mock implementations
#![allow(dead_code)]


pub use mock_bus::{LogSink, MockBus, MockChip, MockCs, MockDelay};

use tdc_as6501::As6501;

pub type MockDriver = As6501<MockBus, MockCs, MockDelay>;

/// Create a driver wired to a fresh simulated chip
pub fn create_mock_driver() -> (MockDriver, MockChip) {
    let chip = MockChip::new();
    let driver = As6501::new(chip.bus(), chip.cs(), chip.delay()).unwrap();
    (driver, chip)
}
