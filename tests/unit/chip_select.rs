//! Unit tests for chip select handling and session framing

use crate::common::{create_mock_driver, MockChip};
use tdc_as6501::{As6501, As6501Error};

#[test]
fn test_construction_deasserts_chip_select() {
    let (_driver, chip) = create_mock_driver();

    assert!(chip.cs_is_high());
    assert_eq!(chip.state().cs_log, vec![true]);
    assert!(chip.sessions().is_empty(), "Construction must not touch the bus");
}

#[test]
fn test_every_operation_is_one_session() {
    let (mut driver, chip) = create_mock_driver();

    driver.write_register(2, 0xC0).unwrap();
    driver.read_register(2).unwrap();
    driver.send_opcode(0x18).unwrap();

    let state = chip.state();
    assert_eq!(state.sessions.len(), 3);
    assert_eq!(state.cs_log, vec![true, false, true, false, true, false, true]);
    assert_eq!(state.flushes, 3);
    assert_eq!(state.bytes_outside_session, 0);
}

#[test]
fn test_bus_error_releases_chip_select() {
    let (mut driver, chip) = create_mock_driver();

    chip.fail_next_transfer();
    let result = driver.read_register(4);

    assert_eq!(result, Err(As6501Error::CommunicationError));
    assert!(chip.cs_is_high(), "Chip select must be released after a failed transfer");

    // The next transaction works normally
    driver.write_register(4, 0x11).unwrap();
    assert_eq!(driver.read_register(4), Ok(0x11));
}

#[test]
fn test_chip_select_failure_on_construction() {
    let chip = MockChip::new();
    chip.state().fail_cs = true;

    let result = As6501::new(chip.bus(), chip.cs(), chip.delay());
    assert!(matches!(result, Err(As6501Error::PinError)));
}

#[test]
fn test_chip_select_failure_skips_transfer() {
    let (mut driver, chip) = create_mock_driver();

    chip.state().fail_cs = true;
    assert_eq!(driver.send_opcode(0x30), Err(As6501Error::PinError));
    chip.state().fail_cs = false;

    assert!(chip.sessions().is_empty());
    assert_eq!(chip.state().power_resets, 0);
}

#[test]
fn test_release_returns_parts() {
    let (driver, chip) = create_mock_driver();

    let (_bus, _cs, _delay) = driver.release();
    assert!(chip.cs_is_high());
}
