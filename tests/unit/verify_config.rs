//! Unit tests for configuration readback and the presence flag

use crate::common::{create_mock_driver, LogSink};
use tdc_as6501::registers::{CFG_DUAL, CFG_SINGLE, NREG};
use tdc_as6501::As6501Error;

#[test]
fn test_verify_after_write_succeeds() {
    for preset in [CFG_SINGLE, CFG_DUAL] {
        let (mut driver, _chip) = create_mock_driver();
        let mut log = LogSink::default();

        driver.write_config(&preset).unwrap();
        let present = driver.verify_config(&preset, &mut log).unwrap();

        assert!(present);
        assert!(driver.is_present());
        assert!(log.text.is_empty());
    }
}

#[test]
fn test_verify_reads_all_registers_in_one_session() {
    let (mut driver, chip) = create_mock_driver();
    let mut log = LogSink::default();

    driver.write_config(&CFG_DUAL).unwrap();
    driver.verify_config(&CFG_DUAL, &mut log).unwrap();

    let session = chip.last_session();
    assert_eq!(session.len(), NREG + 1);
    assert_eq!(session[0], 0x40);
}

#[test]
fn test_single_corruption_detected() {
    for index in [0usize, 5, 16] {
        let (mut driver, chip) = create_mock_driver();
        let mut log = LogSink::default();

        driver.write_config(&CFG_DUAL).unwrap();
        chip.corrupt_readback(1, index, 0x01);
        let present = driver.verify_config(&CFG_DUAL, &mut log).unwrap();

        assert!(!present);
        assert!(!driver.is_present());
        assert_eq!(chip.last_session().len(), NREG + 1, "All registers are still read");

        let lines = log.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(&format!("Reg {} mismatch", index)), "{}", lines[0]);
    }
}

#[test]
fn test_exactly_corrupted_indices_reported() {
    let (mut driver, chip) = create_mock_driver();
    let mut log = LogSink::default();

    driver.write_config(&CFG_SINGLE).unwrap();
    {
        let mut state = chip.state();
        state.corrupt_rounds = 1;
        state.corrupt_mask[2] = 0xFF;
        state.corrupt_mask[9] = 0x10;
    }
    assert!(!driver.verify_config(&CFG_SINGLE, &mut log).unwrap());

    let lines = log.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Reg 2 mismatch"));
    assert!(lines[1].starts_with("Reg 9 mismatch"));
}

#[test]
fn test_wrong_preset_reports_stopb_enable() {
    let (mut driver, _chip) = create_mock_driver();
    let mut log = LogSink::default();

    driver.write_config(&CFG_SINGLE).unwrap();
    assert!(!driver.verify_config(&CFG_DUAL, &mut log).unwrap());

    let lines = log.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Reg 0 mismatch"));
}

#[test]
fn test_presence_recovers_on_next_verify() {
    let (mut driver, chip) = create_mock_driver();
    let mut log = LogSink::default();

    driver.write_config(&CFG_DUAL).unwrap();
    chip.corrupt_readback(1, 3, 0x80);
    assert!(!driver.verify_config(&CFG_DUAL, &mut log).unwrap());
    assert!(driver.verify_config(&CFG_DUAL, &mut log).unwrap());
    assert!(driver.is_present());
}

#[test]
fn test_bus_error_clears_presence() {
    let (mut driver, chip) = create_mock_driver();
    let mut log = LogSink::default();

    driver.write_config(&CFG_DUAL).unwrap();
    assert!(driver.verify_config(&CFG_DUAL, &mut log).unwrap());

    chip.fail_next_transfer();
    assert_eq!(
        driver.verify_config(&CFG_DUAL, &mut log),
        Err(As6501Error::CommunicationError)
    );
    assert!(!driver.is_present());
}
