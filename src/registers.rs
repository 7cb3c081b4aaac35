// src/registers.rs

// Number of configuration registers (CFG0..CFG16)
pub const NREG: usize = 17;

// Configuration register indices
pub const CFG0_PIN_ENA: usize = 0;      // Pin enables: STOPA/STOPB, REFCLK, RSTIDX
pub const CFG1_HIT_ENA: usize = 1;      // Hit enables STOPA/B, channel combination
pub const CFG2: usize = 2;
pub const CFG3_REFCLK_DIV_L: usize = 3; // REFCLK_DIVISIONS, bits 7:0
pub const CFG4_REFCLK_DIV_M: usize = 4; // REFCLK_DIVISIONS, bits 15:8
pub const CFG5_REFCLK_DIV_H: usize = 5; // REFCLK_DIVISIONS, bits 23:16
pub const CFG6: usize = 6;
pub const CFG7: usize = 7;
pub const CFG8_FIXED: usize = 8;        // CFG8..CFG15 hold datasheet-mandated values
pub const CFG15_FIXED: usize = 15;
pub const CFG16_INPUT_MODE: usize = 16; // 0x04 selects CMOS inputs

// REFCLK_DIVISIONS = 10 000 gives a 10 MHz reference clock
pub const REFCLK_DIVISIONS: u32 = 10_000;

/// Single channel preset: STOPA only.
pub const CFG_SINGLE: [u8; NREG] = [
    0x91,             // CFG0: STOPB disabled (bit 2 = 0)
    0x05,             // CFG1
    0xC0,             // CFG2
    0x10, 0x27, 0x00, // CFG3..CFG5: 0x002710
    0x00, 0x00,       // CFG6..CFG7
    0xA1, 0x13, 0x00, 0x0A, // CFG8..CFG11
    0xCC, 0xCC, 0xF1, 0x7D, // CFG12..CFG15
    0x04,             // CFG16: CMOS input
];

/// Dual channel preset: STOPA and STOPB.
pub const CFG_DUAL: [u8; NREG] = [
    0x95,             // CFG0: STOPA/B + REFCLK + RSTIDX
    0x05,             // CFG1
    0xC0,             // CFG2
    0x10, 0x27, 0x00, // CFG3..CFG5: 0x002710
    0x00, 0x00,       // CFG6..CFG7
    0xA1, 0x13, 0x00, 0x0A, // CFG8..CFG11
    0xCC, 0xCC, 0xF1, 0x7D, // CFG12..CFG15
    0x04,             // CFG16: CMOS input
];

// Result base addresses (3 bytes each, MSB first)
pub const RES_REFID_A: u8 = 8;
pub const RES_TSTOP_A: u8 = 11;
pub const RES_REFID_B: u8 = 20;
pub const RES_TSTOP_B: u8 = 23;

/// Decodes the 24-bit REFCLK divider stored little-endian in CFG3..CFG5.
pub fn refclk_divider(cfg: &[u8; NREG]) -> u32 {
    u32::from_le_bytes([
        cfg[CFG3_REFCLK_DIV_L],
        cfg[CFG4_REFCLK_DIV_M],
        cfg[CFG5_REFCLK_DIV_H],
        0,
    ])
}
