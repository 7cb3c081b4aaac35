// src/commands.rs

// SPI opcodes for the AS6501
pub const OPC_POWER: u8 = 0x30;   // Power-on reset
pub const OPC_INIT: u8 = 0x18;    // Init: keep configuration, start measurement
pub const OPC_WR_CONF: u8 = 0x80; // Write config, ORed with address
pub const OPC_RD_CONF: u8 = 0x40; // Read config, ORed with address
pub const OPC_RD_RES: u8 = 0x60;  // Read result, ORed with address

// Register addresses are 5 bits wide
pub const ADDR_MASK: u8 = 0x1F;

pub const fn write_register_opcode(addr: u8) -> u8 {
    OPC_WR_CONF | (addr & ADDR_MASK)
}

pub const fn read_register_opcode(addr: u8) -> u8 {
    OPC_RD_CONF | (addr & ADDR_MASK)
}

/// Result reads are not masked: the caller picks one of the result base addresses.
pub const fn read_result_opcode(base_addr: u8) -> u8 {
    OPC_RD_RES | base_addr
}
