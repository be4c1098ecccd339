pub const MAX_DIGITS: u8 = 16; // OC0 - OC15
pub const CLOCK_DIGITS: u8 = 4;
pub const BLANK: u8 = 0x00;
pub const OC_POWER_ON: u16 = 0xFFFF; // OC lines come out of reset high
pub const DEFAULT_CONFIG: u8 = command::config::IO_OE | command::config::DEC_L;

// bit 0 = a, bit 1 = b, ..., bit 6 = g, bit 7 = dp; matches the board wiring, not Code-B
pub const HEX_TO_SEGMENTS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F, 0x77, 0x7C, 0x58, 0x5E, 0x79, 0x71,
];

// The chip has no slave address: each command code is put on the bus as the address.
pub mod command {
    pub const SET_OC_L: u8 = 0x22; // OC0 - OC7 output levels
    pub const SET_OC_H: u8 = 0x23; // OC8 - OC15 output levels
    pub const CONFIG: u8 = 0x24;
    pub const READ_IO: u8 = 0x26; // IO0 - IO7 input levels
    pub const SET_IO_BASE: u8 = 0x30; // 0x30 | digit, digit 0 - 15

    pub mod config {
        pub const IO_OE: u8 = 0x01; // bit 0: IO0 - IO7 are outputs
        pub const DEC_L: u8 = 0x02; // bit 1: drive OC0 - OC7 as digit commons
        pub const DEC_H: u8 = 0x04; // bit 2: drive OC8 - OC15 as digit commons
        pub const X_INT: u8 = 0x08; // bit 3: input change interrupt on OC15
        pub const OD_EN: u8 = 0x10; // bit 4: OC outputs are open drain
        pub const INTENSITY_MASK: u8 = 0x60; // bits 6:5: scan duty, 00 is full brightness
        pub const SLEEP: u8 = 0x80; // bit 7: low power sleep
    }
}
