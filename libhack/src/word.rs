pub type Word = u16;

/// Largest value an address instruction can load. The top bit of the word
/// is the opcode, so only 15 bits are left for the value.
pub const MAX_ADDRESS: u64 = 0x7F_FF;

// |111|a|c1 c2 c3 c4 c5 c6|d1 d2 d3|j1 j2 j3|
pub const COMPUTE_PREFIX: Word = 0b111 << 13;
pub const COMP_SHIFT: u16 = 6;
pub const DEST_SHIFT: u16 = 3;

pub trait WordExt {
    fn as_binary(&self) -> String;
}

impl WordExt for Word {
    fn as_binary(&self) -> String {
        format!("{:016b}", self)
    }
}
