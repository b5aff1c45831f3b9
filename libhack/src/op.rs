use std::{fmt::Display, str::FromStr};

use strum_macros::{AsRefStr, EnumString};

use crate::{
    error::{Field, OpError},
    word::{Word, COMPUTE_PREFIX, COMP_SHIFT, DEST_SHIFT, MAX_ADDRESS},
};

/// The computation field of a compute instruction.
///
/// The discriminant is the seven bit `a c1 c2 c3 c4 c5 c6` field, so the
/// `M` forms are the `A` forms with the a-bit set.
#[derive(EnumString, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero = 0b0_101010,
    #[strum(serialize = "1")]
    One = 0b0_111111,
    #[strum(serialize = "-1")]
    NegOne = 0b0_111010,
    #[strum(serialize = "D")]
    D = 0b0_001100,
    #[strum(serialize = "A")]
    A = 0b0_110000,
    #[strum(serialize = "!D")]
    NotD = 0b0_001101,
    #[strum(serialize = "!A")]
    NotA = 0b0_110001,
    #[strum(serialize = "-D")]
    NegD = 0b0_001111,
    #[strum(serialize = "-A")]
    NegA = 0b0_110011,
    #[strum(serialize = "D+1")]
    DPlusOne = 0b0_011111,
    #[strum(serialize = "A+1")]
    APlusOne = 0b0_110111,
    #[strum(serialize = "D-1")]
    DMinusOne = 0b0_001110,
    #[strum(serialize = "A-1")]
    AMinusOne = 0b0_110010,
    #[strum(serialize = "D+A")]
    DPlusA = 0b0_000010,
    #[strum(serialize = "D-A")]
    DMinusA = 0b0_010011,
    #[strum(serialize = "A-D")]
    AMinusD = 0b0_000111,
    #[strum(serialize = "D&A")]
    DAndA = 0b0_000000,
    #[strum(serialize = "D|A")]
    DOrA = 0b0_010101,

    #[strum(serialize = "M")]
    M = 0b1_110000,
    #[strum(serialize = "!M")]
    NotM = 0b1_110001,
    #[strum(serialize = "-M")]
    NegM = 0b1_110011,
    #[strum(serialize = "M+1")]
    MPlusOne = 0b1_110111,
    #[strum(serialize = "M-1")]
    MMinusOne = 0b1_110010,
    #[strum(serialize = "D+M")]
    DPlusM = 0b1_000010,
    #[strum(serialize = "D-M")]
    DMinusM = 0b1_010011,
    #[strum(serialize = "M-D")]
    MMinusD = 0b1_000111,
    #[strum(serialize = "D&M")]
    DAndM = 0b1_000000,
    #[strum(serialize = "D|M")]
    DOrM = 0b1_010101,
}

impl Comp {
    pub fn a_bit(&self) -> bool {
        (*self as Word) & 0b1_000000 > 0
    }

    pub fn code(&self) -> u8 {
        (*self as u8) & 0b0_111111
    }
}

/// Where a compute instruction stores its result. `Null` is only ever the
/// default for a missing field and can't be written out.
#[allow(clippy::upper_case_acronyms)]
#[derive(EnumString, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dest {
    #[default]
    #[strum(disabled)]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(EnumString, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Jump {
    #[default]
    #[strum(disabled)]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

fn lookup<T: FromStr>(field: Field, mnemonic: &str) -> Result<T, OpError> {
    T::from_str(mnemonic).map_err(|_| OpError::UnknownMnemonic {
        field,
        mnemonic: mnemonic.to_owned(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Address(u16),
    Compute { dest: Dest, comp: Comp, jump: Jump },
}

impl Instruction {
    pub fn address(value: u64) -> Result<Self, OpError> {
        if value > MAX_ADDRESS {
            return Err(OpError::ValueOutOfRange(value));
        }

        Ok(Self::Address(value as u16))
    }

    /// Build a compute instruction from its mnemonic fields. A missing
    /// `dest` or `jump` is the null field.
    pub fn compute(dest: Option<&str>, comp: &str, jump: Option<&str>) -> Result<Self, OpError> {
        let comp = lookup(Field::Comp, comp)?;
        let dest = dest
            .map(|d| lookup(Field::Dest, d))
            .transpose()?
            .unwrap_or_default();
        let jump = jump
            .map(|j| lookup(Field::Jump, j))
            .transpose()?
            .unwrap_or_default();

        Ok(Self::Compute { dest, comp, jump })
    }

    pub fn encode(&self) -> Word {
        match self {
            Self::Address(value) => *value,
            Self::Compute { dest, comp, jump } => {
                COMPUTE_PREFIX
                    | (*comp as Word) << COMP_SHIFT
                    | (*dest as Word) << DEST_SHIFT
                    | *jump as Word
            }
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Address(value) => write!(f, "@{}", value),
            Self::Compute { dest, comp, jump } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest.as_ref())?;
                }
                write!(f, "{}", comp.as_ref())?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump.as_ref())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::WordExt;

    fn encoded(dest: Option<&str>, comp: &str, jump: Option<&str>) -> String {
        Instruction::compute(dest, comp, jump)
            .unwrap()
            .encode()
            .as_binary()
    }

    #[test]
    fn encode_compute() {
        assert_eq!(encoded(Some("D"), "A", None), "1110110000010000");
        assert_eq!(encoded(None, "D", Some("JGT")), "1110001100000001");
        assert_eq!(encoded(None, "0", Some("JMP")), "1110101010000111");
        assert_eq!(encoded(Some("M"), "M+1", None), "1111110111001000");
        assert_eq!(encoded(Some("AMD"), "D|M", None), "1111010101111000");
        assert_eq!(encoded(None, "D|M", Some("JNE")), "1111010101000101");
    }

    #[test]
    fn a_bit_follows_memory_operand() {
        assert!(!Comp::A.a_bit());
        assert!(Comp::M.a_bit());
        assert_eq!(Comp::A.code(), Comp::M.code());
        assert!(Comp::DAndM.a_bit());
        assert!(!Comp::Zero.a_bit());
    }

    #[test]
    fn encode_address() {
        let op = Instruction::address(16384).unwrap();
        assert_eq!(op.encode().as_binary(), "0100000000000000");

        let op = Instruction::address(MAX_ADDRESS).unwrap();
        assert_eq!(op.encode().as_binary(), "0111111111111111");
    }

    #[test]
    fn address_out_of_range() {
        assert_eq!(
            Instruction::address(32768),
            Err(OpError::ValueOutOfRange(32768))
        );
    }

    #[test]
    fn unknown_mnemonics() {
        assert_eq!(
            Instruction::compute(None, "D*A", Some("JMP")),
            Err(OpError::UnknownMnemonic {
                field: Field::Comp,
                mnemonic: "D*A".into()
            })
        );
        assert_eq!(
            Instruction::compute(Some("X"), "D", None),
            Err(OpError::UnknownMnemonic {
                field: Field::Dest,
                mnemonic: "X".into()
            })
        );
        assert_eq!(
            Instruction::compute(None, "D", Some("JXX")),
            Err(OpError::UnknownMnemonic {
                field: Field::Jump,
                mnemonic: "JXX".into()
            })
        );
    }

    #[test]
    fn mnemonics_are_case_sensitive() {
        assert!(Instruction::compute(Some("d"), "a", None).is_err());
    }

    #[test]
    fn null_is_only_a_default() {
        assert_eq!(
            Instruction::compute(Some("null"), "D", None),
            Err(OpError::UnknownMnemonic {
                field: Field::Dest,
                mnemonic: "null".into()
            })
        );
        assert_eq!(
            Instruction::compute(None, "D", Some("null")),
            Err(OpError::UnknownMnemonic {
                field: Field::Jump,
                mnemonic: "null".into()
            })
        );
        assert_eq!(
            Instruction::compute(None, "D", Some("JMP")),
            Ok(Instruction::Compute {
                dest: Dest::Null,
                comp: Comp::D,
                jump: Jump::JMP
            })
        );
    }

    #[test]
    fn display_mnemonics() {
        let op = Instruction::compute(Some("D"), "D-A", None).unwrap();
        assert_eq!(op.to_string(), "D=D-A");

        let op = Instruction::compute(None, "0", Some("JMP")).unwrap();
        assert_eq!(op.to_string(), "0;JMP");

        assert_eq!(Instruction::Address(21).to_string(), "@21");
    }
}
