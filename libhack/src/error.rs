use strum_macros::Display;
use thiserror::Error;

use crate::word::MAX_ADDRESS;

/// Which field of a compute instruction a mnemonic was looked up in.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Comp,
    Dest,
    Jump,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("unknown {field} mnemonic '{mnemonic}'")]
    UnknownMnemonic { field: Field, mnemonic: String },
    #[error("value {0} doesn't fit in an address instruction (max {})", MAX_ADDRESS)]
    ValueOutOfRange(u64),
}
