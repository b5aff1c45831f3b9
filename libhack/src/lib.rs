pub use error::{Field, OpError};
pub use op::{Comp, Dest, Instruction, Jump};
pub use word::{Word, WordExt};

pub mod error;
pub mod op;
pub mod word;
