use std::fmt::Display;

use libhack::{Field, OpError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("no instructions found in program")]
    EmptyInput,
    #[error("label ({label}) was already declared on line {first_line}")]
    DuplicateLabelDeclaration { label: String, first_line: usize },
    #[error("couldn't resolve symbol {0}")]
    UnresolvedSymbol(String),
    #[error("unknown {field} mnemonic '{mnemonic}'")]
    UnknownMnemonic { field: Field, mnemonic: String },
    #[error("value {0} doesn't fit in an address instruction")]
    ValueOutOfRange(u64),
    #[error("malformed instruction '{0}'")]
    MalformedInstruction(String),
}

impl From<OpError> for ErrorKind {
    fn from(e: OpError) -> Self {
        match e {
            OpError::UnknownMnemonic { field, mnemonic } => {
                ErrorKind::UnknownMnemonic { field, mnemonic }
            }
            OpError::ValueOutOfRange(value) => ErrorKind::ValueOutOfRange(value),
        }
    }
}

/// An error tied to the line of source it came from. Line numbers count
/// from 1 over the raw input, comments and blank lines included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmError {
    pub line_no: Option<usize>,
    pub kind: ErrorKind,
}

impl AsmError {
    pub fn at(line_no: usize, kind: impl Into<ErrorKind>) -> Self {
        Self {
            line_no: Some(line_no),
            kind: kind.into(),
        }
    }

    pub fn program(kind: ErrorKind) -> Self {
        Self {
            line_no: None,
            kind,
        }
    }
}

impl Display for AsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_no {
            Some(line_no) => write!(f, "line {}: {}", line_no, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for AsmError {}

/// Every error found while assembling one program, in line order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.0))]
pub struct AssemblyErrors(pub Vec<AsmError>);

fn render(errors: &[AsmError]) -> String {
    let mut rendered = format!("{} error(s) while assembling:", errors.len());
    for error in errors {
        rendered.push('\n');
        rendered.push_str(&error.to_string());
    }
    rendered
}
