use log::debug;

use crate::{
    error::{AsmError, ErrorKind},
    line::{Line, LineKind},
    symbols::SymbolTable,
};

/// An instruction line with its label lines removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub line_no: usize,
    pub text: String,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    Address(String),
    Compute(String),
}

pub struct PassOne {
    pub statements: Vec<Statement>,
    pub symbols: SymbolTable,
    pub errors: Vec<AsmError>,
}

pub struct FirstPass {
    cur_address: u64,
    symbols: SymbolTable,
    errors: Vec<AsmError>,
}

impl FirstPass {
    fn new() -> Self {
        Self {
            cur_address: 0,
            symbols: SymbolTable::new(),
            errors: Vec::new(),
        }
    }

    /// Record every label against the address of the instruction after it
    /// and drop the label lines.
    pub fn resolve_labels(lines: Vec<Line>) -> PassOne {
        let mut pass = Self::new();
        let statements = lines
            .into_iter()
            .filter_map(|line| pass.resolve_line(line))
            .collect::<Vec<_>>();

        debug!(
            "pass one: {} instructions, {} labels",
            statements.len(),
            pass.symbols.labels().count()
        );

        PassOne {
            statements,
            symbols: pass.symbols,
            errors: pass.errors,
        }
    }

    fn resolve_line(&mut self, line: Line) -> Option<Statement> {
        let kind = match line.kind {
            LineKind::Label(label) => {
                if label.is_empty() {
                    self.errors.push(AsmError::at(
                        line.line_no,
                        ErrorKind::MalformedInstruction(line.text),
                    ));
                } else if let Err(e) = self.symbols.add_label(&label, self.cur_address, line.line_no)
                {
                    self.errors.push(AsmError::at(line.line_no, e));
                }
                return None;
            }
            LineKind::Address(operand) => StatementKind::Address(operand),
            LineKind::Compute(text) => StatementKind::Compute(text),
        };

        self.cur_address += 1;

        Some(Statement {
            line_no: line.line_no,
            text: line.text,
            kind,
        })
    }
}
