use log::debug;

use crate::{
    error::{AsmError, ErrorKind},
    pass_one::{PassOne, Statement, StatementKind},
    symbols::SymbolTable,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// An address instruction whose operand has been resolved to a number.
    Address(u64),
    Compute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine {
    pub line_no: usize,
    pub text: String,
    pub operation: Operation,
}

pub struct PassTwo {
    pub lines: Vec<ResolvedLine>,
    pub symbols: SymbolTable,
    pub errors: Vec<AsmError>,
}

fn resolve_statement(
    statement: Statement,
    symbols: &mut SymbolTable,
) -> Result<ResolvedLine, AsmError> {
    let operation = match statement.kind {
        StatementKind::Address(operand) if operand.is_empty() => {
            return Err(AsmError::at(
                statement.line_no,
                ErrorKind::MalformedInstruction(statement.text),
            ));
        }
        StatementKind::Address(operand) => Operation::Address(
            symbols
                .resolve(&operand)
                .map_err(|e| AsmError::at(statement.line_no, e))?,
        ),
        StatementKind::Compute(text) => Operation::Compute(text),
    };

    Ok(ResolvedLine {
        line_no: statement.line_no,
        text: statement.text,
        operation,
    })
}

/// Replace every address-instruction operand with its value, allocating
/// variables in order of first use.
pub fn pass_two(pass_one: PassOne) -> PassTwo {
    let PassOne {
        statements,
        mut symbols,
        mut errors,
    } = pass_one;

    let mut lines = Vec::with_capacity(statements.len());
    for statement in statements {
        match resolve_statement(statement, &mut symbols) {
            Ok(line) => lines.push(line),
            Err(e) => errors.push(e),
        }
    }

    debug!("pass two: {} variables", symbols.variables().count());

    PassTwo {
        lines,
        symbols,
        errors,
    }
}
