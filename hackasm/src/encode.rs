use libhack::{Instruction, Word};
use nom::{
    bytes::complete::{is_not, tag},
    combinator::{all_consuming, opt},
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::{
    error::{AsmError, ErrorKind},
    pass_two::{Operation, ResolvedLine},
};

/// The `dest`, `comp` and `jump` fields of a compute instruction.
#[derive(Debug, PartialEq, Eq)]
pub struct ComputeFields<'a> {
    pub dest: Option<&'a str>,
    pub comp: &'a str,
    pub jump: Option<&'a str>,
}

fn field(i: &str) -> IResult<&str, &str> {
    is_not("=;")(i)
}

fn compute_fields(i: &str) -> IResult<&str, ComputeFields> {
    let (i, (dest, comp, jump)) = all_consuming(tuple((
        opt(terminated(field, tag("="))),
        field,
        opt(preceded(tag(";"), field)),
    )))(i)?;

    Ok((i, ComputeFields { dest, comp, jump }))
}

/// Split `dest=comp` or `comp;jump`. Exactly one of `dest` or `jump` has to
/// be there and none of the fields may be empty.
pub fn split_compute(text: &str) -> Result<ComputeFields, ErrorKind> {
    match compute_fields(text) {
        Ok((_, fields)) if fields.dest.is_some() ^ fields.jump.is_some() => Ok(fields),
        _ => Err(ErrorKind::MalformedInstruction(text.to_owned())),
    }
}

pub fn instruction(operation: &Operation) -> Result<Instruction, ErrorKind> {
    Ok(match operation {
        Operation::Address(value) => Instruction::address(*value)?,
        Operation::Compute(text) => {
            let ComputeFields { dest, comp, jump } = split_compute(text)?;
            Instruction::compute(dest, comp, jump)?
        }
    })
}

pub fn encode_line(line: &ResolvedLine) -> Result<(Instruction, Word), AsmError> {
    let op = instruction(&line.operation).map_err(|e| AsmError::at(line.line_no, e))?;
    Ok((op, op.encode()))
}
