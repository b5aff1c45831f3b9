use std::fmt::Write;

use anyhow::Result;
use hackdbg::HackDbg;
use libhack::{Word, WordExt};
use log::debug;

use encode::encode_line;
use error::{AsmError, AssemblyErrors, ErrorKind};
use line::normalize;
use pass_one::FirstPass;
use pass_two::pass_two;

pub mod constants;
pub mod encode;
pub mod error;
pub mod line;
pub mod pass_one;
pub mod pass_two;
pub mod symbols;

/// The result of assembling one program.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub words: Vec<Word>,
    pub debug: HackDbg,
}

/// Assemble the lines of one program. Every line is looked at even after an
/// error, so a failed assembly reports all of its errors at once.
///
/// # Errors
///
/// If any line can't be assembled, or no instructions are left once comments,
/// blank lines and labels are removed.
pub fn assemble<S: AsRef<str>>(name: &str, lines: &[S]) -> Result<Assembly, AssemblyErrors> {
    let lines = normalize(lines);
    debug!("{} lines after normalizing", lines.len());

    let mut pass_one = FirstPass::resolve_labels(lines);
    if pass_one.statements.is_empty() {
        pass_one.errors.insert(0, AsmError::program(ErrorKind::EmptyInput));
        return Err(AssemblyErrors(pass_one.errors));
    }

    let pass_two = pass_two(pass_one);
    let mut errors = pass_two.errors;

    let mut words = Vec::with_capacity(pass_two.lines.len());
    let mut debug = HackDbg::new(name);

    for (address, line) in pass_two.lines.iter().enumerate() {
        match encode_line(line) {
            Ok((op, word)) => {
                debug!("{:>5} {} {}", address, word.as_binary(), op);
                debug.add_line(address as u64, line.text.clone(), line.line_no);
                words.push(word);
            }
            Err(e) => errors.push(e),
        }
    }

    if !errors.is_empty() {
        errors.sort_by_key(|e| e.line_no);
        return Err(AssemblyErrors(errors));
    }

    for (label, address) in pass_two.symbols.labels() {
        debug.add_label(label.to_owned(), address);
    }
    for (variable, address) in pass_two.symbols.variables() {
        debug.add_variable(variable.to_owned(), address);
    }

    debug!("{} words", words.len());

    Ok(Assembly { words, debug })
}

/// Assemble the lines of one program into binary text lines.
///
/// # Errors
///
/// See [`assemble`].
pub fn assemble_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, AssemblyErrors> {
    Ok(assemble("", lines)?
        .words
        .iter()
        .map(WordExt::as_binary)
        .collect())
}

/// Assemble a Hack program from text.
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<String> {
    Ok(assemble_with_debug(program_text, "")?.0)
}

pub fn assemble_with_debug(program_text: &str, name: &str) -> Result<(String, String)> {
    let lines = program_text.lines().collect::<Vec<_>>();
    let assembly = assemble(name, &lines)?;

    let mut assembled = String::new();

    for word in &assembly.words {
        writeln!(&mut assembled, "{}", word.as_binary())?;
    }

    Ok((assembled, assembly.debug.to_string()?))
}

#[cfg(test)]
mod tests {
    use libhack::Field;

    use super::*;

    fn kinds(program: &str) -> Vec<ErrorKind> {
        let lines = program.lines().collect::<Vec<_>>();
        assemble_lines(&lines)
            .unwrap_err()
            .0
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn predefined_symbols() -> Result<()> {
        let words = assemble_lines(&["@SCREEN", "@KBD", "@R0", "@SP", "@THAT", "@R15"])?;

        assert_eq!(
            words,
            vec![
                "0100000000000000",
                "0110000000000000",
                "0000000000000000",
                "0000000000000000",
                "0000000000000100",
                "0000000000001111",
            ]
        );

        Ok(())
    }

    #[test]
    fn variables_in_order_of_use() -> Result<()> {
        let words = assemble_lines(&["@foo", "@bar", "D=A", "@foo", "@baz"])?;

        assert_eq!(words[0], "0000000000010000");
        assert_eq!(words[1], "0000000000010001");
        assert_eq!(words[3], "0000000000010000");
        assert_eq!(words[4], "0000000000010010");

        Ok(())
    }

    #[test]
    fn label_is_index_of_next_instruction() -> Result<()> {
        let program = "// header\n@2\n(SKIP)\nD=A\n\n(LOOP)\n@LOOP\n0;JMP\n@SKIP\n";
        let text = assemble_program(program)?;

        assert_eq!(
            text,
            "0000000000000010\n\
             1110110000010000\n\
             0000000000000010\n\
             1110101010000111\n\
             0000000000000001\n"
        );

        Ok(())
    }

    #[test]
    fn only_comments_is_empty() {
        assert_eq!(kinds("// nothing\n\n   // here\n"), vec![ErrorKind::EmptyInput]);
        assert_eq!(kinds(""), vec![ErrorKind::EmptyInput]);
        assert_eq!(kinds("(ONLY)\n(LABELS)\n"), vec![ErrorKind::EmptyInput]);
    }

    #[test]
    fn errors_collected_in_line_order() {
        let program = "@32768\nD\n(L)\nD=D*A\n(L)\n@ok\n0;JXX\n";

        assert_eq!(
            kinds(program),
            vec![
                ErrorKind::ValueOutOfRange(32768),
                ErrorKind::MalformedInstruction("D".into()),
                ErrorKind::UnknownMnemonic {
                    field: Field::Comp,
                    mnemonic: "D*A".into()
                },
                ErrorKind::DuplicateLabelDeclaration {
                    label: "L".into(),
                    first_line: 3
                },
                ErrorKind::UnknownMnemonic {
                    field: Field::Jump,
                    mnemonic: "JXX".into()
                },
            ]
        );
    }

    #[test]
    fn compute_takes_one_separator() {
        assert_eq!(
            kinds("@5\nD=M;JGT\nnull=D\n"),
            vec![
                ErrorKind::MalformedInstruction("D=M;JGT".into()),
                ErrorKind::UnknownMnemonic {
                    field: Field::Dest,
                    mnemonic: "null".into()
                },
            ]
        );
    }

    #[test]
    fn failed_program_has_no_output() {
        let err = assemble_program("@1\nD=A\n@99999\n").unwrap_err();
        let errors = err.downcast_ref::<AssemblyErrors>().expect("assembly errors");

        assert_eq!(errors.0, vec![AsmError::at(3, ErrorKind::ValueOutOfRange(99999))]);
    }

    #[test]
    fn debug_info() -> Result<()> {
        let (_, dbg) = assemble_with_debug("(TOP)\n@x\n// skip\nM=0\n@TOP\n0;JMP\n", "Loop")?;
        let dbg = HackDbg::from_string(&dbg)?;

        assert_eq!(dbg.name, "Loop");
        assert_eq!(dbg.lines.len(), 4);
        assert_eq!(dbg.labels.get("TOP"), Some(&0));
        assert_eq!(dbg.variables.get("x"), Some(&16));

        let line = dbg.line_for_address(2).expect("line at 2");
        assert_eq!(line.text, "@TOP");
        assert_eq!(line.line_no, 5);

        Ok(())
    }

    #[test]
    fn independent_runs() -> Result<()> {
        let first = assemble_lines(&["@a", "@b"])?;
        let second = assemble_lines(&["@b", "@a"])?;

        assert_eq!(first, second);

        Ok(())
    }
}
