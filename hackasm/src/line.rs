use crate::constants::line_regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `(NAME)`, holding the name between the parentheses.
    Label(String),
    /// `@operand`, holding the operand without the `@`.
    Address(String),
    /// `dest=comp;jump`, unparsed.
    Compute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub line_no: usize,
    pub text: String,
    pub kind: LineKind,
}

impl LineKind {
    fn classify(text: &str) -> Self {
        if let Some(label) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            LineKind::Label(label.to_owned())
        } else if let Some(operand) = text.strip_prefix('@') {
            LineKind::Address(operand.to_owned())
        } else {
            LineKind::Compute(text.to_owned())
        }
    }
}

/// Strip the comment and surrounding whitespace from a raw line. Returns
/// `None` when nothing is left.
pub fn strip(line: &str) -> Option<&str> {
    line_regex()
        .captures(line)
        .and_then(|cap| cap.name("body"))
        .map(|body| body.as_str())
        .filter(|body| !body.is_empty())
}

/// Drop comments and blank lines and classify what's left, keeping the
/// 1-based number of each line in the raw input.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> Vec<Line> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            strip(line.as_ref()).map(|text| Line {
                line_no: idx + 1,
                text: text.to_owned(),
                kind: LineKind::classify(text),
            })
        })
        .collect()
}
