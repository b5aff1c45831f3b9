use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use regex::Regex;

/// First RAM address handed out to variables. R0-R15 sit below it.
pub const FIRST_VARIABLE: u64 = 16;

pub const SCREEN: u64 = 0x40_00;
pub const KBD: u64 = 0x60_00;

// (name, alias, value)
static PREDEFINED_TABLE: &[(&str, Option<&str>, u64)] = &[
    ("R0", Some("SP"), 0),
    ("R1", Some("LCL"), 1),
    ("R2", Some("ARG"), 2),
    ("R3", Some("THIS"), 3),
    ("R4", Some("THAT"), 4),
    ("R5", None, 5),
    ("R6", None, 6),
    ("R7", None, 7),
    ("R8", None, 8),
    ("R9", None, 9),
    ("R10", None, 10),
    ("R11", None, 11),
    ("R12", None, 12),
    ("R13", None, 13),
    ("R14", None, 14),
    ("R15", None, 15),
    ("SCREEN", None, SCREEN),
    ("KBD", None, KBD),
];

pub static PREDEFINED: OnceCell<IndexMap<String, u64>> = OnceCell::new();
pub static LINE_REGEX: OnceCell<Regex> = OnceCell::new();
static LINE_REGEX_PATTERN: &str = r#"^\s*(?P<body>.*?)\s*(?://.*)?$"#;

/// All built-in symbols, aliases included, in declaration order.
pub fn predefined() -> &'static IndexMap<String, u64> {
    PREDEFINED.get_or_init(|| {
        PREDEFINED_TABLE
            .iter()
            .flat_map(|(name, alias, value)| {
                std::iter::once((name.to_string(), *value))
                    .chain(alias.map(|alias| (alias.to_owned(), *value)))
            })
            .collect()
    })
}

pub fn predefined_symbol(symbol: &str) -> Option<u64> {
    predefined().get(symbol).copied()
}

pub fn line_regex() -> &'static Regex {
    LINE_REGEX.get_or_init(|| Regex::new(LINE_REGEX_PATTERN).expect("Invalid line regex"))
}
