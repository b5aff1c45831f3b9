use indexmap::IndexMap;
use log::trace;

use crate::{
    constants::{predefined_symbol, FIRST_VARIABLE},
    error::ErrorKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub address: u64,
    pub line_no: usize,
}

/// User-defined symbols for one program. The predefined symbols live in a
/// shared static table and are consulted but never written.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    labels: IndexMap<String, Label>,
    variables: IndexMap<String, u64>,
    next_variable: u64,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
            variables: IndexMap::new(),
            next_variable: FIRST_VARIABLE,
        }
    }

    pub fn add_label(&mut self, name: &str, address: u64, line_no: usize) -> Result<(), ErrorKind> {
        if let Some(first) = self.labels.get(name) {
            return Err(ErrorKind::DuplicateLabelDeclaration {
                label: name.to_owned(),
                first_line: first.line_no,
            });
        }

        trace!("label ({}) = {}", name, address);
        self.labels.insert(name.to_owned(), Label { address, line_no });
        Ok(())
    }

    pub fn label(&self, name: &str) -> Option<u64> {
        self.labels.get(name).map(|l| l.address)
    }

    pub fn variable(&self, name: &str) -> Option<u64> {
        self.variables.get(name).copied()
    }

    /// Resolve an address-instruction operand: labels first, then the
    /// predefined symbols, then decimal literals, then variables. An unseen
    /// variable gets the next free RAM address.
    pub fn resolve(&mut self, symbol: &str) -> Result<u64, ErrorKind> {
        if let Some(address) = self.label(symbol) {
            return Ok(address);
        }

        if let Some(value) = predefined_symbol(symbol) {
            return Ok(value);
        }

        if !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit()) {
            // Only overflows with twenty-odd digits, which is out of range anyway
            return Ok(symbol.parse::<u64>().unwrap_or(u64::MAX));
        }

        if let Some(address) = self.variable(symbol) {
            return Ok(address);
        }

        self.allocate(symbol)
    }

    fn allocate(&mut self, symbol: &str) -> Result<u64, ErrorKind> {
        let address = self.next_variable;
        self.variables.insert(symbol.to_owned(), address);
        self.next_variable += 1;
        trace!("variable {} = {}", symbol, address);

        self.variable(symbol)
            .ok_or_else(|| ErrorKind::UnresolvedSymbol(symbol.to_owned()))
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.address))
    }

    /// Variables in allocation order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, u64)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
