use std::collections::HashMap;

use serde::{Deserialize, Serialize};
pub use serde_json::Error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DbgLine {
    pub address: u64,
    pub text: String,
    pub line_no: usize,
}

/// Debug information for one assembled program: where every ROM word came
/// from, and what the assembler bound each symbol to.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HackDbg {
    pub name: String,
    pub lines: Vec<DbgLine>,
    pub address_map: HashMap<u64, usize>,
    pub labels: HashMap<String, u64>,
    pub variables: HashMap<String, u64>,
}

impl HackDbg {
    pub fn new(name: &str) -> Self {
        HackDbg {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn to_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_string(dbg: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(dbg)
    }

    pub fn add_label(&mut self, label: String, address: u64) {
        self.labels.insert(label, address);
    }

    pub fn add_variable(&mut self, variable: String, address: u64) {
        self.variables.insert(variable, address);
    }

    pub fn add_line(&mut self, address: u64, text: String, line_no: usize) {
        self.lines.push(DbgLine {
            address,
            text,
            line_no,
        });
        self.address_map.insert(address, self.lines.len() - 1);
    }

    pub fn line_for_address(&self, address: u64) -> Option<&DbgLine> {
        self.address_map
            .get(&address)
            .and_then(|idx| self.lines.get(*idx))
    }
}
