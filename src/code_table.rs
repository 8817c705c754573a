//! Code table generation
//!
//! Walks a [`HuffNode`] tree depth-first and assigns each leaf the path that
//! reaches it: `0` for a left branch, `1` for a right branch.

use crate::error::{CodecError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Symbol to bitstring mapping, in the order entries were added.
///
/// Serializes as a JSON object keyed by the symbol as a one-character string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct CodeTable {
    codes: IndexMap<char, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tree(root: &HuffNode) -> Self {
        let mut table = Self::new();
        match root {
            // a lone leaf has an empty path; it gets "0" by convention
            HuffNode::Leaf { symbol, .. } => {
                table.codes.insert(*symbol, "0".to_string());
            }
            HuffNode::Internal { .. } => table.collect(root, String::new()),
        }
        table
    }

    fn collect(&mut self, node: &HuffNode, prefix: String) {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                self.codes.insert(*symbol, prefix);
            }
            HuffNode::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                self.collect(left, left_prefix);
                let mut right_prefix = prefix;
                right_prefix.push('1');
                self.collect(right, right_prefix);
            }
        }
    }

    /// Build a table from hand-written entries; every code must be a
    /// non-empty run of `0`/`1`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (symbol, code) in entries {
            table.insert(symbol, code)?;
        }
        Ok(table)
    }

    /// Add or replace the code for `symbol`, returning the previous code.
    pub fn insert(&mut self, symbol: char, code: impl Into<String>) -> Result<Option<String>> {
        let code = code.into();
        validate_code(symbol, &code)?;
        Ok(self.codes.insert(symbol, code))
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Entries ordered by ascending code length; equal lengths keep table order.
    pub fn by_code_length(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(_, code)| code.len());
        entries
    }

    /// True when no code is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        // after sorting, any prefix sits directly before one of its extensions
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Expected bits per symbol when coding text with the given frequencies.
    pub fn average_code_length(&self, frequencies: &FrequencyTable) -> f64 {
        let total = frequencies.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: u64 = frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum();
        weighted as f64 / total as f64
    }
}

fn validate_code(symbol: char, code: &str) -> Result<()> {
    if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CodecError::InvalidCodeMap(format!(
            "code {code:?} for {symbol:?} is not a non-empty bitstring"
        )));
    }
    Ok(())
}

impl TryFrom<IndexMap<String, String>> for CodeTable {
    type Error = CodecError;

    fn try_from(raw: IndexMap<String, String>) -> Result<Self> {
        let mut table = Self::new();
        for (key, code) in raw {
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbol,
                _ => {
                    return Err(CodecError::InvalidCodeMap(format!(
                        "key {key:?} is not a single symbol"
                    )))
                }
            };
            table.insert(symbol, code)?;
        }
        Ok(table)
    }
}

impl From<CodeTable> for IndexMap<String, String> {
    fn from(table: CodeTable) -> Self {
        table
            .codes
            .into_iter()
            .map(|(symbol, code)| (symbol.to_string(), code))
            .collect()
    }
}
