//! Symbol frequency analysis
//!
//! Counts every distinct code point of a text, keeping the order in which
//! symbols first appear. That order is the tie-break input for tree building.

use crate::error::{CodecError, Result};
use indexmap::IndexMap;

/// Occurrence counts keyed by symbol, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<char, u64>,
}

impl FrequencyTable {
    /// Scan `text` once and count each symbol.
    pub fn from_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        let mut counts = IndexMap::new();
        for symbol in text.chars() {
            *counts.entry(symbol).or_insert(0u64) += 1;
        }
        Ok(Self { counts })
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Shannon entropy in bits per symbol.
    pub fn entropy_bits(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let len = total as f64;
        let mut entropy = 0.0;
        for &count in self.counts.values() {
            let p = count as f64 / len;
            entropy -= p * p.log2();
        }
        entropy
    }
}
