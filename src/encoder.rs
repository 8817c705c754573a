//! Text encoding
//!
//! Runs the full pipeline (frequency table, tree, code table) and maps each
//! symbol of the input through the resulting codes.

use crate::bits;
use crate::code_table::CodeTable;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Space saved relative to 8 bits per source symbol, as a percentage.
///
/// Held in exact hundredths of a percent, rounded half away from zero.
/// Serializes as the percentage number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct CompressionRatio(i64);

impl CompressionRatio {
    pub fn from_lengths(original_length: usize, encoded_length: usize) -> Self {
        let raw_bits = 8 * original_length as i128;
        if raw_bits == 0 {
            return Self(0);
        }
        // percent * 100 = 10000 * (raw - encoded) / raw
        let numerator = 10_000 * (raw_bits - encoded_length as i128);
        let magnitude = (2 * numerator.abs() + raw_bits) / (2 * raw_bits);
        Self((numerator.signum() * magnitude) as i64)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl From<f64> for CompressionRatio {
    fn from(percent: f64) -> Self {
        Self((percent * 100.0).round() as i64)
    }
}

impl From<CompressionRatio> for f64 {
    fn from(ratio: CompressionRatio) -> Self {
        ratio.percent()
    }
}

impl fmt::Display for CompressionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}%", abs / 100, abs % 100)
    }
}

/// Result of encoding one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedDocument {
    /// Symbol count of the source text.
    pub original_length: usize,
    /// Bit count of `bitstring`.
    pub encoded_length: usize,
    pub bitstring: String,
    pub code_table: CodeTable,
    /// Absent for one-symbol texts.
    pub compression_ratio: Option<CompressionRatio>,
}

impl EncodedDocument {
    /// The bitstring packed eight bits per byte.
    pub fn packed_bytes(&self) -> Result<Vec<u8>> {
        bits::pack(&self.bitstring)
    }

    pub fn packed_size(&self) -> usize {
        self.encoded_length.div_ceil(8)
    }
}

/// Encode `text`, honoring the size limit in `config`.
pub fn encode(text: &str, config: &CodecConfig) -> Result<EncodedDocument> {
    if text.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let original_length = text.chars().count();
    if original_length > config.max_input_size {
        return Err(CodecError::InputTooLarge {
            size: original_length,
            max: config.max_input_size,
        });
    }

    if original_length == 1 {
        let code_table = CodeTable::from_entries(text.chars().map(|symbol| (symbol, "0")))?;
        return Ok(EncodedDocument {
            original_length,
            encoded_length: 1,
            bitstring: "0".to_string(),
            code_table,
            compression_ratio: None,
        });
    }

    let frequencies = FrequencyTable::from_text(text)?;
    let root = HuffNode::build(&frequencies).ok_or(CodecError::EmptyInput)?;
    let code_table = CodeTable::from_tree(&root);

    let mut bitstring = String::new();
    for symbol in text.chars() {
        let code = code_table.get(symbol).ok_or_else(|| {
            CodecError::InvalidCodeMap(format!("no code generated for {symbol:?}"))
        })?;
        bitstring.push_str(code);
    }
    let encoded_length = bitstring.len();

    tracing::debug!(
        original_length,
        encoded_length,
        distinct_symbols = code_table.len(),
        tree_depth = root.depth(),
        "encoded text"
    );

    Ok(EncodedDocument {
        original_length,
        encoded_length,
        bitstring,
        code_table,
        compression_ratio: Some(CompressionRatio::from_lengths(original_length, encoded_length)),
    })
}
