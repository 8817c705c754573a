//! Bitstring decoding against a code table

use crate::code_table::CodeTable;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use std::collections::HashMap;

/// Decode `bitstring` by matching accumulated bits against the inverse of
/// `code_table`.
pub fn decode(bitstring: &str, code_table: &CodeTable, config: &CodecConfig) -> Result<String> {
    if code_table.is_empty() {
        return Err(CodecError::InvalidCodeMap("code table is empty".into()));
    }
    if bitstring.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    if config.verify_prefix_free && !code_table.is_prefix_free() {
        return Err(CodecError::InvalidCodeMap("code table is not prefix-free".into()));
    }

    // later entries win on duplicate codes
    let inverse: HashMap<&str, char> = code_table.iter().map(|(symbol, code)| (code, symbol)).collect();

    let mut output = String::new();
    let mut pending = String::new();
    for (position, found) in bitstring.chars().enumerate() {
        if found != '0' && found != '1' {
            return Err(CodecError::InvalidBit { position, found });
        }
        pending.push(found);
        if let Some(&symbol) = inverse.get(pending.as_str()) {
            output.push(symbol);
            pending.clear();
        }
    }

    if !pending.is_empty() {
        return Err(CodecError::InvalidStream {
            consumed: bitstring.len(),
            pending,
        });
    }

    tracing::debug!(
        bits = bitstring.len(),
        decoded_length = output.chars().count(),
        "decoded bitstring"
    );
    Ok(output)
}
