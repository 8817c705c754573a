//! Canonical text form of an encoded document
//!
//! The rendered document carries a human-readable code listing for display
//! and a JSON code map that is the only block `parse` reads back.

use crate::code_table::CodeTable;
use crate::config::CodecConfig;
use crate::decoder;
use crate::encoder::EncodedDocument;
use crate::error::{CodecError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TITLE_MARKER: &str = "=== HUFFMAN ENCODED DATA ===";
pub const CODE_LISTING_MARKER: &str = "--- Code Map ---";
pub const BINARY_MARKER: &str = "--- Encoded Binary ---";
pub const CODE_MAP_MARKER: &str = "--- Code Map (JSON) ---";

/// Code table and bitstring recovered from a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub code_table: CodeTable,
    pub bitstring: String,
}

impl ParsedDocument {
    pub fn decode(&self) -> Result<String> {
        decoder::decode(&self.bitstring, &self.code_table, &CodecConfig::default())
    }
}

pub fn render(doc: &EncodedDocument) -> String {
    let ratio = doc
        .compression_ratio
        .map(|ratio| ratio.to_string())
        .unwrap_or_else(|| "n/a".to_string());

    let mut output = format!("{TITLE_MARKER}\n\n");
    output.push_str(&format!("Original Length: {} characters\n", doc.original_length));
    output.push_str(&format!("Encoded Length: {} bits\n", doc.encoded_length));
    output.push_str(&format!("Compression Ratio: {ratio}\n\n"));

    output.push_str(CODE_LISTING_MARKER);
    output.push('\n');
    for (symbol, code) in doc.code_table.by_code_length() {
        output.push_str(&format!("'{}' : {code}\n", display_symbol(symbol)));
    }

    output.push('\n');
    output.push_str(BINARY_MARKER);
    output.push('\n');
    output.push_str(&doc.bitstring);
    output.push_str("\n\n");

    output.push_str(CODE_MAP_MARKER);
    output.push('\n');
    // same conversion the table's Serialize impl goes through
    let codes = Value::from_iter(IndexMap::<String, String>::from(doc.code_table.clone()));
    output.push_str(&format!("{codes:#}"));
    output
}

fn display_symbol(symbol: char) -> String {
    match symbol {
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        ' ' => "SPACE".to_string(),
        other => other.to_string(),
    }
}

pub fn parse(serialized: &str) -> Result<ParsedDocument> {
    let code_map_block = block_after(serialized, CODE_MAP_MARKER)
        .ok_or_else(|| CodecError::Parse("code map not found".into()))?;
    let json = match code_map_block.find("\n\n") {
        Some(end) => &code_map_block[..end],
        None => code_map_block,
    };
    let code_table: CodeTable =
        serde_json::from_str(json.trim()).map_err(|e| CodecError::Parse(e.to_string()))?;
    if code_table.is_empty() {
        return Err(CodecError::InvalidCodeMap("code map is empty".into()));
    }

    let binary_block = block_after(serialized, BINARY_MARKER)
        .ok_or_else(|| CodecError::Parse("encoded binary not found".into()))?;
    let bit_count = binary_block
        .bytes()
        .take_while(|b| *b == b'0' || *b == b'1')
        .count();
    if bit_count == 0 {
        return Err(CodecError::Parse("encoded binary not found".into()));
    }

    Ok(ParsedDocument {
        code_table,
        bitstring: binary_block[..bit_count].to_string(),
    })
}

/// Text following `marker` and the whitespace after it, which must include a
/// line break.
fn block_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    let rest = &text[start..];
    let body = rest.trim_start();
    let skipped = &rest[..rest.len() - body.len()];
    skipped.contains('\n').then_some(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder;

    fn encode(text: &str) -> EncodedDocument {
        encoder::encode(text, &CodecConfig::default()).unwrap()
    }

    #[test]
    fn test_render_layout() {
        let rendered = render(&encode("aab"));
        let expected = "\
=== HUFFMAN ENCODED DATA ===

Original Length: 3 characters
Encoded Length: 3 bits
Compression Ratio: 87.50%

--- Code Map ---
'b' : 0
'a' : 1

--- Encoded Binary ---
110

--- Code Map (JSON) ---
{
  \"b\": \"0\",
  \"a\": \"1\"
}";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_code_map_block_matches_serialized_table() {
        let doc = encode("a b\tc\n\u{1F980}\"quoted\"");
        let rendered = render(&doc);
        let block = rendered.split(CODE_MAP_MARKER).nth(1).unwrap();
        assert_eq!(block.trim(), serde_json::to_string_pretty(&doc.code_table).unwrap());
    }

    #[test]
    fn test_render_escapes_display_symbols() {
        let rendered = render(&encode("a b\tc\n"));
        assert!(rendered.contains("'SPACE' : "));
        assert!(rendered.contains("'\\t' : "));
        assert!(rendered.contains("'\\n' : "));
        // the JSON block keeps the real symbols, JSON-escaped
        assert!(rendered.contains("\" \": "));
        assert!(rendered.contains("\"\\n\": "));
    }

    #[test]
    fn test_render_single_symbol() {
        let rendered = render(&encode("x"));
        assert!(rendered.contains("Compression Ratio: n/a\n"));
        assert!(rendered.contains("'x' : 0\n"));
    }

    #[test]
    fn test_listing_sorted_by_code_length() {
        let rendered = render(&encode("aabbc"));
        let listing = rendered
            .split(CODE_LISTING_MARKER)
            .nth(1)
            .and_then(|rest| rest.split(BINARY_MARKER).next())
            .unwrap();
        assert_eq!(listing.trim(), "'b' : 0\n'c' : 10\n'a' : 11");
    }

    #[test]
    fn test_parse_rendered() {
        let doc = encode("hello, huffman\n\tworld");
        let parsed = parse(&render(&doc)).unwrap();
        assert_eq!(parsed.code_table, doc.code_table);
        assert_eq!(parsed.bitstring, doc.bitstring);
        assert_eq!(parsed.decode().unwrap(), "hello, huffman\n\tworld");
    }

    #[test]
    fn test_parse_ignores_trailing_paragraph() {
        let mut text = render(&encode("abcabd"));
        text.push_str("\n\nnotes appended by the editor");
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn test_parse_missing_code_map() {
        let text = "--- Encoded Binary ---\n0101\n";
        assert!(matches!(parse(text), Err(CodecError::Parse(msg)) if msg == "code map not found"));
    }

    #[test]
    fn test_parse_missing_binary() {
        let text = "--- Code Map (JSON) ---\n{\"a\": \"0\"}";
        assert!(matches!(parse(text), Err(CodecError::Parse(msg)) if msg == "encoded binary not found"));

        let text = "--- Encoded Binary ---\n\n--- Code Map (JSON) ---\n{\"a\": \"0\"}";
        assert!(matches!(parse(text), Err(CodecError::Parse(msg)) if msg == "encoded binary not found"));
    }

    #[test]
    fn test_parse_malformed_json() {
        let text = "--- Encoded Binary ---\n01\n\n--- Code Map (JSON) ---\n{\"a\": \"0\",";
        assert!(matches!(parse(text), Err(CodecError::Parse(_))));

        let text = "--- Encoded Binary ---\n01\n\n--- Code Map (JSON) ---\n[\"0\", \"1\"]";
        assert!(matches!(parse(text), Err(CodecError::Parse(_))));
    }

    #[test]
    fn test_parse_empty_code_map() {
        let text = "--- Encoded Binary ---\n01\n\n--- Code Map (JSON) ---\n{}";
        assert!(matches!(parse(text), Err(CodecError::InvalidCodeMap(_))));
    }

    #[test]
    fn test_marker_requires_line_break() {
        let text = "--- Encoded Binary --- 01\n\n--- Code Map (JSON) ---\n{\"a\": \"0\"}";
        assert!(matches!(parse(text), Err(CodecError::Parse(_))));
    }
}
