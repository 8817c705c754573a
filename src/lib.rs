//! huffdoc: Huffman prefix-code codec for in-memory text.
//!
//! Pipeline:
//! - Frequency analysis in first-occurrence order
//! - Deterministic greedy tree construction
//! - Code table generation by depth-first walk
//! - Encode/decode between text and `0`/`1` bitstrings
//! - Canonical document rendering and parsing for storage
//!
//! Every operation is a pure function of its arguments. The free functions
//! use [`CodecConfig::default`]; [`HuffmanCodec`] carries a custom config.

pub mod bits;
pub mod code_table;
pub mod config;
pub mod decoder;
pub mod document;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod tree;

pub use crate::code_table::CodeTable;
pub use crate::config::CodecConfig;
pub use crate::document::ParsedDocument;
pub use crate::encoder::{CompressionRatio, EncodedDocument};
pub use crate::error::{CodecError, Result};
pub use crate::frequency::FrequencyTable;
pub use crate::tree::HuffNode;

/// Stateless codec service bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode text into a bitstring, code table, and size metrics
    pub fn encode(&self, text: &str) -> Result<EncodedDocument> {
        encoder::encode(text, &self.config).inspect_err(|err| {
            tracing::warn!(error = %err, "encode rejected input");
        })
    }

    /// Decode a bitstring with the code table it was produced with
    pub fn decode(&self, bitstring: &str, code_table: &CodeTable) -> Result<String> {
        decoder::decode(bitstring, code_table, &self.config).inspect_err(|err| {
            tracing::warn!(error = %err, bits = bitstring.len(), "decode failed");
        })
    }

    /// Render the canonical document text
    pub fn render(&self, doc: &EncodedDocument) -> String {
        document::render(doc)
    }

    /// Recover the code table and bitstring from rendered document text
    pub fn parse(&self, serialized: &str) -> Result<ParsedDocument> {
        document::parse(serialized).inspect_err(|err| {
            tracing::warn!(error = %err, "document parse failed");
        })
    }

    /// Parse rendered text and decode it in one step
    pub fn decode_document(&self, serialized: &str) -> Result<String> {
        let parsed = self.parse(serialized)?;
        self.decode(&parsed.bitstring, &parsed.code_table)
    }
}

pub fn encode(text: &str) -> Result<EncodedDocument> {
    HuffmanCodec::default().encode(text)
}

pub fn decode(bitstring: &str, code_table: &CodeTable) -> Result<String> {
    HuffmanCodec::default().decode(bitstring, code_table)
}

pub fn render(doc: &EncodedDocument) -> String {
    document::render(doc)
}

pub fn parse(serialized: &str) -> Result<ParsedDocument> {
    HuffmanCodec::default().parse(serialized)
}
