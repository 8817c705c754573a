//! Configuration for huffdoc

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Upper bound on the number of symbols `encode` accepts.
    pub max_input_size: usize,
    /// Reject code tables that are not prefix-free before decoding.
    pub verify_prefix_free: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_input_size: 10 * 1024 * 1024, // 10M symbols
            verify_prefix_free: false,
        }
    }
}
