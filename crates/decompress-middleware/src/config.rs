//! Configuration for the decompression middleware

use serde::{Deserialize, Serialize};

/// Decompression configuration
///
/// Currently carries no tunable fields; the struct exists so the middleware
/// keeps the same construction shape as every other gateway middleware and
/// so fields can be added without breaking host configuration files.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecompressConfig {}

impl DecompressConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {}
    }
}
