//! Export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings the exporters consume.
///
/// Supplied by the embedding test framework; the core never reads it
/// from disk or the environment itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfiguration {
    /// Display name of the documented API, used as the collection name.
    pub api_name: String,
    /// Directory the rendered document is written into.
    pub docs_dir: PathBuf,
}

impl ExportConfiguration {
    /// Creates a configuration.
    #[must_use]
    pub fn new(api_name: impl Into<String>, docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_name: api_name.into(),
            docs_dir: docs_dir.into(),
        }
    }
}
