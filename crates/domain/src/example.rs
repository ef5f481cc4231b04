//! Recorded example types
//!
//! The test-execution framework emits one [`Example`] per documented
//! scenario; each example carries the HTTP exchanges captured while the
//! scenario ran. These types mirror that contract and do nothing else —
//! grouping and rendering live in the writer crates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full set of examples captured during one test run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleIndex {
    /// All recorded examples, in execution order.
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl ExampleIndex {
    /// Creates an index from a list of examples.
    #[must_use]
    pub const fn new(examples: Vec<Example>) -> Self {
        Self { examples }
    }
}

/// One documented scenario, possibly spanning several HTTP exchanges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Grouping label, e.g. a resource or controller name ("Users").
    pub resource_name: String,
    /// Short human-readable label ("Creating a user").
    pub description: String,
    /// Metadata captured alongside the scenario.
    pub metadata: ExampleMetadata,
}

impl Example {
    /// The interactions recorded for this example.
    ///
    /// This is the single canonical accessor: folder grouping and
    /// request building both walk this list, so the two traversals
    /// cannot disagree about which interactions an example owns.
    #[must_use]
    pub fn interactions(&self) -> &[RecordedInteraction] {
        &self.metadata.requests
    }
}

/// Scenario metadata supplied by the test framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleMetadata {
    /// Fully qualified label ("Users POST /users Creating a user").
    pub full_description: String,
    /// The captured HTTP exchanges, in execution order.
    #[serde(default)]
    pub requests: Vec<RecordedInteraction>,
}

/// One captured HTTP request/response pair.
///
/// The response side is preserved verbatim but never consumed by the
/// exporters. The struct derives [`Hash`] so a whole interaction can be
/// fed to [`crate::id::derive_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordedInteraction {
    /// HTTP method as captured ("GET", "POST", ...).
    pub request_method: String,
    /// Request path, including any query string.
    pub request_path: String,
    /// Request headers. Insertion order is not meaningful in the
    /// capture format, so a sorted map keeps the value deterministic.
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,
    /// Query parameters, captured but not consumed by the exporters.
    #[serde(default)]
    pub request_query_parameters: BTreeMap<String, String>,
    /// Raw request body, absent for bodiless requests.
    #[serde(default)]
    pub request_body: Option<String>,
    /// Response status code.
    #[serde(default)]
    pub response_status: Option<u16>,
    /// Response status text ("OK", "Not Found").
    #[serde(default)]
    pub response_status_text: Option<String>,
    /// Response headers.
    #[serde(default)]
    pub response_headers: BTreeMap<String, String>,
    /// Raw response body.
    #[serde(default)]
    pub response_body: Option<String>,
}
