//! Postman Collection v1 Type Definitions
//!
//! These types represent the legacy collection import format understood
//! by Postman's "import collection v1" path: a flat list of folders and
//! a flat list of requests, cross-referenced by derived keys. Fields
//! the recorder cannot populate are emitted as fixed placeholders so
//! the document always carries the full key set the importer expects.

use std::collections::BTreeMap;

use serde::Serialize;

/// Root structure of the exported collection document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostmanCollection {
    /// Freshly generated random id; not stable across renders.
    pub id: String,
    /// Display name, taken from the configured API name.
    pub name: String,
    /// Placeholder, always empty.
    pub description: String,
    /// Placeholder, always empty.
    pub order: Vec<String>,
    /// One folder per distinct resource name, in first-occurrence order.
    pub folders: Vec<PostmanFolder>,
    /// Render time, unix seconds.
    pub timestamp: i64,
    /// Placeholder, always empty.
    pub owner: String,
    /// Placeholder, always empty.
    pub remote_link: String,
    /// Placeholder, always false.
    pub public: bool,
    /// Every recorded interaction, flattened across all examples.
    pub requests: Vec<PostmanRequest>,
}

/// A folder grouping the requests of one resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostmanFolder {
    /// Derived key of the resource name; requests point back at it
    /// through their `folder` field.
    pub id: String,
    /// Resource name verbatim.
    pub name: String,
    /// Placeholder, always empty.
    pub description: String,
    /// Derived keys of the interactions attributed to this folder.
    pub order: Vec<String>,
    /// Placeholder, always empty.
    pub owner: String,
    /// Placeholder, always empty.
    pub collection_id: String,
}

/// One replayable request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostmanRequest {
    /// Derived key of the example's full description.
    pub id: String,
    /// Header block, one `Name: value` line per header.
    pub headers: String,
    /// Absolute URL the importer replays against.
    pub url: String,
    /// Placeholder, always empty.
    pub path_variables: BTreeMap<String, String>,
    /// Placeholder, always empty.
    pub pre_request_script: String,
    /// HTTP method as captured.
    pub method: String,
    /// The id of the collection this document was rendered into.
    pub collection_id: String,
    /// Placeholder, always empty.
    pub data: Vec<serde_json::Value>,
    /// Fixed to `raw`; the recorder only captures raw bodies.
    pub data_mode: String,
    /// Short example description.
    pub name: String,
    /// Full example description.
    pub description: String,
    /// Fixed to `html`.
    pub description_format: String,
    /// Render time, unix seconds.
    pub time: i64,
    /// Fixed schema version marker.
    pub version: u32,
    /// Placeholder, always empty.
    pub responses: Vec<serde_json::Value>,
    /// Placeholder, always empty.
    pub tests: String,
    /// Fixed to `normal`.
    pub current_helper: String,
    /// Placeholder, always empty.
    pub helper_attributes: BTreeMap<String, String>,
    /// Derived key of the owning example's resource name; matches the
    /// `id` of the folder built for that resource.
    pub folder: String,
    /// Raw request body, `null` for bodiless requests.
    pub raw_mode_data: Option<String>,
}
