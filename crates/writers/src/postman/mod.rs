//! Postman collection writer.
//!
//! Turns an [`ExampleIndex`] into a Postman collection-v1 document:
//! one folder per distinct resource name, one request per recorded
//! interaction, cross-referenced through derived keys so neither side
//! needs to hold a pointer to the other. Rendering is pure; the file
//! write at the end is the only I/O.

mod types;

pub use types::{PostmanCollection, PostmanFolder, PostmanRequest};

use std::collections::BTreeMap;
use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

use apidoc_domain::{Example, ExampleIndex, ExportConfiguration, RecordedInteraction, derive_key};

use crate::clock::{Clock, SystemClock};
use crate::serialization::{self, SerializationError};

/// File name of the exported document inside the docs directory.
const COLLECTION_FILE: &str = "index.json.postman_collection";

/// Host prefix for replay URLs.
///
/// The capture format only records paths, so every URL is synthesized
/// against a local development host.
// TODO: source the host from ExportConfiguration once the recorder
// captures it.
const LOCAL_HOST: &str = "localhost:3000";

/// Error type for the Postman writer.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Rendering the document to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
    /// Writing the document to disk failed.
    #[error("failed to write collection file: {0}")]
    Io(#[from] std::io::Error),
}

/// Postman collection-v1 exporter.
pub struct PostmanExporter;

impl PostmanExporter {
    /// Renders the full collection document for an example index.
    ///
    /// A fresh random collection id is generated per call and
    /// propagated into every request's `collectionId`; everything else
    /// is a pure function of the input, so repeated renders of the
    /// same index differ only in `id`, `timestamp` and `time`.
    #[must_use]
    pub fn render(
        index: &ExampleIndex,
        config: &ExportConfiguration,
        clock: &dyn Clock,
    ) -> PostmanCollection {
        let collection_id = Uuid::new_v4().to_string();

        let folders = Self::build_folders(index);

        let requests: Vec<PostmanRequest> = index
            .examples
            .iter()
            .flat_map(|example| {
                example
                    .interactions()
                    .iter()
                    .map(|interaction| {
                        Self::build_request(example, interaction, &collection_id, clock)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        PostmanCollection {
            id: collection_id,
            name: config.api_name.clone(),
            description: String::new(),
            order: Vec::new(),
            folders,
            timestamp: clock.now().timestamp(),
            owner: String::new(),
            remote_link: String::new(),
            public: false,
            requests,
        }
    }

    /// Builds one folder per distinct resource name.
    ///
    /// Groups keep the first-occurrence order of their resource name,
    /// so the folder list is stable for a fixed input order.
    fn build_folders(index: &ExampleIndex) -> Vec<PostmanFolder> {
        let mut groups: IndexMap<&str, Vec<&RecordedInteraction>> = IndexMap::new();
        for example in &index.examples {
            groups
                .entry(example.resource_name.as_str())
                .or_default()
                .extend(example.interactions());
        }

        groups
            .into_iter()
            .map(|(resource_name, interactions)| Self::build_folder(resource_name, &interactions))
            .collect()
    }

    fn build_folder(resource_name: &str, interactions: &[&RecordedInteraction]) -> PostmanFolder {
        PostmanFolder {
            id: derive_key(resource_name),
            name: resource_name.to_string(),
            description: String::new(),
            // Keys of the interaction values themselves, not of the
            // request objects built from them.
            order: interactions
                .iter()
                .map(|interaction| derive_key(*interaction))
                .collect(),
            owner: String::new(),
            collection_id: String::new(),
        }
    }

    fn build_request(
        example: &Example,
        interaction: &RecordedInteraction,
        collection_id: &str,
        clock: &dyn Clock,
    ) -> PostmanRequest {
        PostmanRequest {
            id: derive_key(example.metadata.full_description.as_str()),
            headers: Self::stringify_headers(&interaction.request_headers),
            url: format!("{LOCAL_HOST}{}", interaction.request_path),
            path_variables: BTreeMap::new(),
            pre_request_script: String::new(),
            method: interaction.request_method.clone(),
            collection_id: collection_id.to_string(),
            data: Vec::new(),
            data_mode: "raw".to_string(),
            name: example.description.clone(),
            description: example.metadata.full_description.clone(),
            description_format: "html".to_string(),
            time: clock.now().timestamp(),
            version: 2,
            responses: Vec::new(),
            tests: String::new(),
            current_helper: "normal".to_string(),
            helper_attributes: BTreeMap::new(),
            folder: derive_key(example.resource_name.as_str()),
            raw_mode_data: interaction.request_body.clone(),
        }
    }

    /// Flattens a header map into a `Name: value` block, one line per
    /// header, without a trailing newline. An empty map yields an
    /// empty string.
    fn stringify_headers(headers: &BTreeMap<String, String>) -> String {
        headers
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders an example index and writes it to the configured docs
/// directory.
pub struct PostmanWriter {
    config: ExportConfiguration,
}

impl PostmanWriter {
    /// Creates a writer for the given configuration.
    #[must_use]
    pub const fn new(config: ExportConfiguration) -> Self {
        Self { config }
    }

    /// Renders the index and writes `index.json.postman_collection`
    /// into the docs directory, overwriting any existing file.
    ///
    /// Returns the path of the written file. Nothing is written if
    /// rendering or serialization fails.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the docs directory
    /// is not writable.
    pub async fn write(&self, index: &ExampleIndex) -> Result<PathBuf, WriterError> {
        let document = PostmanExporter::render(index, &self.config, &SystemClock::new());
        let bytes = serialization::to_json_pretty_bytes(&document)?;

        let path = self.config.docs_dir.join(COLLECTION_FILE);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;
        Ok(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apidoc_domain::ExampleMetadata;
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2015, 10, 1, 12, 0, 0).unwrap())
    }

    fn interaction(method: &str, path: &str) -> RecordedInteraction {
        RecordedInteraction {
            request_method: method.to_string(),
            request_path: path.to_string(),
            ..RecordedInteraction::default()
        }
    }

    fn example(resource_name: &str, interactions: Vec<RecordedInteraction>) -> Example {
        Example {
            resource_name: resource_name.to_string(),
            description: "Listing greetings".to_string(),
            metadata: ExampleMetadata {
                full_description: format!("{resource_name} Listing greetings"),
                requests: interactions,
            },
        }
    }

    fn config() -> ExportConfiguration {
        ExportConfiguration::new("Greetings API", "/tmp/docs")
    }

    #[test]
    fn test_stringify_headers_empty_map() {
        assert_eq!(PostmanExporter::stringify_headers(&BTreeMap::new()), "");
    }

    #[test]
    fn test_stringify_headers_single_header() {
        let mut headers = BTreeMap::new();
        headers.insert("Header".to_string(), "value".to_string());

        assert_eq!(
            PostmanExporter::stringify_headers(&headers),
            "Header: value"
        );
    }

    #[test]
    fn test_stringify_headers_joins_with_newline() {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("Host".to_string(), "example.org".to_string());

        assert_eq!(
            PostmanExporter::stringify_headers(&headers),
            "Accept: application/json\nHost: example.org"
        );
    }

    #[test]
    fn test_folder_id_matches_request_folder_reference() {
        let index = ExampleIndex::new(vec![example(
            "Greetings",
            vec![interaction("GET", "/greetings")],
        )]);

        let document = PostmanExporter::render(&index, &config(), &fixed_clock());

        assert_eq!(document.folders.len(), 1);
        assert_eq!(document.requests.len(), 1);
        assert_eq!(document.folders[0].id, document.requests[0].folder);
        assert_eq!(document.folders[0].id, derive_key("Greetings"));
    }

    #[test]
    fn test_folders_keep_first_occurrence_order() {
        let index = ExampleIndex::new(vec![
            example("Orders", vec![interaction("GET", "/orders")]),
            example("Users", vec![interaction("GET", "/users")]),
            example("Orders", vec![interaction("POST", "/orders")]),
        ]);

        let document = PostmanExporter::render(&index, &config(), &fixed_clock());

        let names: Vec<&str> = document.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Orders", "Users"]);
        assert_eq!(document.folders[0].order.len(), 2);
        assert_eq!(document.folders[1].order.len(), 1);
    }

    #[test]
    fn test_collection_id_is_propagated_into_requests() {
        let index = ExampleIndex::new(vec![example(
            "Greetings",
            vec![interaction("GET", "/greetings"), interaction("POST", "/greetings")],
        )]);

        let document = PostmanExporter::render(&index, &config(), &fixed_clock());

        for request in &document.requests {
            assert_eq!(request.collection_id, document.id);
        }
    }

    #[test]
    fn test_render_uses_clock_for_timestamps() {
        let clock = fixed_clock();
        let expected = clock.now().timestamp();
        let index = ExampleIndex::new(vec![example(
            "Greetings",
            vec![interaction("GET", "/greetings")],
        )]);

        let document = PostmanExporter::render(&index, &config(), &clock);

        assert_eq!(document.timestamp, expected);
        assert_eq!(document.requests[0].time, expected);
    }

    #[test]
    fn test_request_url_is_prefixed_with_local_host() {
        let index = ExampleIndex::new(vec![example(
            "Greetings",
            vec![interaction("GET", "/greetings?page=1")],
        )]);

        let document = PostmanExporter::render(&index, &config(), &fixed_clock());

        assert_eq!(document.requests[0].url, "localhost:3000/greetings?page=1");
    }

    #[test]
    fn test_request_id_derives_from_full_description() {
        let index = ExampleIndex::new(vec![example(
            "Greetings",
            vec![interaction("GET", "/greetings")],
        )]);

        let document = PostmanExporter::render(&index, &config(), &fixed_clock());

        assert_eq!(
            document.requests[0].id,
            derive_key("Greetings Listing greetings")
        );
    }

    #[test]
    fn test_collection_ids_differ_between_renders() {
        let index = ExampleIndex::new(Vec::new());

        let first = PostmanExporter::render(&index, &config(), &fixed_clock());
        let second = PostmanExporter::render(&index, &config(), &fixed_clock());

        assert_ne!(first.id, second.id);
    }
}
