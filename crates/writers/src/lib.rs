//! Apidoc Writers - Export recorded examples to client-importable formats
//!
//! Currently ships a single writer: the Postman collection-v1 exporter.
//! Rendering is a pure computation over an [`apidoc_domain::ExampleIndex`];
//! only the final file write touches the file system.

pub mod clock;
pub mod postman;
pub mod serialization;

pub use clock::{Clock, SystemClock};
pub use postman::{PostmanExporter, PostmanWriter, WriterError};
