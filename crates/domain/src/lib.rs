//! Apidoc Domain - Core types for recorded API examples
//!
//! This crate defines the domain model for the apidoc exporters: the
//! example index produced by a test run and the key-derivation scheme
//! used to cross-reference derived entities. All types here are pure
//! Rust with no I/O dependencies.

pub mod config;
pub mod example;
pub mod id;

pub use config::ExportConfiguration;
pub use example::{Example, ExampleIndex, ExampleMetadata, RecordedInteraction};
pub use id::derive_key;
