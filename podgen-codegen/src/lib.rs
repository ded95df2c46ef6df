//! # podgen codegen
//!
//! Rendering of the SPA type hierarchy into documents.
//!
//! This crate provides:
//! - Name conversion from namespaced type names to Rust identifiers
//! - Classification of parent tags into accessor shapes
//! - A JSON dump of the hierarchy
//! - Rust accessor source with one getter per descriptor

pub mod accessors;
pub mod classify;
pub mod error;
pub mod generator;
pub mod json;
pub mod naming;

pub use accessors::AccessorEmitter;
pub use classify::{Accessor, AccessorCall, ParentKind, classify};
pub use error::CodegenError;
pub use generator::{
    Generator, GeneratorConfig, OBJECT_CATEGORIES, OutputMode, select_categories,
};
pub use json::{JsonEmitter, JsonWriter};
pub use naming::derive_identifier;

/// Generates the JSON dump of all object categories.
///
/// # Returns
/// The JSON document as a string.
#[must_use]
pub fn generate_json() -> String {
    Generator::default().generate(OutputMode::Json)
}

/// Generates Rust accessors for all object categories.
///
/// # Returns
/// Generated Rust code as a string, with banner and preamble.
#[must_use]
pub fn generate_accessors() -> String {
    Generator::default().generate(OutputMode::Accessors)
}
