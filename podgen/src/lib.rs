//! # podgen
//!
//! Generator for SPA pod accessors and type-info dumps.
//!
//! podgen walks the SPA type hierarchy (object categories such as
//! `Spa:Pod:Object:Param:Props` and the enumerations they reference) and
//! renders it either as a JSON document or as Rust source with one typed
//! getter per object property.
//!
//! ## Quick Start
//!
//! ```
//! use podgen::prelude::*;
//!
//! let json = Generator::default().generate(OutputMode::Json);
//! assert!(json.starts_with('['));
//!
//! let config = GeneratorConfig::default().with_header(false);
//! let rust = Generator::default().with_config(config).generate(OutputMode::Accessors);
//! assert!(rust.contains("pub struct Props;"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`typeinfo`] - Type tags, descriptors and static tables
//! - [`codegen`] - Name conversion, classification and emitters

pub mod prelude;

/// Type tags, descriptors and static tables.
pub mod typeinfo {
    pub use podgen_typeinfo::*;
}

/// Document generation.
pub mod codegen {
    pub use podgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use podgen_codegen::{
    CodegenError, Generator, GeneratorConfig, OBJECT_CATEGORIES, OutputMode, generate_accessors,
    generate_json,
};
pub use podgen_typeinfo::{RootCategory, SpaType, TypeInfo};
