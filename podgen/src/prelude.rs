//! Prelude module for convenient imports.
//!
//! ```
//! use podgen::prelude::*;
//! ```

// Type info
pub use podgen_typeinfo::{RootCategory, SpaType, TypeInfo};

// Generation
pub use podgen_codegen::{
    Accessor, AccessorCall, CodegenError, Generator, GeneratorConfig, OBJECT_CATEGORIES,
    OutputMode, ParentKind, classify, derive_identifier, select_categories,
};
