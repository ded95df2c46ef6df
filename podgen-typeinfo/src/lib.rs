//! # podgen typeinfo
//!
//! Read-only description of the SPA type hierarchy.
//!
//! This crate provides:
//! - The [`SpaType`] tag enumeration
//! - The [`TypeInfo`] descriptor and [`RootCategory`] grouping
//! - Static descriptor tables for every object family
//! - The base type registry used to name parent tags

pub mod registry;
pub mod tables;
pub mod types;

pub use registry::{SPA_TYPES, find_type};
pub use types::{NAME_SEPARATOR, RootCategory, SpaType, TypeInfo, short_name};
