//! Static descriptor tables.
//!
//! [`enums`] holds the enumerations referenced as nested values, [`objects`]
//! holds one table per object family.

pub mod enums;
pub mod objects;

pub use objects::{
    FORMAT, PARAM_BUFFERS, PARAM_IO, PARAM_LATENCY, PARAM_META, PARAM_PORT_CONFIG,
    PARAM_PROCESS_LATENCY, PARAM_PROFILE, PARAM_ROUTE, PARAM_TAG, PROFILER, PROP_INFO, PROPS,
};
