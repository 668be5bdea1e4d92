//! Turning rendered output into files, data URLs and clipboard payloads.

/// Batch export across several sizes.
pub mod batch;
pub(crate) mod encode;
/// Format selection and payload building.
pub mod gateway;
