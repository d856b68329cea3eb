//! Data models for icon metadata and the emitted catalog.
//!
//! This module contains the core data structures shared by the catalog builder
//! and the browsing core. Models are independent of I/O and presentation.

pub mod catalog;
pub mod metadata;
pub mod record;
pub mod version;
pub mod weight;

// Re-export all model types
pub use catalog::{Catalog, SchemaRevision};
pub use metadata::RawIconMetadataEntry;
pub use record::{IconRecord, VariantInfo, VersionMarker};
pub use version::{compare_versions, is_version_equal, VersionTag};
pub use weight::{IconStyle, IconWeight, VariantKey};
