//! Build-time catalog generation.
//!
//! Turns the vendor package's per-variant metadata into one record per
//! logical icon: entries are cross-checked against the package exports,
//! deprecated aliases are dropped, variants are grouped by a normalised name,
//! and icons introduced or modified in the current release are tagged.

pub mod builder;
pub mod exports;
pub mod grouping;
pub mod report;

pub use builder::{CatalogBuild, CatalogBuilder};
pub use exports::ExportTable;
pub use grouping::NameNormalizer;
pub use report::BuildReport;
