//! Service layer for file-system collaborators.
//!
//! This module contains the services that sit between the pure catalog and
//! browsing logic and the project on disk: reading the vendor package,
//! publishing the catalog, and loading it back.

pub mod loader;
pub mod package;
pub mod publisher;

// Re-export commonly used types and functions
pub use loader::{load_catalog, CatalogState};
pub use package::{VendorPackage, VersionSource};
pub use publisher::{CatalogPublisher, MirrorCheck, MirrorStatus, PublishReport};
