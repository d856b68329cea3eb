//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default project-relative paths.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Iconshelf";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "iconshelf";

/// Project configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "iconshelf.toml";

/// File name of the emitted catalog inside every output location.
pub const CATALOG_FILE_NAME: &str = "icons.json";

/// File name of the version marker written next to the canonical catalog.
pub const VERSION_FILE_NAME: &str = "version.json";

/// Placeholder used for versions that could not be determined.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Tag added to icons with a variant introduced in the current package version.
pub const NEW_TAG: &str = "*new*";

/// Tag added to icons modified (but not introduced) in the current package version.
pub const UPDATED_TAG: &str = "*updated*";

/// Default vendor icon package.
pub const DEFAULT_PACKAGE_NAME: &str = "stera-icons";
