//! Iconshelf library
//!
//! Builds a searchable catalog of logical icons from a vendor icon package's
//! per-variant metadata, and provides the browsing side on top of it:
//! multi-word search, style filtering, and variant resolution with a
//! placeholder fallback.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod resolve;
pub mod search;
pub mod services;
