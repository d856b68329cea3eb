//! Icon name and variant resolution for renderers.
//!
//! - [`registry`]: memoising `(name, weight, duotone)` resolution with a
//!   placeholder fallback
//! - [`snippets`]: import names, code snippets and SVG export naming

pub mod registry;
pub mod snippets;

pub use registry::{
    placeholder_svg, CatalogLookup, Glyph, IconResolver, LegacyVariant, VariantLookup,
};
pub use snippets::{svg_filename, svg_id, CodeSnippets, IconNames};
