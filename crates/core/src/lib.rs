#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Frontmatter-aware daily note transformer.
//!
//! The crate is organised leaf-first:
//! - [`frontmatter`] locates, edits and re-serializes the `---` metadata block
//! - [`sections`] upserts `###` sections in the note body
//! - [`daily`] generates the baseline daily note for a date
//! - [`fields`] turns a field map into frontmatter operations
//! - [`transform`] sequences all of the above

pub mod config;
pub mod daily;
pub mod fields;
pub mod frontmatter;
pub mod sections;
pub mod transform;

pub use transform::{
    SourceDocument, TransformError, TransformOutput, TransformReport, TransformRequest,
    transform, transform_at,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
