//! Frontmatter parsing, modification, and serialization.
//!
//! Frontmatter is modelled as a flat list of raw lines rather than a YAML map,
//! so keys this crate has no schema for keep their exact formatting. This
//! module provides functionality to:
//! - Parse the leading `---` block out of a markdown document
//! - Set flat `key: value` fields and extend block lists
//! - Serialize documents back to markdown with normalized spacing

pub mod modifier;
pub mod parser;
pub mod serializer;
pub mod types;

pub use modifier::{append_list_item, apply_ops, set_field};
pub use parser::parse;
pub use serializer::{render_block, serialize};
pub use types::{
    FrontmatterBlock, FrontmatterEntry, FrontmatterOp, FrontmatterOpType, ParsedDocument,
};
