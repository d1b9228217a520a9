//! Heading-delimited section editing for note bodies.

pub mod bullets;
pub mod editor;
pub mod scanner;
pub mod types;

// Re-export primary API
pub use bullets::to_bullets;
pub use editor::SectionEditor;
pub use scanner::{find_headings, parse_heading};
pub use types::{
    ACCOMPLISHMENTS, ANCHOR_HEADING, ANCHOR_LEVEL, HeadingInfo, IMPROVEMENTS, OBSTACLES,
    SECTION_LEVEL, SectionBounds, SectionMatch, UpsertOutcome, UpsertResult,
};
