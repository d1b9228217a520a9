/// Heading level of the sections this crate upserts (`### Title`).
pub const SECTION_LEVEL: u8 = 3;

/// Heading that marks "the rest of the document"; new sections go above it.
pub const ANCHOR_HEADING: &str = "Today's Notes";
pub const ANCHOR_LEVEL: u8 = 2;

pub const ACCOMPLISHMENTS: &str = "Accomplishments";
pub const OBSTACLES: &str = "Obstacles";
pub const IMPROVEMENTS: &str = "Improvements";

/// Information about a heading found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    /// The heading text, without the `#` markers and surrounding whitespace
    pub title: String,
    /// The heading level (1-6)
    pub level: u8,
    /// Byte offset of the start of the heading line
    pub start: usize,
    /// Byte offset just past the heading line (after its newline)
    pub end: usize,
}

/// A heading to look for: exact title at an exact level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMatch {
    pub title: String,
    pub level: u8,
}

impl SectionMatch {
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        Self { title: title.into(), level }
    }

    pub fn matches(&self, heading: &HeadingInfo) -> bool {
        heading.level == self.level && heading.title == self.title
    }

    pub(crate) fn render(&self) -> String {
        format!("{} {}", "#".repeat(usize::from(self.level)), self.title)
    }
}

/// Byte range of a section: its heading line plus everything up to the next
/// heading of the same or higher level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    pub start: usize,
    pub end: usize,
}

/// What an upsert did to the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Content was absent or blank; body returned as-is
    Unchanged,
    /// An existing section was rewritten
    Replaced,
    /// A new section was placed above the anchor heading
    InsertedBeforeAnchor,
    /// A new section was added at the end of the body
    Appended,
}

/// Result of an upsert operation
#[derive(Debug, Clone)]
pub struct UpsertResult {
    /// The modified markdown content
    pub content: String,
    pub outcome: UpsertOutcome,
}
