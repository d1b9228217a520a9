//! Frontmatter types and data structures.

/// The raw lines of a `---` delimited frontmatter block.
///
/// Lines are kept verbatim (minus the line feed) so that keys the
/// transformer knows nothing about survive an edit byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterBlock {
    pub lines: Vec<String>,
}

impl FrontmatterBlock {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Iterate over the top-level `key: value` entries of the block.
    pub fn entries(&self) -> impl Iterator<Item = FrontmatterEntry<'_>> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| FrontmatterEntry::from_line(index, line))
    }

    /// Find the first top-level entry with the given key.
    pub fn entry(&self, key: &str) -> Option<FrontmatterEntry<'_>> {
        self.entries().find(|e| e.key == key)
    }

    /// Raw value of a top-level key, trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|e| e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index one past the last continuation line belonging to the entry at `index`.
    ///
    /// Continuation lines are indented lines (nested values, list items),
    /// compact list items written at column zero (`- x`), and the blank lines
    /// between them.
    pub(crate) fn continuation_end(&self, index: usize) -> usize {
        let mut end = index + 1;
        let mut cursor = index + 1;
        while cursor < self.lines.len() {
            let line = &self.lines[cursor];
            if line.trim().is_empty() {
                cursor += 1;
                continue;
            }
            if !line.starts_with([' ', '\t']) && !is_sequence_item(line) {
                break;
            }
            cursor += 1;
            end = cursor;
        }
        end
    }
}

/// A top-level `key: value` line inside a frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterEntry<'a> {
    /// Position of the line within [`FrontmatterBlock::lines`].
    pub index: usize,
    pub key: &'a str,
    /// Text after the colon, trimmed. Empty for block headers like `tags:`.
    pub value: &'a str,
}

impl<'a> FrontmatterEntry<'a> {
    /// Split a line at its first unescaped colon.
    ///
    /// Indented lines, comments and lines without a colon are not entries.
    pub fn from_line(index: usize, line: &'a str) -> Option<Self> {
        if line.starts_with([' ', '\t', '#']) {
            return None;
        }
        let colon = find_unescaped_colon(line)?;
        let key = line[..colon].trim_end();
        if key.is_empty() {
            return None;
        }
        let value = line[colon + 1..].trim();
        Some(Self { index, key, value })
    }
}

fn is_sequence_item(line: &str) -> bool {
    line == "-" || line.starts_with("- ") || line.starts_with("-\t")
}

fn find_unescaped_colon(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ':' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Blank lines found ahead of the opening delimiter.
    pub preamble: String,
    /// Frontmatter block (if present and terminated).
    pub frontmatter: Option<FrontmatterBlock>,
    /// The markdown body (everything after the closing delimiter).
    pub body: String,
}

impl ParsedDocument {
    pub fn has_frontmatter(&self) -> bool {
        self.frontmatter.is_some()
    }

    /// Raw value of a top-level frontmatter key.
    pub fn get_field(&self, key: &str) -> Option<&str> {
        self.frontmatter.as_ref().and_then(|fm| fm.get(key))
    }
}

/// A single frontmatter modification operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterOp {
    /// Field name to modify.
    pub field: String,
    /// Operation type.
    pub op: FrontmatterOpType,
    /// Value to write; `None` leaves the document untouched.
    pub value: Option<String>,
}

impl FrontmatterOp {
    pub fn set(field: impl Into<String>, value: Option<String>) -> Self {
        Self { field: field.into(), op: FrontmatterOpType::Set, value }
    }

    pub fn append(field: impl Into<String>, item: impl Into<String>) -> Self {
        Self { field: field.into(), op: FrontmatterOpType::Append, value: Some(item.into()) }
    }
}

/// Type of frontmatter operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterOpType {
    /// Set field to value (creates if missing).
    Set,
    /// Append an item to an existing block list.
    Append,
}
