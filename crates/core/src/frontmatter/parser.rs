//! Frontmatter parsing from markdown documents.

use super::types::{FrontmatterBlock, ParsedDocument};

/// Scanner position relative to the frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeBlock,
    InBlock,
    AfterBlock,
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` lines at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// Only blank lines may come before the opening delimiter. A block that is
/// never closed is not frontmatter, the whole input becomes the body.
/// Blank lines at either edge of the block are dropped.
pub fn parse(content: &str) -> ParsedDocument {
    let mut state = ScanState::BeforeBlock;
    let mut preamble_end = 0;
    let mut body_start = content.len();
    let mut lines: Vec<String> = Vec::new();
    let mut offset = 0;

    for raw in content.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let next = offset + raw.len();

        match state {
            ScanState::BeforeBlock => {
                if is_delimiter(line) {
                    preamble_end = offset;
                    state = ScanState::InBlock;
                } else if line.trim().is_empty() {
                    // keep scanning blank lines
                } else {
                    break;
                }
            }
            ScanState::InBlock => {
                if is_delimiter(line) {
                    body_start = next;
                    state = ScanState::AfterBlock;
                    break;
                }
                lines.push(line.to_string());
            }
            ScanState::AfterBlock => break,
        }

        offset = next;
    }

    if state != ScanState::AfterBlock {
        return ParsedDocument {
            preamble: String::new(),
            frontmatter: None,
            body: content.to_string(),
        };
    }

    trim_blank_edges(&mut lines);

    ParsedDocument {
        preamble: content[..preamble_end].to_string(),
        frontmatter: Some(FrontmatterBlock::new(lines)),
        body: content[body_start..].to_string(),
    }
}

/// A delimiter line is `---` followed only by whitespace.
pub(crate) fn is_delimiter(line: &str) -> bool {
    line.strip_prefix("---").is_some_and(|rest| rest.trim().is_empty())
}

fn trim_blank_edges(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.trim().is_empty()).count();
    lines.drain(..leading);
}
