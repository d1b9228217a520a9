//! Frontmatter serialization back to markdown.

use super::types::{FrontmatterBlock, ParsedDocument};

/// Serialize a parsed document back to a markdown string.
///
/// With frontmatter, the output always starts at the opening delimiter and the
/// body follows the closing delimiter without leading blank lines, so repeated
/// passes never grow the gap between the two.
pub fn serialize(doc: &ParsedDocument) -> String {
    match &doc.frontmatter {
        Some(fm) => {
            let body = strip_leading_blank_lines(&doc.body);
            let mut out = String::with_capacity(body.len() + 64);
            out.push_str(&render_block(fm));
            out.push_str(body);
            out
        }
        None => format!("{}{}", doc.preamble, doc.body),
    }
}

/// Render a block including both delimiters and the trailing newline.
pub fn render_block(fm: &FrontmatterBlock) -> String {
    let mut out = String::from("---\n");
    for line in &fm.lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("---\n");
    out
}

/// Drop whole blank lines from the start of `text`, keeping the indentation of
/// the first non-blank line.
pub fn strip_leading_blank_lines(text: &str) -> &str {
    let mut rest = text;
    while let Some(newline) = rest.find('\n') {
        if !rest[..newline].trim().is_empty() {
            break;
        }
        rest = &rest[newline + 1..];
    }
    if rest.trim().is_empty() { "" } else { rest }
}
