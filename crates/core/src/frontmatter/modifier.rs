//! Frontmatter modification operations.

use tracing::{debug, trace};

use super::serializer::strip_leading_blank_lines;
use super::types::{FrontmatterBlock, FrontmatterOp, FrontmatterOpType, ParsedDocument};

/// Apply frontmatter operations to a document, in order.
///
/// Returns the fields of the operations that changed the document.
pub fn apply_ops(doc: &mut ParsedDocument, ops: &[FrontmatterOp]) -> Vec<String> {
    let mut changed = Vec::new();
    for op in ops {
        let applied = match op.op {
            FrontmatterOpType::Set => set_field(doc, &op.field, op.value.as_deref()),
            FrontmatterOpType::Append => match op.value.as_deref() {
                Some(item) => append_list_item(doc, &op.field, item),
                None => false,
            },
        };
        trace!(field = %op.field, op = ?op.op, applied, "frontmatter op");
        if applied {
            changed.push(op.field.clone());
        }
    }
    changed
}

/// Set `key` to `value`.
///
/// `None` leaves the document untouched. An existing line for the key is
/// replaced in place; otherwise the line is appended to the end of the block.
/// A document without frontmatter gets a new single-line block.
pub fn set_field(doc: &mut ParsedDocument, key: &str, value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let line = format_line(key, value);

    let Some(fm) = doc.frontmatter.as_mut() else {
        debug!(key, "creating frontmatter block");
        doc.frontmatter = Some(FrontmatterBlock::new(vec![line]));
        doc.preamble.clear();
        doc.body = strip_leading_blank_lines(&doc.body).to_string();
        return true;
    };

    let matches: Vec<usize> =
        fm.entries().filter(|e| e.key == key).map(|e| e.index).collect();

    let Some((&first, duplicates)) = matches.split_first() else {
        fm.lines.push(line);
        return true;
    };

    // Walk backwards so earlier indices stay valid while lines are removed.
    let mut changed = false;
    for &index in duplicates.iter().rev() {
        let end = fm.continuation_end(index);
        fm.lines.drain(index..end);
        changed = true;
    }

    let end = fm.continuation_end(first);
    if end > first + 1 {
        fm.lines.drain(first + 1..end);
        changed = true;
    }
    if fm.lines[first] != line {
        fm.lines[first] = line;
        changed = true;
    }
    changed
}

/// Append `item` to the block list stored under `key`.
///
/// Only an existing list header (`key:` with no inline value) is extended;
/// the list is never created, and an item already present is not repeated.
pub fn append_list_item(doc: &mut ParsedDocument, key: &str, item: &str) -> bool {
    let Some(fm) = doc.frontmatter.as_mut() else {
        return false;
    };
    let Some(entry) = fm.entry(key) else {
        debug!(key, "no list to append to");
        return false;
    };
    if !entry.value.is_empty() {
        debug!(key, value = entry.value, "field is not a block list");
        return false;
    }

    let header = entry.index;
    let end = fm.continuation_end(header);
    let items = &fm.lines[header + 1..end];

    if items.iter().any(|l| list_item_text(l) == Some(item)) {
        return false;
    }

    let indent = items
        .iter()
        .find(|l| list_item_text(l).is_some())
        .map_or("  ", |l| &l[..l.len() - l.trim_start().len()])
        .to_string();

    fm.lines.insert(end, format!("{indent}- {item}"));
    true
}

fn list_item_text(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix("- ").map(str::trim)
}

fn format_line(key: &str, value: &str) -> String {
    if value.is_empty() { format!("{key}:") } else { format!("{key}: {value}") }
}
