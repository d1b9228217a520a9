//! Line scanner for ATX headings.
//!
//! Fenced code blocks are not tracked: a `### ` line inside a fence is still
//! reported as a heading.

use super::types::HeadingInfo;

/// Find all headings in the document, in order
pub fn find_headings(input: &str) -> Vec<HeadingInfo> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for raw in input.split_inclusive('\n') {
        let end = offset + raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);
        if let Some((level, title)) = parse_heading(line) {
            headings.push(HeadingInfo { title: title.to_string(), level, start: offset, end });
        }
        offset = end;
    }

    headings
}

/// Parse `#{1,6}` followed by whitespace (or nothing) into level and title.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    // `hashes` is at most 6
    Some((hashes as u8, rest.trim()))
}
