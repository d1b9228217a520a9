use tracing::debug;

use super::bullets::to_bullets;
use super::scanner::find_headings;
use super::types::{
    ANCHOR_HEADING, ANCHOR_LEVEL, HeadingInfo, SECTION_LEVEL, SectionBounds, SectionMatch,
    UpsertOutcome, UpsertResult,
};

/// Upserts named sections in a note body.
///
/// The defaults match the daily note template: `###` sections, inserted above
/// `## Today's Notes` when they do not exist yet.
#[derive(Debug, Clone)]
pub struct SectionEditor {
    level: u8,
    anchor: Option<SectionMatch>,
}

impl Default for SectionEditor {
    fn default() -> Self {
        Self {
            level: SECTION_LEVEL,
            anchor: Some(SectionMatch::new(ANCHOR_HEADING, ANCHOR_LEVEL)),
        }
    }
}

impl SectionEditor {
    pub fn new(level: u8, anchor: Option<SectionMatch>) -> Self {
        Self { level, anchor }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn anchor(&self) -> Option<&SectionMatch> {
        self.anchor.as_ref()
    }

    /// Insert or replace the section titled `heading`.
    ///
    /// # Arguments
    /// * `body` - The markdown body (frontmatter already removed)
    /// * `heading` - Exact, case-sensitive heading text
    /// * `content` - New section content; `None` or blank leaves `body` as-is
    ///
    /// When several headings match, the first one wins.
    pub fn upsert_section(
        &self,
        body: &str,
        heading: &str,
        content: Option<&str>,
    ) -> UpsertResult {
        let Some(content) = content.map(str::trim).filter(|c| !c.is_empty()) else {
            return UpsertResult { content: body.to_string(), outcome: UpsertOutcome::Unchanged };
        };

        let target = SectionMatch::new(heading, self.level);
        let block = format!("{}\n{}\n", target.render(), content);
        let headings = find_headings(body);

        if let Some(bounds) = self.section_bounds(body, &headings, &target) {
            debug!(heading, "replacing section");
            let region = &body[bounds.start..bounds.end];
            let mut result = String::with_capacity(body.len() + block.len());
            result.push_str(&body[..bounds.start]);
            result.push_str(&block);
            if bounds.end < body.len() && ends_with_blank_line(region) {
                result.push('\n');
            }
            result.push_str(&body[bounds.end..]);
            return UpsertResult { content: result, outcome: UpsertOutcome::Replaced };
        }

        if let Some(anchor) = &self.anchor
            && let Some(found) = headings.iter().find(|h| anchor.matches(h))
        {
            debug!(heading, anchor = %anchor.title, "inserting section above anchor");
            let mut result = String::with_capacity(body.len() + block.len() + 1);
            result.push_str(&body[..found.start]);
            result.push_str(&block);
            result.push('\n');
            result.push_str(&body[found.start..]);
            return UpsertResult {
                content: result,
                outcome: UpsertOutcome::InsertedBeforeAnchor,
            };
        }

        debug!(heading, "appending section");
        let kept = body.trim_end();
        let content = if kept.is_empty() { block } else { format!("{kept}\n\n{block}") };
        UpsertResult { content, outcome: UpsertOutcome::Appended }
    }

    /// Same as [`SectionEditor::upsert_section`], with the content normalized
    /// into a bullet list first.
    pub fn upsert_bulleted_section(
        &self,
        body: &str,
        heading: &str,
        content: Option<&str>,
    ) -> UpsertResult {
        let bullets = content.map(to_bullets);
        self.upsert_section(body, heading, bullets.as_deref())
    }

    /// Check if a section exists in the body
    pub fn section_exists(&self, body: &str, heading: &str) -> bool {
        self.find_section(body, heading).is_some()
    }

    /// Byte range of the first section titled `heading`
    pub fn find_section(&self, body: &str, heading: &str) -> Option<SectionBounds> {
        let headings = find_headings(body);
        self.section_bounds(body, &headings, &SectionMatch::new(heading, self.level))
    }

    fn section_bounds(
        &self,
        body: &str,
        headings: &[HeadingInfo],
        target: &SectionMatch,
    ) -> Option<SectionBounds> {
        let position = headings.iter().position(|h| target.matches(h))?;
        let start = headings[position].start;
        let end = headings[position + 1..]
            .iter()
            .find(|h| h.level <= target.level)
            .map_or(body.len(), |h| h.start);
        Some(SectionBounds { start, end })
    }
}

fn ends_with_blank_line(region: &str) -> bool {
    let mut lines = region.lines();
    let last = lines.next_back();
    lines.next().is_some() && last.is_some_and(|l| l.trim().is_empty())
}
