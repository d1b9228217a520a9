//! Baseline daily note generation.

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use super::date::DailyDate;

/// Tag every generated daily note carries.
pub const DAILY_TAG: &str = "daily";

/// The daily note skeleton.
///
/// The `###` headings under `## Reflection` and the `## Today's Notes` anchor
/// must stay in step with the constants in [`crate::sections`], otherwise
/// section upserts stop landing in the template's slots.
const DAILY_TEMPLATE: &str = r#"---
tags:
  - {{tag}}
Created: {{created}}
Yesterday: "[[{{yesterday}}]]"
Today: "[[{{date}}]]"
Parent: "[[{{week}}]]"
Summary:
Rating:
Mindfulness:
Discipline:
Engagement:
Focus:
Courage:
Authenticity:
Purpose:
Energy:
Communication:
Uniqueness:
---
## Reminders
- [ ] Review calendar and priorities
- [ ] Move for at least 30 minutes
- [ ] Process inbox

## Prompts
- What am I grateful for today?
- What would make today great?
- What did I learn today?

## Reflection
### Accomplishments

### Obstacles

### Improvements

## Today's Notes

## Created Today
```dataview
LIST
FROM ""
WHERE file.cday = date("{{date}}")
SORT file.ctime ASC
```
"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("date {0} has no representable previous day")]
    DateOutOfRange(String),
}

pub type RenderContext = HashMap<&'static str, String>;

/// A freshly generated daily note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNote {
    pub text: String,
    pub file_name: String,
    pub date: DailyDate,
}

/// Generates daily notes from a date or title hint.
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// Generate a note using the local clock for `Created` and the fallback date.
    pub fn generate(title_hint: Option<&str>) -> Result<GeneratedNote, TemplateError> {
        Self::generate_at(title_hint, Local::now().naive_local())
    }

    /// Generate a note as if the current time were `now`.
    pub fn generate_at(
        title_hint: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<GeneratedNote, TemplateError> {
        let date = DailyDate::from_title_hint(title_hint, now.date());
        let ctx = build_render_context(&date, now)?;
        debug!(date = %date, week = %ctx["week"], "generating daily note");

        Ok(GeneratedNote {
            text: render_string(DAILY_TEMPLATE, &ctx),
            file_name: date.file_name(),
            date,
        })
    }
}

fn build_render_context(
    date: &DailyDate,
    now: NaiveDateTime,
) -> Result<RenderContext, TemplateError> {
    let yesterday =
        date.previous_day().ok_or_else(|| TemplateError::DateOutOfRange(date.title()))?;

    let mut ctx = RenderContext::new();
    ctx.insert("tag", DAILY_TAG.to_string());
    ctx.insert("created", now.format("%Y-%m-%dT%H:%M:%S").to_string());
    ctx.insert("date", date.title());
    ctx.insert("yesterday", yesterday.format("%Y-%m-%d").to_string());
    ctx.insert("week", date.iso_week_id());
    Ok(ctx)
}

/// Replace `{{name}}` placeholders; unknown names are left as written.
fn render_string(template: &str, ctx: &RenderContext) -> String {
    let re = Regex::new(r"\{\{([a-z_]+)\}\}").expect("valid regex");
    re.replace_all(template, |caps: &regex::Captures<'_>| {
        ctx.get(&caps[1]).cloned().unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Trait;
    use crate::frontmatter;
    use crate::sections::{ACCOMPLISHMENTS, ANCHOR_HEADING, IMPROVEMENTS, OBSTACLES};
    use chrono::NaiveDate;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn derived_fields_follow_title_date() {
        let note =
            TemplateGenerator::generate_at(Some("2024-03-10"), at("2024-05-01", "07:15:00"))
                .unwrap();
        let doc = frontmatter::parse(&note.text);
        assert_eq!(doc.get_field("Parent"), Some("\"[[2024-W10]]\""));
        assert_eq!(doc.get_field("Yesterday"), Some("\"[[2024-03-09]]\""));
        assert_eq!(doc.get_field("Today"), Some("\"[[2024-03-10]]\""));
        assert_eq!(doc.get_field("Created"), Some("2024-05-01T07:15:00"));
        assert_eq!(note.file_name, "2024-03-10.md");
    }

    #[test]
    fn year_boundary_week() {
        let note =
            TemplateGenerator::generate_at(Some("2023-01-01"), at("2023-01-01", "09:00:00"))
                .unwrap();
        let doc = frontmatter::parse(&note.text);
        assert_eq!(doc.get_field("Parent"), Some("\"[[2022-W52]]\""));
        assert_eq!(doc.get_field("Yesterday"), Some("\"[[2022-12-31]]\""));
    }

    #[test]
    fn falls_back_to_clock_date() {
        let note = TemplateGenerator::generate_at(Some("Weekly planning"), at("2025-02-03", "22:00:00"))
            .unwrap();
        assert_eq!(note.date.date(), NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        assert_eq!(note.file_name, "2025-02-03.md");
    }

    #[test]
    fn fixed_date_output_is_stable() {
        let now = at("2024-03-10", "08:00:00");
        let a = TemplateGenerator::generate_at(Some("2024-03-10.md"), now).unwrap();
        let b = TemplateGenerator::generate_at(Some("2024-03-10"), now).unwrap();
        assert_eq!(a, b);
        assert!(!a.text.contains("{{"));
    }

    #[test]
    fn template_carries_score_keys_and_sections() {
        let note =
            TemplateGenerator::generate_at(None, at("2024-03-10", "08:00:00")).unwrap();
        let doc = frontmatter::parse(&note.text);
        for t in Trait::ALL {
            assert_eq!(doc.get_field(&t.frontmatter_key()), Some(""), "{t:?}");
        }
        assert_eq!(doc.get_field("Summary"), Some(""));
        assert_eq!(doc.get_field("Rating"), Some(""));
        for heading in [ACCOMPLISHMENTS, OBSTACLES, IMPROVEMENTS] {
            assert!(doc.body.contains(&format!("\n### {heading}\n")), "{heading}");
        }
        assert!(doc.body.contains(&format!("\n## {ANCHOR_HEADING}\n")));
    }

    #[test]
    fn template_is_in_serialized_form() {
        let note =
            TemplateGenerator::generate_at(None, at("2024-03-10", "08:00:00")).unwrap();
        let doc = frontmatter::parse(&note.text);
        assert_eq!(frontmatter::serialize(&doc), note.text);
    }

    #[test]
    fn unknown_placeholders_survive() {
        let ctx = RenderContext::new();
        assert_eq!(render_string("{{missing}} {x}", &ctx), "{{missing}} {x}");
    }
}
