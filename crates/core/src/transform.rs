//! Single entry point for updating (or creating) a daily note.
//!
//! The flow is fixed: generate a baseline note when no source is supplied,
//! apply frontmatter updates, apply section updates, serialize once.

use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, info};

use crate::daily::{TemplateError, TemplateGenerator};
use crate::fields::{FieldError, FieldUpdates};
use crate::frontmatter;
use crate::sections::{ACCOMPLISHMENTS, IMPROVEMENTS, SectionEditor, UpsertOutcome};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The caller supplied a document, but it is blank.
    #[error("source document is empty")]
    EmptyInput,

    /// No source document and no date could be derived for a new one.
    #[error("no source document and a new one could not be generated: {0}")]
    MissingDocument(#[from] TemplateError),
}

/// An existing note and the name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub text: String,
    pub file_name: String,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self { text: text.into(), file_name: file_name.into() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformRequest {
    /// The note to update; `None` generates one from `title_hint`.
    pub source: Option<SourceDocument>,
    /// Date or title for a generated note. Ignored when `source` is set.
    pub title_hint: Option<String>,
    pub fields: FieldUpdates,
}

/// What a transform changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// True when the note was generated from the daily template.
    pub generated: bool,
    /// Frontmatter keys whose lines changed, in application order.
    pub updated_keys: Vec<String>,
    /// Outcome per section update that was requested.
    pub sections: Vec<(String, UpsertOutcome)>,
    /// Fields left untouched because their values were invalid.
    pub skipped: Vec<FieldError>,
}

#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub text: String,
    /// Where the note should be saved: the source name, or the generated one.
    pub file_name: String,
    pub report: TransformReport,
}

/// Apply `request.fields` to the source note, or to a freshly generated one.
pub fn transform(request: &TransformRequest) -> Result<TransformOutput, TransformError> {
    transform_at(request, Local::now().naive_local())
}

/// [`transform`] with an explicit clock, used for generated notes.
pub fn transform_at(
    request: &TransformRequest,
    now: NaiveDateTime,
) -> Result<TransformOutput, TransformError> {
    let mut report = TransformReport::default();

    let (text, file_name) = match &request.source {
        Some(source) => {
            if source.text.trim().is_empty() {
                return Err(TransformError::EmptyInput);
            }
            (source.text.clone(), source.file_name.clone())
        }
        None => {
            let note = TemplateGenerator::generate_at(request.title_hint.as_deref(), now)?;
            info!(file = %note.file_name, "generated daily note");
            report.generated = true;
            (note.text, note.file_name)
        }
    };

    let mut doc = frontmatter::parse(&text);

    let plan = request.fields.frontmatter_ops();
    report.skipped = plan.skipped;
    report.updated_keys = frontmatter::apply_ops(&mut doc, &plan.ops);

    let editor = SectionEditor::default();
    for (heading, content) in [
        (IMPROVEMENTS, request.fields.improvements.as_deref()),
        (ACCOMPLISHMENTS, request.fields.accomplishments.as_deref()),
    ] {
        if content.is_none() {
            continue;
        }
        let result = editor.upsert_bulleted_section(&doc.body, heading, content);
        report.sections.push((heading.to_string(), result.outcome));
        doc.body = result.content;
    }

    debug!(
        file = %file_name,
        updated = report.updated_keys.len(),
        sections = report.sections.len(),
        skipped = report.skipped.len(),
        "transform complete"
    );

    Ok(TransformOutput { text: frontmatter::serialize(&doc), file_name, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(text: &str, fields: serde_json::Value) -> TransformRequest {
        TransformRequest {
            source: Some(SourceDocument::new(text, "note.md")),
            title_hint: None,
            fields: serde_json::from_value(fields).unwrap(),
        }
    }

    #[test]
    fn summary_round_trip() {
        let out = transform(&request("---\nSummary: old\n---\nbody", json!({"summary": "new"})))
            .unwrap();
        assert_eq!(out.text, "---\nSummary: new\n---\nbody");
        assert_eq!(out.file_name, "note.md");
        assert_eq!(out.report.updated_keys, vec!["Summary"]);
        assert!(!out.report.generated);
    }

    #[test]
    fn new_key_is_appended() {
        let out = transform(&request("---\nA: 1\n---\nbody", json!({"rating": 5}))).unwrap();
        let doc = frontmatter::parse(&out.text);
        assert_eq!(doc.frontmatter.unwrap().lines, vec!["A: 1", "Rating: 5"]);
    }

    #[test]
    fn blank_source_is_rejected() {
        let err = transform(&request("   ", json!({}))).unwrap_err();
        assert_eq!(err, TransformError::EmptyInput);
    }

    #[test]
    fn missing_source_generates_note() {
        let now = NaiveDateTime::parse_from_str("2024-03-10 21:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        let req = TransformRequest {
            source: None,
            title_hint: Some("2024-03-10".into()),
            fields: FieldUpdates::new().with_rating(8),
        };
        let out = transform_at(&req, now).unwrap();
        assert!(out.report.generated);
        assert_eq!(out.file_name, "2024-03-10.md");
        assert!(out.text.contains("\nRating: 8\n"));
    }

    #[test]
    fn undatable_note_is_missing_document() {
        let now = chrono::NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap();
        let err = transform_at(&TransformRequest::default(), now).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingDocument(TemplateError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn section_outcomes_are_reported() {
        let out = transform(&request(
            "---\nA: 1\n---\n## Today's Notes\n",
            json!({"improvements": "x", "accomplishments": "   "}),
        ))
        .unwrap();
        assert_eq!(
            out.report.sections,
            vec![
                (IMPROVEMENTS.to_string(), UpsertOutcome::InsertedBeforeAnchor),
                (ACCOMPLISHMENTS.to_string(), UpsertOutcome::Unchanged),
            ]
        );
    }
}
