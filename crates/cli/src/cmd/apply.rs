//! Apply a field map to a daily note, generating the note when it is missing.

use crate::ApplyArgs;
use chrono::Local;
use daybook_core::daily::DailyDate;
use daybook_core::fields::FieldUpdates;
use daybook_core::{SourceDocument, TransformRequest, transform};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ApplyArgs) {
    let cfg = super::load_config("apply", config, profile);

    let fields = match read_fields(&args.fields) {
        Ok(f) => f,
        Err(e) => super::fail("apply", e),
    };

    let path = locate_note(&cfg.daily_dir, args.note.as_deref());
    let source = if path.is_file() {
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) => super::fail("apply", format!("failed to read {}: {e}", path.display())),
        };
        let file_name =
            path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Some(SourceDocument::new(text, file_name))
    } else {
        debug!(path = %path.display(), "note not found, generating");
        None
    };

    let request = TransformRequest { source, title_hint: args.note.clone(), fields };
    let out = match transform(&request) {
        Ok(out) => out,
        Err(e) => super::fail("apply", e),
    };

    for skipped in &out.report.skipped {
        warn!("{skipped}");
    }
    info!(
        file = %out.file_name,
        generated = out.report.generated,
        updated = ?out.report.updated_keys,
        "applied fields"
    );

    if args.stdout {
        print!("{}", out.text);
        return;
    }

    let target = if out.report.generated { cfg.daily_dir.join(&out.file_name) } else { path };
    if let Some(parent) = target.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        super::fail("apply", format!("failed to create {}: {e}", parent.display()));
    }
    if let Err(e) = fs::write(&target, &out.text) {
        super::fail("apply", format!("failed to write {}: {e}", target.display()));
    }

    println!("OK   dbk apply");
    println!("output: {}", target.display());
    println!("generated: {}", out.report.generated);
    println!("updated: {}", out.report.updated_keys.join(", "));
    for (heading, outcome) in &out.report.sections {
        println!("section {heading}: {outcome:?}");
    }
    for skipped in &out.report.skipped {
        println!("skipped: {skipped}");
    }
}

/// An existing file named by `note`, otherwise the dated file the hint
/// resolves to.
fn locate_note(daily_dir: &Path, note: Option<&str>) -> PathBuf {
    if let Some(name) = note {
        let direct = daily_dir.join(name);
        if direct.is_file() {
            return direct;
        }
    }
    let date = DailyDate::from_title_hint(note, Local::now().date_naive());
    daily_dir.join(date.file_name())
}

fn read_fields(path: &Path) -> Result<FieldUpdates, String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read fields from stdin: {e}"))?;
        return serde_json::from_str(&buf).map_err(|e| format!("invalid JSON fields: {e}"));
    }

    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read fields file {}: {e}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&text)
            .map_err(|e| format!("invalid YAML in {}: {e}", path.display())),
        _ => serde_json::from_str(&text)
            .map_err(|e| format!("invalid JSON in {}: {e}", path.display())),
    }
}
