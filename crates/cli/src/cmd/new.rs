use crate::NewArgs;
use daybook_core::daily::TemplateGenerator;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) {
    debug!(title = ?args.title, "running new");
    let cfg = super::load_config("new", config, profile);

    let note = match TemplateGenerator::generate(args.title.as_deref()) {
        Ok(note) => note,
        Err(e) => super::fail("new", e),
    };

    let output = cfg.daily_dir.join(&note.file_name);
    if output.exists() && !args.force {
        super::fail(
            "new",
            format!("refusing to overwrite existing file: {} (use --force)", output.display()),
        );
    }

    if let Err(e) = fs::create_dir_all(&cfg.daily_dir) {
        super::fail("new", format!("failed to create {}: {e}", cfg.daily_dir.display()));
    }
    if let Err(e) = fs::write(&output, &note.text) {
        super::fail("new", format!("failed to write {}: {e}", output.display()));
    }

    info!(path = %output.display(), "created daily note");
    println!("OK   dbk new");
    println!("date: {}", note.date);
    println!("output: {}", output.display());
}
