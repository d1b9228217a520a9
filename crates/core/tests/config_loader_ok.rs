use daybook_core::config::loader::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/vault"
daily_dir  = "{{vault_root}}/Journal/Daily"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/vault");
    assert_eq!(rc.daily_dir.display().to_string(), "/tmp/vault/Journal/Daily");
    assert_eq!(rc.logging.level, "info");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("daybook/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
vault_root = "/tmp/def"
daily_dir  = "{{vault_root}}/daily"

[profiles.work]
vault_root = "/tmp/work"
daily_dir  = "/elsewhere/days"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("work")).expect("should load");
    assert_eq!(rc.active_profile, "work");
    assert_eq!(rc.vault_root.display().to_string(), "/tmp/work");
    assert_eq!(rc.daily_dir.display().to_string(), "/elsewhere/days");
}

#[test]
fn daily_dir_defaults_under_vault() {
    let toml = r#"
version = 1
[profiles.default]
vault_root = "/tmp/v"
"#;
    let rc = ConfigLoader::from_toml_str(toml, "inline", None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert!(rc.daily_dir.ends_with("Journal/Daily"));
    assert!(rc.daily_dir.starts_with("/tmp/v"));
}

#[test]
fn logging_table_is_resolved() {
    let toml = r#"
version = 1
[profiles.default]
vault_root = "/tmp/v"

[logging]
level = "debug"
file_level = "trace"
file = "{{vault_root}}/.daybook/dbk.log"
"#;
    let rc = ConfigLoader::from_toml_str(toml, "inline", None).expect("should load");
    assert_eq!(rc.logging.level, "debug");
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
    assert_eq!(
        rc.logging.file.unwrap().display().to_string(),
        "/tmp/v/.daybook/dbk.log"
    );
}
