use daybook_core::config::loader::default_config_path;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = super::load_config("doctor", config, profile);

    println!("OK   dbk doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("vault_root: {}", rc.vault_root.display());
    println!("daily_dir: {}", rc.daily_dir.display());
    println!("logging.level: {}", rc.logging.level);
    println!(
        "logging.file: {}",
        rc.logging.file.as_ref().map_or_else(|| "-".to_string(), |p| p.display().to_string())
    );
}
