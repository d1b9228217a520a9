pub mod apply;
pub mod doctor;
pub mod new;

use daybook_core::config::loader::{ConfigLoader, default_config_path};
use daybook_core::config::types::ResolvedConfig;
use std::fmt::Display;
use std::path::Path;

/// Load the config or report the failure for `cmd` and exit.
pub fn load_config(cmd: &str, config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL dbk {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub fn fail(cmd: &str, err: impl Display) -> ! {
    println!("FAIL dbk {cmd}");
    println!("{err}");
    std::process::exit(1);
}
