//! TOML configuration: profiles pointing at a vault and its daily notes
//! directory, plus logging settings.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
