//! Locating, reading and resolving `config.toml`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};

/// Only config layout this build understands.
pub const CONFIG_VERSION: u32 = 1;

/// Profile used when neither the caller nor the file selects one.
pub const DEFAULT_PROFILE: &str = "default";

const VAULT_ROOT_VAR: &str = "{{vault_root}}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("cannot read {0}: {1}")]
    ReadError(String, #[source] io::Error),

    #[error("invalid config in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("config defines no profiles")]
    NoProfiles,

    #[error("config version {0} is not supported (expected 1)")]
    BadVersion(u32),

    #[error("cannot expand '~': home directory unknown")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Read the config at `config_path`, or at [`default_config_path`].
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let origin = path.display().to_string();

        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(origin.clone()),
            _ => ConfigError::ReadError(origin.clone(), e),
        })?;

        Self::from_toml_str(&text, &origin, profile_override)
    }

    /// Resolve a config from TOML text; `origin` names the source in errors.
    pub fn from_toml_str(
        text: &str,
        origin: &str,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(origin.to_string(), e))?;
        file.resolve(profile_override)
    }
}

impl ConfigFile {
    /// Pick the active profile and expand every path it names.
    ///
    /// Selection order: `profile_override`, the file's `profile`, then
    /// [`DEFAULT_PROFILE`].
    pub fn resolve(&self, profile_override: Option<&str>) -> Result<ResolvedConfig, ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::BadVersion(self.version));
        }
        if self.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override.or(self.profile.as_deref()).unwrap_or(DEFAULT_PROFILE);
        let profile = self
            .profiles
            .get(active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.to_string()))?;
        debug!(profile = active, "resolving config profile");

        let vault_root = expand_path(&profile.vault_root, None)?;
        let daily_dir = expand_path(&profile.daily_dir, Some(&vault_root))?;
        let file = self
            .logging
            .file
            .as_deref()
            .map(|f| expand_path(&f.to_string_lossy(), Some(&vault_root)))
            .transpose()?;

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            vault_root,
            daily_dir,
            logging: LoggingConfig { file, ..self.logging.clone() },
        })
    }
}

/// `$XDG_CONFIG_HOME/daybook/config.toml`, else `~/.config/daybook/config.toml`.
pub fn default_config_path() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config"),
    };
    base.join("daybook").join("config.toml")
}

/// Substitute `{{vault_root}}`, then expand `~` and environment variables.
fn expand_path(raw: &str, vault_root: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let raw = match vault_root {
        Some(root) => raw.replace(VAULT_ROOT_VAR, &root.to_string_lossy()),
        None => raw.to_string(),
    };
    let expanded = shellexpand::full(&raw).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.as_ref()))
}
