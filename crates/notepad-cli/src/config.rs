use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::CliError;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotepadConfig {
    pub security: SecuritySection,
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecuritySection {
    /// Characters required when setting a password.
    pub min_password_length: usize,
    /// Password attempts allowed when decrypting interactively.
    pub max_attempts: u32,
    /// Ask twice when setting a password.
    pub confirm_password: bool,
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            min_password_length: 1,
            max_attempts: 3,
            confirm_password: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiSection {
    pub editor: Option<String>,
    pub ascii: bool,
}

impl NotepadConfig {
    fn validate(&self) -> anyhow::Result<()> {
        if self.security.max_attempts == 0 {
            return Err(CliError::invalid_input("security.max_attempts must be at least 1").into());
        }
        if self.security.min_password_length == 0 {
            return Err(CliError::invalid_input(
                "security.min_password_length must be at least 1",
            )
            .into());
        }
        Ok(())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load configuration.
///
/// An explicitly named file must exist; the default location is optional
/// and falls back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<NotepadConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::not_found(
                    format!("Config file not found: {}", path.display()),
                    "Hint: Remove --config / NOTEPAD_CONFIG to use defaults.",
                )
                .into());
            }
            path.to_path_buf()
        }
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(NotepadConfig::default());
            }
            path
        }
    };

    let config = read_config(&path)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn read_config(path: &Path) -> anyhow::Result<NotepadConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notepad"));
        }
    }
    Ok(home_dir()?.join(".config").join("notepad"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
