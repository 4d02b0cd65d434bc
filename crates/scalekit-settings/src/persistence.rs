//! Settings Persistence
//!
//! Locates the overlay config file in the platform config directory and
//! loads or saves it, falling back to defaults when no file exists yet.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "scalekit";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve `<config_dir>/scalekit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })
}

/// A config bound to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    config: Config,
}

impl SettingsPersistence {
    /// Default config, to be saved at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Config::default(),
        }
    }

    /// Load from `path`, or use defaults if the file does not exist.
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new(path));
        }
        let config = Config::load_from_file(&path)?;
        Ok(Self { path, config })
    }

    /// Write the config, creating the parent directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        self.config.save_to_file(&self.path)
    }

    /// Write a default config file unless one exists (or `force` is set).
    ///
    /// Returns true when a file was written.
    pub fn init(path: impl Into<PathBuf>, force: bool) -> SettingsResult<bool> {
        let persistence = Self::new(path);
        if persistence.path.exists() && !force {
            return Ok(false);
        }
        persistence.save()?;
        tracing::info!(path = %persistence.path.display(), "wrote default config");
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn validate(&self) -> SettingsResult<()> {
        Ok(self.config.validate()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_layout() {
        // Headless CI images may have no config dir at all.
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("scalekit/config.toml"));
        }
    }

    #[test]
    fn test_new_uses_defaults() {
        let persistence = SettingsPersistence::new("overlay.toml");
        assert_eq!(persistence.config(), &Config::default());
        assert_eq!(persistence.path(), Path::new("overlay.toml"));
        assert!(persistence.validate().is_ok());
    }
}
