use crate::models::settings::LayoutSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the config file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    /// Named by the caller; it must exist.
    Explicit(PathBuf),
    /// Per-user location; optional.
    UserDefault(Option<PathBuf>),
}

/// Resolves and reads the layout config file.
pub struct SettingsService {
    source: ConfigSource,
}

impl SettingsService {
    /// Use `path` when given, otherwise the per-user config location.
    pub fn new(path: Option<PathBuf>) -> Self {
        let source = match path {
            Some(path) => ConfigSource::Explicit(path),
            None => ConfigSource::UserDefault(Self::default_config_path()),
        };
        Self { source }
    }

    /// `<config dir>/month-grid/config.toml` for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "month-grid")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load settings. A missing per-user file yields defaults; a missing
    /// explicit file is an error.
    pub fn load(&self) -> Result<LayoutSettings> {
        match &self.source {
            ConfigSource::Explicit(path) => {
                if !path.exists() {
                    return Err(anyhow!("config file {} not found", path.display()));
                }
                Self::load_file(path)
            }
            ConfigSource::UserDefault(None) => {
                log::warn!("No config directory available; using default settings");
                Ok(LayoutSettings::default())
            }
            ConfigSource::UserDefault(Some(path)) => {
                if !path.exists() {
                    log::debug!("Config file {:?} not found; using default settings", path);
                    return Ok(LayoutSettings::default());
                }
                Self::load_file(path)
            }
        }
    }

    fn load_file(path: &Path) -> Result<LayoutSettings> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let settings = Self::parse(&data)
            .with_context(|| format!("Invalid config in {}", path.display()))?;

        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn parse(data: &str) -> Result<LayoutSettings> {
        let settings: LayoutSettings = toml::from_str(data)?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }
}
