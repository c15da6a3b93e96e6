use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "info";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to resolve config directory")]
    NoConfigDir,

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Stored as YAML in `<config dir>/config.yaml`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Where exports are saved; the user's Downloads folder when unset.
    pub export_dir: Option<PathBuf>,
    /// Show a save dialog for each export instead of writing straight to `export_dir`.
    pub ask_before_save: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Sheet JSON".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            export_dir: None,
            ask_before_save: true,
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "sheet-json")
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = project_dirs().ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Missing file means defaults; unreadable or invalid YAML is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = default_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn resolved_export_dir(&self) -> Option<PathBuf> {
        self.export_dir.clone().or_else(|| {
            UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let config = AppConfig::load_from(&dir.path().join("config.yaml"))
            .expect("missing config should load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "log_filter: debug\n").expect("should write config");

        let config = AppConfig::load_from(&path).expect("config should load");

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.window_title, "Sheet JSON");
        assert!(config.ask_before_save);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("nested").join("sheet-json").join("config.yaml");
        let config = AppConfig {
            export_dir: Some(dir.path().to_path_buf()),
            ask_before_save: false,
            log_filter: "sheet_json=debug".to_string(),
            ..AppConfig::default()
        };

        config.save_to(&path).expect("config should save");

        assert!(path.exists());
        assert_eq!(AppConfig::load_from(&path).expect("config should load"), config);
    }

    #[test]
    fn save_overwrites_previous_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "window_title: Old\n").expect("should write config");

        AppConfig::default().save_to(&path).expect("config should save");

        let config = AppConfig::load_from(&path).expect("config should load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "ask_before_save: [not, a, bool]\n").expect("should write config");

        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn explicit_export_dir_wins() {
        let config = AppConfig {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolved_export_dir(),
            Some(PathBuf::from("/tmp/exports"))
        );
    }
}
