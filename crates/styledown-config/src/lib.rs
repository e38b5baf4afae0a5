use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use styledown_engine::{FontSpec, StyleConfig};
use thiserror::Error;

/// Overrides the config file location. Shell variables and `~` are expanded.
pub const CONFIG_PATH_ENV: &str = "STYLEDOWN_CONFIG";

pub const DEFAULT_FONT_FAMILY: &str = "Georgia";
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub family: String,
    pub size: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontSettings {
    pub fn to_font_spec(&self) -> FontSpec {
        FontSpec::new(self.family.clone(), self.size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontSettings,
    pub style: StyleConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$STYLEDOWN_CONFIG` if set, else `~/.config/styledown/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_PATH_ENV).ok().as_deref())
    }

    fn config_path_from(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
            return Self::expand_path(Path::new(path)).unwrap_or_else(|| PathBuf::from(path));
        }
        let config_dir = shellexpand::tilde("~/.config/styledown");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path_from(None);
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/styledown/config.toml"));
    }

    #[test]
    fn test_config_path_override() {
        let path = Config::config_path_from(Some("/etc/styledown.toml"));
        assert_eq!(path, PathBuf::from("/etc/styledown.toml"));

        let path = Config::config_path_from(Some("~/custom.toml"));
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.to_string_lossy().ends_with("custom.toml"));
    }

    #[test]
    fn test_blank_override_uses_default_path() {
        let path = Config::config_path_from(Some("  "));
        assert!(path.ends_with("config.toml"));
        assert!(path.to_string_lossy().contains("styledown"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            font: FontSettings {
                family: "Palatino".to_string(),
                size: 16.0,
            },
            style: StyleConfig {
                heading1_scale: 2.0,
                ..Default::default()
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config_content = r#"
[style]
heading2_scale = 1.5
"#;

        let config: Config = toml::from_str(config_content).unwrap();
        assert_eq!(config.font, FontSettings::default());
        assert_eq!(config.style.heading2_scale, 1.5);
        assert_eq!(
            config.style.heading1_scale,
            StyleConfig::default().heading1_scale
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_font_settings_to_spec() {
        let spec = FontSettings::default().to_font_spec();
        assert_eq!(spec.family, DEFAULT_FONT_FAMILY);
        assert_eq!(spec.size, DEFAULT_FONT_SIZE);
        assert!(!spec.bold && !spec.italic);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[font]\nsize = \"big\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let test_config = Config {
            font: FontSettings {
                family: "Menlo".to_string(),
                size: 11.0,
            },
            style: StyleConfig {
                max_blank_lines: 3,
                ..Default::default()
            },
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
