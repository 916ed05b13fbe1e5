//! TripStory configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ThemeSelector;

/// Main TripStory configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Planning backend
    pub server: ServerConfig,

    /// Map view defaults
    pub map: MapConfig,

    /// Travel style theme buttons
    pub themes: ThemesConfig,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate configuration before use
    pub fn validate(&self) -> Result<()> {
        let base = &self.server.base_url;
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(eyre::eyre!("server.base-url must start with http:// or https://, got: {}", base));
        }
        if !self.server.plan_path.starts_with('/') {
            return Err(eyre::eyre!("server.plan-path must start with '/', got: {}", self.server.plan_path));
        }
        if !self.server.audio_path.starts_with('/') {
            return Err(eyre::eyre!("server.audio-path must start with '/', got: {}", self.server.audio_path));
        }
        self.themes.selector().map_err(|e| eyre::eyre!("Invalid themes config: {}", e))?;
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripstory.yml
        let local_config = PathBuf::from(".tripstory.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tripstory/tripstory.yml
        if let Some(user_config) = user_config_path()
            && user_config.exists()
        {
            match Self::load_from_file(&user_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is set up
    ///
    /// Errors are swallowed here; the full load reports them later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => [Some(PathBuf::from(".tripstory.yml")), user_config_path()]
                .into_iter()
                .flatten()
                .collect(),
        };

        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tripstory").join("tripstory.yml"))
}

/// Planning backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Backend base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the plan endpoint
    #[serde(rename = "plan-path")]
    pub plan_path: String,

    /// Path template of the narration endpoint; `{id}` is the chapter id
    #[serde(rename = "audio-path")]
    pub audio_path: String,

    /// Request timeout in milliseconds; unset means no timeout
    #[serde(rename = "timeout-ms", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            plan_path: "/api/plan".to_string(),
            audio_path: "/api/chapter/{id}/audio".to_string(),
            timeout_ms: None,
        }
    }
}

/// Map view defaults, applied when the map is first created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Tile URL template
    #[serde(rename = "tile-url")]
    pub tile_url: String,

    #[serde(rename = "max-zoom")]
    pub max_zoom: u8,

    /// Initial center as [lat, lng]
    pub center: [f64; 2],

    /// Initial zoom
    pub zoom: u8,

    #[serde(rename = "scroll-wheel-zoom")]
    pub scroll_wheel_zoom: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            center: [20.0, 0.0],
            zoom: 2,
            scroll_wheel_zoom: false,
        }
    }
}

/// Travel style theme buttons
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    /// Style identifiers, one button each, in display order
    pub styles: Vec<String>,

    /// Style selected before any button is clicked
    pub default: String,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            styles: ["relaxed", "adventure", "cultural", "foodie", "romantic"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default: "relaxed".to_string(),
        }
    }
}

impl ThemesConfig {
    /// Build the theme button group
    pub fn selector(&self) -> Result<ThemeSelector, String> {
        ThemeSelector::new(self.styles.iter().cloned(), &self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.plan_path, "/api/plan");
        assert_eq!(config.server.timeout_ms, None);
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.map.center, [20.0, 0.0]);
        assert_eq!(config.map.zoom, 2);
        assert!(!config.map.scroll_wheel_zoom);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
server:
  base-url: https://trips.example.com
  timeout-ms: 30000
map:
  zoom: 3
themes:
  styles: [chill, wild]
  default: wild
log-level: debug
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.base_url, "https://trips.example.com");
        assert_eq!(config.server.plan_path, "/api/plan");
        assert_eq!(config.server.timeout_ms, Some(30_000));
        assert_eq!(config.map.zoom, 3);
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.themes.default, "wild");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_default_theme() {
        let mut config = Config::default();
        config.themes.default = "luxury".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_styles() {
        let mut config = Config::default();
        config.themes.styles = vec!["relaxed".to_string(), "adventure".to_string(), "relaxed".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate theme: relaxed"));
    }

    #[test]
    fn test_validate_rejects_relative_audio_path() {
        let mut config = Config::default();
        config.server.audio_path = "api/chapter/{id}/audio".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.server.base_url = "trips.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tripstory.yml");
        fs::write(&path, "server:\n  base-url: http://localhost:9000\nlog-level: warn\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.base_url, "http://localhost:9000");
        assert_eq!(Config::load_log_level(Some(&path)).as_deref(), Some("warn"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yml");
        assert!(Config::load(Some(&path)).is_err());
        assert_eq!(Config::load_log_level(Some(&path)), None);
    }
}
