//! Configuration structs with defaults, validation, and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings, passed through to the rendering collaborator.
    pub window: WindowConfig,
    /// Globe contents and idle behavior.
    pub globe: GlobeConfig,
    /// Scripted sequence of navigations for headless runs.
    pub tour: TourConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// A labeled location shown as a marker on the globe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    /// Marker label.
    pub label: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl LocationConfig {
    fn new(label: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            label: label.to_string(),
            latitude,
            longitude,
        }
    }
}

/// Globe configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Rotate the camera around the globe while idle.
    pub auto_rotate: bool,
    /// Locations to place markers at.
    pub markers: Vec<LocationConfig>,
}

/// Tour configuration: which regions to visit and how long to stay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TourConfig {
    /// Region names, visited in order.
    pub stops: Vec<String>,
    /// Seconds between consecutive navigation requests.
    pub seconds_per_stop: f64,
    /// Total simulated seconds for a headless run.
    pub run_seconds: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Emit the debug panel snapshot while running.
    pub show_panel: bool,
    /// Frames between debug panel snapshots.
    pub panel_interval_frames: u32,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Terra".to_string(),
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            markers: vec![
                LocationConfig::new("New York", 40.71, -74.01),
                LocationConfig::new("S\u{e3}o Paulo", -23.55, -46.63),
                LocationConfig::new("London", 51.51, -0.13),
                LocationConfig::new("Nairobi", -1.29, 36.82),
                LocationConfig::new("Tokyo", 35.68, 139.69),
            ],
        }
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            stops: ["europe", "africa", "asia", "north_america", "south_america"]
                .into_iter()
                .map(String::from)
                .collect(),
            seconds_per_stop: 3.0,
            run_seconds: 16.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_panel: false,
            panel_interval_frames: 30,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::path_in(config_dir);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = Self::path_in(config_dir);
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&Self::path_in(config_dir))?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values that parse but cannot drive the viewer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tour.seconds_per_stop.is_finite() && self.tour.seconds_per_stop > 0.0) {
            return Err(ConfigError::Invalid {
                field: "tour.seconds_per_stop",
                reason: format!("must be positive, got {}", self.tour.seconds_per_stop),
            });
        }
        if !(self.tour.run_seconds.is_finite() && self.tour.run_seconds >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "tour.run_seconds",
                reason: format!("must be non-negative, got {}", self.tour.run_seconds),
            });
        }
        if self.debug.panel_interval_frames == 0 {
            return Err(ConfigError::Invalid {
                field: "debug.panel_interval_frames",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(bad) = self
            .globe
            .markers
            .iter()
            .find(|m| !(m.latitude.is_finite() && m.longitude.is_finite()))
        {
            return Err(ConfigError::Invalid {
                field: "globe.markers",
                reason: format!("marker '{}' has a non-finite coordinate", bad.label),
            });
        }
        Ok(())
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("seconds_per_stop: 3.0"));
        assert!(ron_str.contains("\"europe\""));
        assert!(ron_str.contains("label: \"Tokyo\""));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(debug: (show_panel: true))").unwrap();
        assert!(config.debug.show_panel);
        assert_eq!(config.debug.panel_interval_frames, 30);
        assert_eq!(config.tour, TourConfig::default());
        assert_eq!(config.globe.markers.len(), 5);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_custom_markers_parse() {
        let ron_str = r#"(globe: (markers: [(label: "Reykjavik", latitude: 64.1, longitude: -21.9)]))"#;
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.globe.markers.len(), 1);
        assert_eq!(config.globe.markers[0].label, "Reykjavik");
        assert!(config.globe.auto_rotate);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.tour.stops = vec!["asia".to_string()];
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(Config::path_in(dir.path()).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.tour.seconds_per_stop = 5.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().tour.seconds_per_stop, 5.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path_in(dir.path()), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.ron"));
    }

    #[test]
    fn test_validation_rejects_zero_stop_length() {
        let mut config = Config::default();
        config.tour.seconds_per_stop = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "tour.seconds_per_stop",
                ..
            }
        ));
    }

    #[test]
    fn test_validation_rejects_zero_panel_interval() {
        let mut config = Config::default();
        config.debug.panel_interval_frames = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// viewer settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
