//! Configuration settings for airfreight.

use super::places::{self, default_places, Place};
use crate::error::{AirfreightError, Result};
use crate::estimator::DEFAULT_CRUISING_SPEED_KMH;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub estimator: EstimatorSettings,
    pub survey: SurveySettings,
    pub places: BTreeMap<String, PlaceSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            estimator: EstimatorSettings::default(),
            survey: SurveySettings::default(),
            places: default_places()
                .into_iter()
                .map(|p| {
                    let entry = PlaceSettings {
                        label: p.label,
                        kind: p.kind,
                        latitude: p.latitude,
                        longitude: p.longitude,
                    };
                    (p.key, entry)
                })
                .collect(),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Estimator settings for the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Cruising speed used when `--speed` is not given.
    pub default_speed_kmh: f64,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            default_speed_kmh: DEFAULT_CRUISING_SPEED_KMH,
        }
    }
}

/// Survey settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySettings {
    /// Place key or `lat,lon` used when no origin is given.
    pub origin: String,
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            origin: "gotham".to_string(),
        }
    }
}

/// A catalog entry as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSettings {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Settings {
    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path(),
        };

        let settings = if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str::<Settings>(&content)?
        } else {
            Settings::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AirfreightError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("airfreight")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    fn validate(&self) -> Result<()> {
        let speed = self.estimator.default_speed_kmh;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(AirfreightError::Config(format!(
                "estimator.default_speed_kmh must be positive, got {}",
                speed
            )));
        }

        for (key, place) in &self.places {
            GeoPoint::new(place.latitude, place.longitude)
                .validate()
                .map_err(|e| AirfreightError::Config(format!("places.{}: {}", key, e)))?;
        }

        Ok(())
    }

    /// The catalog in key order.
    pub fn places(&self) -> Vec<Place> {
        self.places
            .iter()
            .map(|(key, p)| {
                let label = if p.label.is_empty() { key } else { &p.label };
                Place::new(key, label, &p.kind, GeoPoint::new(p.latitude, p.longitude))
            })
            .collect()
    }

    /// Resolve a place key or `lat,lon` pair against the catalog.
    pub fn resolve_point(&self, input: &str) -> Result<GeoPoint> {
        places::resolve(input, &self.places())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.estimator.default_speed_kmh, 750.0);
        assert_eq!(settings.survey.origin, "gotham");
        assert_eq!(settings.places().len(), default_places().len());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(Some(dir.path().join("nope.toml").as_path())).unwrap();
        assert_eq!(settings.general.log_level, "warn");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.estimator.default_speed_kmh = 820.0;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.estimator.default_speed_kmh, 820.0);
        assert_eq!(loaded.places.len(), settings.places.len());
    }

    #[test]
    fn test_places_table_replaces_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[survey]
origin = "wayne_manor"

[places.wayne_manor]
label = "Wayne Manor"
latitude = 41.0
longitude = -73.9

[places.arkham]
kind = "asylum"
latitude = 40.8
longitude = -73.95
"#,
        )
        .unwrap();

        let settings = Settings::load_from(Some(path.as_path())).unwrap();
        let places = settings.places();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].key, "arkham");
        assert_eq!(places[0].label, "arkham");
        assert_eq!(places[1].label, "Wayne Manor");
        assert_eq!(
            settings.resolve_point(&settings.survey.origin).unwrap(),
            GeoPoint::new(41.0, -73.9)
        );
        assert!(settings.resolve_point("gotham").is_err());
    }

    #[test]
    fn test_rejects_bad_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[estimator]\ndefault_speed_kmh = -5.0\n").unwrap();

        let err = Settings::load_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, AirfreightError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[estimator\n").unwrap();

        let err = Settings::load_from(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, AirfreightError::TomlParse(_)));
    }
}
