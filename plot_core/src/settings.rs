//! # Plot Settings
//!
//! Tunables shared by the GUI and CLI. Settings are plain JSON; every field
//! is optional and falls back to its default.
//!
//! ```json
//! {
//!   "point_count": 200,
//!   "default_min": -5.0,
//!   "default_max": 5.0
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PlotterError, PlotterResult};
use crate::input::{BOUND_MAX, BOUND_MIN};
use crate::sampler::DEFAULT_POINT_COUNT;

/// Plot tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Number of sample points per curve
    pub point_count: usize,

    /// Initial value of the min bound field
    pub default_min: f64,

    /// Initial value of the max bound field
    pub default_max: f64,

    /// Lowest value a bound field accepts
    pub bound_min: f64,

    /// Highest value a bound field accepts
    pub bound_max: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            default_min: -10.0,
            default_max: 10.0,
            bound_min: BOUND_MIN,
            bound_max: BOUND_MAX,
        }
    }
}

impl PlotSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json_str(json: &str) -> PlotterResult<Self> {
        let settings: PlotSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> PlotterResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| PlotterError::file_error("read", path.display().to_string(), e.to_string()))?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded plot settings");
        Ok(settings)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> PlotterResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> PlotterResult<()> {
        if self.point_count < 2 {
            return Err(PlotterError::invalid_setting(
                "point_count",
                self.point_count.to_string(),
                "At least 2 points are needed to draw a line",
            ));
        }
        for (field, value) in [
            ("default_min", self.default_min),
            ("default_max", self.default_max),
            ("bound_min", self.bound_min),
            ("bound_max", self.bound_max),
        ] {
            if !value.is_finite() {
                return Err(PlotterError::invalid_setting(field, value.to_string(), "Must be a finite number"));
            }
        }
        if self.bound_min >= self.bound_max {
            return Err(PlotterError::invalid_setting(
                "bound_min",
                self.bound_min.to_string(),
                "Must be less than bound_max",
            ));
        }
        for (field, value) in [("default_min", self.default_min), ("default_max", self.default_max)] {
            if value < self.bound_min || value > self.bound_max {
                return Err(PlotterError::invalid_setting(
                    field,
                    value.to_string(),
                    format!("Must lie within [{}, {}]", self.bound_min, self.bound_max),
                ));
            }
        }
        Ok(())
    }

    /// Clamp a typed bound into this configuration's limits.
    pub fn clamp_bound(&self, value: f64) -> f64 {
        crate::input::clamp_bound_to(value, self.bound_min, self.bound_max)
    }

    /// Parse a bound field's text the way a numeric spinner would.
    pub fn parse_bound(&self, text: &str) -> f64 {
        crate::input::parse_bound_to(text, self.bound_min, self.bound_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = PlotSettings::default();
        assert_eq!(settings.point_count, 50);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = PlotSettings::from_json_str(r#"{ "point_count": 200 }"#).unwrap();
        assert_eq!(
            settings,
            PlotSettings {
                point_count: 200,
                ..PlotSettings::default()
            }
        );
    }

    #[test]
    fn test_rejects_too_few_points() {
        let err = PlotSettings::from_json_str(r#"{ "point_count": 1 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SETTING");
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = PlotSettings::from_json_str(r#"{ "bound_min": 5.0, "bound_max": 1.0 }"#).unwrap_err();
        assert!(matches!(err, PlotterError::InvalidSetting { ref field, .. } if field == "bound_min"));
    }

    #[test]
    fn test_rejects_default_outside_bounds() {
        let err = PlotSettings::from_json_str(r#"{ "default_max": 20000.0 }"#).unwrap_err();
        assert!(matches!(err, PlotterError::InvalidSetting { ref field, .. } if field == "default_max"));
    }

    #[test]
    fn test_malformed_json() {
        let err = PlotSettings::from_json_str("{ point_count: ").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_min": -2.5, "default_max": 2.5 }}"#).unwrap();

        let settings = PlotSettings::load(file.path()).unwrap();
        assert_eq!(settings.default_min, -2.5);
        assert_eq!(settings.default_max, 2.5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PlotSettings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(PlotSettings::load_or_default(None).unwrap(), PlotSettings::default());
    }

    #[test]
    fn test_custom_bound_limits() {
        let settings = PlotSettings {
            bound_min: -100.0,
            bound_max: 100.0,
            ..PlotSettings::default()
        };
        assert_eq!(settings.parse_bound("500"), 100.0);
        assert_eq!(settings.parse_bound("-1.23456"), -1.23);
    }

    #[test]
    fn test_bound_limits_wider_than_spinner_default() {
        let settings = PlotSettings::from_json_str(
            r#"{ "bound_min": -50000.0, "bound_max": 50000.0, "default_max": 20000.0 }"#,
        )
        .unwrap();
        assert_eq!(settings.parse_bound("20000"), 20000.0);
        assert_eq!(settings.clamp_bound(settings.default_max), 20000.0);
        assert_eq!(settings.parse_bound("-99999.999"), -50000.0);
    }
}
