use std::path::Path;

use bevy::log::{error, info, warn};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::constants;
use crate::error::ConfigError;
use crate::math::{Real, inverse_lerp, lerp};

/// Config file looked up in the working directory at startup.
pub const DEFAULT_CONFIG_PATH: &str = "buoyancy.ron";

const EMBEDDED_CONFIG: &str = include_str!("../../buoyancy.ron");

/// Range and granularity of a density slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: Real,
    pub max: Real,
    pub step: Real,
}

impl SliderRange {
    pub const fn new(min: Real, max: Real, step: Real) -> Self {
        Self { min, max, step }
    }

    #[inline]
    pub fn clamp(&self, value: Real) -> Real {
        value.clamp(self.min, self.max)
    }

    /// Round to the nearest step counted from `min`, then clamp.
    pub fn snap(&self, value: Real) -> Real {
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    /// Slider value under a track position in [0, 1].
    pub fn value_at(&self, fraction: Real) -> Real {
        self.snap(lerp(self.min, self.max, fraction.clamp(0.0, 1.0)))
    }

    /// Track position of `value`; out-of-range values pin to an end.
    pub fn fraction_of(&self, value: Real) -> Real {
        inverse_lerp(self.min, self.max, value)
    }

    /// Move `steps` slider steps away from `value`, landing on the grid.
    ///
    /// An off-grid value first moves to the neighbouring grid point in the
    /// direction of travel.
    pub fn step_from(&self, value: Real, steps: i32) -> Real {
        let position = (value - self.min) / self.step;
        let base = if steps >= 0 {
            position.floor()
        } else {
            position.ceil()
        };
        self.clamp(self.min + (base + steps as Real) * self.step)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !finite || self.min <= 0.0 || self.max <= self.min || self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{name} needs 0 < min < max and step > 0, got min={} max={} step={}",
                self.min, self.max, self.step
            )));
        }
        Ok(())
    }
}

/// Session-wide settings. Volume and gravity stay fixed for the whole run.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancyConfig {
    /// Block volume in m³
    pub volume: Real,
    /// Gravitational acceleration in m/s²
    pub gravity: Real,
    pub fluid_slider: SliderRange,
    pub object_slider: SliderRange,
    pub initial_fluid_density: Real,
    pub initial_object_density: Real,
}

impl Default for BuoyancyConfig {
    fn default() -> Self {
        Self {
            volume: constants::BLOCK_VOLUME,
            gravity: constants::GRAVITY,
            fluid_slider: constants::FLUID_DENSITY_RANGE,
            object_slider: constants::OBJECT_DENSITY_RANGE,
            initial_fluid_density: constants::INITIAL_FLUID_DENSITY,
            initial_object_density: constants::INITIAL_OBJECT_DENSITY,
        }
    }
}

impl BuoyancyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("volume", self.volume),
            ("gravity", self.gravity),
            ("initial_fluid_density", self.initial_fluid_density),
            ("initial_object_density", self.initial_object_density),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        self.fluid_slider.validate("fluid_slider")?;
        self.object_slider.validate("object_slider")?;
        Ok(())
    }

    /// Parse and validate a RON document.
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load from `path`, falling back to the embedded default file.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => {
                    info!("Loaded buoyancy config from {:?}", path);
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load buoyancy config: {}. Using embedded default.", e);
                }
            }
        } else {
            info!("No config at {:?}, using embedded default", path);
        }

        Self::embedded_default()
    }

    fn embedded_default() -> Self {
        match Self::from_ron_str(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                error!("Embedded buoyancy config is invalid: {}. Using hardcoded default.", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_matches_hardcoded_default() {
        let embedded = BuoyancyConfig::from_ron_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(embedded, BuoyancyConfig::default());
    }

    #[test]
    fn partial_document_fills_in_defaults() {
        let config = BuoyancyConfig::from_ron_str("(gravity: 1.62)").unwrap();
        assert_eq!(config.gravity, 1.62);
        assert_eq!(config.volume, constants::BLOCK_VOLUME);
        assert_eq!(config.fluid_slider, constants::FLUID_DENSITY_RANGE);
    }

    #[test]
    fn rejects_zero_gravity() {
        let err = BuoyancyConfig::from_ron_str("(gravity: 0.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_slider_reaching_zero() {
        let err = BuoyancyConfig::from_ron_str("(fluid_slider: (min: 0.0, max: 2000.0, step: 50.0))")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = BuoyancyConfig::from_ron_str("(volume: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = BuoyancyConfig::load_or_default("does/not/exist.ron");
        assert_eq!(config, BuoyancyConfig::default());
    }

    #[test]
    fn snap_lands_on_step_grid() {
        let range = constants::OBJECT_DENSITY_RANGE;
        assert_eq!(range.snap(917.0), 900.0);
        assert_eq!(range.snap(930.0), 950.0);
        assert_eq!(range.snap(9000.0), 8000.0);
        assert_eq!(range.snap(20.0), 100.0);
    }

    #[test]
    fn value_at_track_ends() {
        let range = constants::FLUID_DENSITY_RANGE;
        assert_eq!(range.value_at(0.0), 500.0);
        assert_eq!(range.value_at(1.0), 2000.0);
        assert_eq!(range.value_at(0.5), 1250.0);
        assert_eq!(range.value_at(-3.0), 500.0);
    }

    #[test]
    fn step_from_off_grid_value_moves_in_requested_direction() {
        let range = constants::OBJECT_DENSITY_RANGE;
        assert_eq!(range.step_from(917.0, 1), 950.0);
        assert_eq!(range.step_from(917.0, -1), 900.0);
        assert_eq!(range.step_from(100.0, -1), 100.0);
    }

    #[test]
    fn fluid_minimum_keeps_density_away_from_zero() {
        let range = constants::FLUID_DENSITY_RANGE;
        for i in 0..=100 {
            assert!(range.value_at(i as Real / 100.0) >= 500.0);
        }
        assert!(range.step_from(range.min, -10) > 0.0);
    }
}
