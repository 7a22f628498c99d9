use std::path::PathBuf;

use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod materials;
pub mod math;
pub mod render;
pub mod ui;

// Public re-exports for clean API
pub use config::{BLOCK_VOLUME, BuoyancyConfig, DEFAULT_CONFIG_PATH, GRAVITY, SliderRange};
pub use crate::core::{
    BuoyancyInput, BuoyancyResult, BuoyancyState, BuoyancyStatus, DensityKind, SimulationResult,
    calculate,
};
pub use error::{BuoyancyError, ConfigError, Quantity};
pub use materials::{FLUID_PRESETS, MATERIAL_PRESETS, Preset, find_preset};
pub use ui::BuoyancyUiPlugin;

use crate::core::recompute_result;

enum ConfigSource {
    Inline(BuoyancyConfig),
    File(PathBuf),
}

/// Session state and readings, without any rendering.
pub struct BuoyancyPlugin {
    source: ConfigSource,
}

impl Default for BuoyancyPlugin {
    fn default() -> Self {
        Self::with_config(BuoyancyConfig::default())
    }
}

impl BuoyancyPlugin {
    pub fn with_config(config: BuoyancyConfig) -> Self {
        Self {
            source: ConfigSource::Inline(config),
        }
    }

    /// Read the config from a RON file when the plugin is built.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ConfigSource::File(path.into()),
        }
    }

    fn resolve_config(&self) -> BuoyancyConfig {
        match &self.source {
            ConfigSource::Inline(config) => config.clone(),
            ConfigSource::File(path) => BuoyancyConfig::load_or_default(path),
        }
    }

    /// Config plus the session built from it; an invalid config is replaced
    /// by the default one.
    fn resolve_session(&self) -> (BuoyancyConfig, BuoyancyState) {
        let config = self.resolve_config();
        match BuoyancyState::from_config(&config) {
            Ok(state) => (config, state),
            Err(e) => {
                warn!("Rejected buoyancy config: {}. Using default.", e);
                (BuoyancyConfig::default(), BuoyancyState::default())
            }
        }
    }
}

impl Plugin for BuoyancyPlugin {
    fn build(&self, app: &mut App) {
        let (config, state) = self.resolve_session();
        info!(
            "Buoyancy session: V={} m^3, g={} m/s^2, rho_o={}, rho_l={}",
            config.volume,
            config.gravity,
            config.initial_object_density,
            config.initial_fluid_density
        );

        app.insert_resource(state)
            .insert_resource(config)
            .init_resource::<SimulationResult>()
            .add_systems(Update, recompute_result);
    }
}
