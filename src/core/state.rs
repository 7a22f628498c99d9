use bevy::prelude::*;

use crate::config::{BuoyancyConfig, SliderRange};
use crate::error::{BuoyancyError, ConfigError, Quantity, Result};
use crate::materials::Preset;
use crate::math::Real;

use super::calculator::{BuoyancyInput, BuoyancyResult, calculate};
use super::status::BuoyancyStatus;

/// Which of the two user-controlled densities an input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityKind {
    Object,
    Fluid,
}

/// User-controlled session state. Densities only change through the setters.
#[derive(Resource, Debug, Clone)]
pub struct BuoyancyState {
    object_density: Real,
    fluid_density: Real,
    volume: Real,
    gravity: Real,
    object_slider: SliderRange,
    fluid_slider: SliderRange,
}

impl Default for BuoyancyState {
    fn default() -> Self {
        Self::from_checked(&BuoyancyConfig::default())
    }
}

impl BuoyancyState {
    /// Start a session from `config`, which must pass validation.
    pub fn from_config(config: &BuoyancyConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_checked(config))
    }

    fn from_checked(config: &BuoyancyConfig) -> Self {
        Self {
            object_density: config.initial_object_density,
            fluid_density: config.initial_fluid_density,
            volume: config.volume,
            gravity: config.gravity,
            object_slider: config.object_slider,
            fluid_slider: config.fluid_slider,
        }
    }

    pub fn object_density(&self) -> Real {
        self.object_density
    }

    pub fn fluid_density(&self) -> Real {
        self.fluid_density
    }

    pub fn density(&self, kind: DensityKind) -> Real {
        match kind {
            DensityKind::Object => self.object_density,
            DensityKind::Fluid => self.fluid_density,
        }
    }

    pub fn volume(&self) -> Real {
        self.volume
    }

    pub fn gravity(&self) -> Real {
        self.gravity
    }

    pub fn slider(&self, kind: DensityKind) -> &SliderRange {
        match kind {
            DensityKind::Object => &self.object_slider,
            DensityKind::Fluid => &self.fluid_slider,
        }
    }

    /// Set a density directly. Rejects non-positive and non-finite values.
    pub fn set_density(&mut self, kind: DensityKind, density: Real) -> Result<()> {
        if !(density.is_finite() && density > 0.0) {
            return Err(match kind {
                DensityKind::Fluid if !(density > 0.0) => {
                    BuoyancyError::NonPositiveFluidDensity(density)
                }
                DensityKind::Fluid => BuoyancyError::InvalidInput {
                    quantity: Quantity::FluidDensity,
                    value: density,
                },
                DensityKind::Object => BuoyancyError::InvalidInput {
                    quantity: Quantity::ObjectDensity,
                    value: density,
                },
            });
        }

        match kind {
            DensityKind::Object => self.object_density = density,
            DensityKind::Fluid => self.fluid_density = density,
        }
        Ok(())
    }

    pub fn set_object_density(&mut self, density: Real) -> Result<()> {
        self.set_density(DensityKind::Object, density)
    }

    pub fn set_fluid_density(&mut self, density: Real) -> Result<()> {
        self.set_density(DensityKind::Fluid, density)
    }

    /// Set a density from a slider track position in [0, 1].
    pub fn set_from_slider(&mut self, kind: DensityKind, fraction: Real) -> Result<()> {
        let value = self.slider(kind).value_at(fraction);
        self.set_density(kind, value)
    }

    /// Move a density by whole slider steps, staying inside the slider range.
    pub fn nudge(&mut self, kind: DensityKind, steps: i32) -> Result<()> {
        let value = self.slider(kind).step_from(self.density(kind), steps);
        self.set_density(kind, value)
    }

    /// Apply a catalog entry. The exact preset density is kept even when it
    /// lies outside the slider range.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<()> {
        self.set_density(preset.kind, preset.density)
    }

    pub fn input(&self) -> BuoyancyInput {
        BuoyancyInput::new(
            self.object_density,
            self.fluid_density,
            self.volume,
            self.gravity,
        )
    }

    pub fn evaluate(&self) -> Result<BuoyancyResult> {
        calculate(&self.input())
    }
}

/// Derived readings for the current [`BuoyancyState`].
///
/// Starts zeroed and is filled by [`recompute_result`] on the first update.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationResult {
    pub result: BuoyancyResult,
    pub status: BuoyancyStatus,
}

impl SimulationResult {
    pub fn new(result: BuoyancyResult) -> Self {
        Self {
            status: result.status(),
            result,
        }
    }

    pub fn from_state(state: &BuoyancyState) -> Result<Self> {
        state.evaluate().map(Self::new)
    }
}

/// Recompute the readings whenever the session state changed.
pub fn recompute_result(
    state: Res<BuoyancyState>,
    mut current: ResMut<SimulationResult>,
    mut last_status: Local<Option<BuoyancyStatus>>,
) {
    if !state.is_changed() {
        return;
    }

    match SimulationResult::from_state(&state) {
        Ok(next) => {
            debug!(
                "recomputed: rho_o={:.0} rho_l={:.0} W={:.2}N Fb={:.2}N frac={:.3}",
                state.object_density(),
                state.fluid_density(),
                next.result.weight,
                next.result.buoyant_force,
                next.result.submerged_fraction
            );

            if let Some(previous) = *last_status {
                if previous != next.status {
                    info!("Block status changed: {:?} -> {:?}", previous, next.status);
                }
            }
            *last_status = Some(next.status);

            if *current != next {
                *current = next;
            }
        }
        Err(e) => {
            warn!("Keeping previous buoyancy readings: {}", e);
        }
    }
}
