//! Buoyancy of a homogeneous block at static equilibrium.
//!
//! The block either floats (partially submerged, buoyant force balancing its
//! weight) or is fully submerged, in which case the buoyant force is the
//! weight of a full block volume of fluid.

use crate::error::{BuoyancyError, Quantity, Result};
use crate::math::Real;

use super::status::BuoyancyStatus;

/// Inputs of a single buoyancy evaluation, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuoyancyInput {
    /// kg/m³
    pub object_density: Real,
    /// kg/m³
    pub fluid_density: Real,
    /// m³
    pub volume: Real,
    /// m/s²
    pub gravity: Real,
}

impl BuoyancyInput {
    pub const fn new(object_density: Real, fluid_density: Real, volume: Real, gravity: Real) -> Self {
        Self {
            object_density,
            fluid_density,
            volume,
            gravity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.fluid_density > 0.0) {
            return Err(BuoyancyError::NonPositiveFluidDensity(self.fluid_density));
        }

        let quantities = [
            (Quantity::ObjectDensity, self.object_density),
            (Quantity::FluidDensity, self.fluid_density),
            (Quantity::Volume, self.volume),
            (Quantity::Gravity, self.gravity),
        ];
        for (quantity, value) in quantities {
            if !(value.is_finite() && value > 0.0) {
                return Err(BuoyancyError::InvalidInput { quantity, value });
            }
        }
        Ok(())
    }
}

/// Forces and submersion derived from a [`BuoyancyInput`]. Forces in newtons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BuoyancyResult {
    pub weight: Real,
    pub buoyant_force: Real,
    /// Weight minus buoyant force; positive means the block sinks.
    pub net_force: Real,
    /// Share of the block volume below the surface, in [0, 1].
    pub submerged_fraction: Real,
    /// Object density over fluid density.
    pub density_ratio: Real,
    pub is_sinking: bool,
}

impl BuoyancyResult {
    pub fn status(&self) -> BuoyancyStatus {
        BuoyancyStatus::classify(self.is_sinking, self.submerged_fraction)
    }
}

/// Evaluate the equilibrium forces on the block.
pub fn calculate(input: &BuoyancyInput) -> Result<BuoyancyResult> {
    input.validate()?;

    let weight = input.object_density * input.volume * input.gravity;
    let density_ratio = input.object_density / input.fluid_density;

    let (submerged_fraction, buoyant_force, is_sinking) = if density_ratio >= 1.0 {
        // Fully submerged: displaces its whole volume
        let displaced_weight = input.fluid_density * input.volume * input.gravity;
        (1.0, displaced_weight, density_ratio > 1.0)
    } else {
        // Floating equilibrium
        (density_ratio, weight, false)
    };

    Ok(BuoyancyResult {
        weight,
        buoyant_force,
        net_force: weight - buoyant_force,
        submerged_fraction,
        density_ratio,
        is_sinking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn water(object_density: Real) -> BuoyancyInput {
        BuoyancyInput::new(object_density, 1000.0, 0.1, 9.81)
    }

    #[test]
    fn floating_block_balances_weight() {
        let result = calculate(&water(800.0)).unwrap();
        assert_relative_eq!(result.weight, 784.8, max_relative = 1e-6);
        assert_eq!(result.buoyant_force, result.weight);
        assert_eq!(result.net_force, 0.0);
        assert_relative_eq!(result.submerged_fraction, 0.8);
        assert!(!result.is_sinking);
        assert_eq!(result.status(), BuoyancyStatus::Floating);
    }

    #[test]
    fn iron_sinks_in_water() {
        let result = calculate(&water(7870.0)).unwrap();
        assert_relative_eq!(result.weight, 7720.47, max_relative = 1e-5);
        assert_relative_eq!(result.density_ratio, 7.87, max_relative = 1e-6);
        assert_eq!(result.submerged_fraction, 1.0);
        assert_relative_eq!(result.buoyant_force, 981.0, max_relative = 1e-6);
        assert_relative_eq!(result.net_force, 6739.47, max_relative = 1e-5);
        assert!(result.is_sinking);
        assert_eq!(result.status(), BuoyancyStatus::Sinking);
    }

    #[test]
    fn equal_densities_are_neutral() {
        let result = calculate(&water(1000.0)).unwrap();
        assert_eq!(result.submerged_fraction, 1.0);
        assert_eq!(result.net_force, 0.0);
        assert_eq!(result.buoyant_force, result.weight);
        assert!(!result.is_sinking);
        assert_eq!(result.status(), BuoyancyStatus::Neutral);
    }

    #[test]
    fn zero_fluid_density_is_rejected() {
        let input = BuoyancyInput::new(800.0, 0.0, 0.1, 9.81);
        assert_eq!(
            calculate(&input),
            Err(BuoyancyError::NonPositiveFluidDensity(0.0))
        );
    }

    #[test]
    fn negative_volume_names_the_quantity() {
        let input = BuoyancyInput::new(800.0, 1000.0, -0.1, 9.81);
        assert_eq!(
            calculate(&input),
            Err(BuoyancyError::InvalidInput {
                quantity: Quantity::Volume,
                value: -0.1
            })
        );
    }

    #[test]
    fn infinite_object_density_is_rejected() {
        let input = BuoyancyInput::new(Real::INFINITY, 1000.0, 0.1, 9.81);
        assert!(matches!(
            calculate(&input),
            Err(BuoyancyError::InvalidInput {
                quantity: Quantity::ObjectDensity,
                ..
            })
        ));
    }
}
