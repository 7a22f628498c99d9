//! Density classes for the block and tint selection for the fluid.

use crate::math::Real;

use super::palette::Swatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityCategory {
    VeryLight,
    Light,
    NeutralLight,
    Medium,
    Heavy,
}

impl DensityCategory {
    /// Upper bounds are inclusive (kg/m³).
    pub fn of(density: Real) -> Self {
        if density <= 500.0 {
            Self::VeryLight
        } else if density <= 800.0 {
            Self::Light
        } else if density <= 1000.0 {
            Self::NeutralLight
        } else if density <= 2000.0 {
            Self::Medium
        } else {
            Self::Heavy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLight => "Very light",
            Self::Light => "Light",
            Self::NeutralLight => "Neutral/light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        }
    }

    pub fn swatch(&self) -> Swatch {
        match self {
            Self::VeryLight => Swatch::Yellow400,
            Self::Light => Swatch::Amber500,
            Self::NeutralLight => Swatch::Blue300,
            Self::Medium => Swatch::Red600,
            Self::Heavy => Swatch::Gray700,
        }
    }
}

/// Tint of the fluid in the tank; denser fluids get darker.
pub fn fluid_swatch(fluid_density: Real) -> Swatch {
    if fluid_density > 1200.0 {
        Swatch::Purple800
    } else if fluid_density > 1000.0 {
        Swatch::Blue700
    } else {
        Swatch::Blue500
    }
}
