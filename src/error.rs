//! Error types for the calculator and the configuration loader.

use std::fmt;

use thiserror::Error;

use crate::math::Real;

/// Physical quantity named in a [`BuoyancyError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    ObjectDensity,
    FluidDensity,
    Volume,
    Gravity,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ObjectDensity => "object density",
            Self::FluidDensity => "fluid density",
            Self::Volume => "volume",
            Self::Gravity => "gravity",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BuoyancyError {
    /// The density ratio would divide by zero (or flip sign).
    #[error("fluid density must be greater than zero, got {0} kg/m³")]
    NonPositiveFluidDensity(Real),

    #[error("{quantity} must be a positive finite number, got {value}")]
    InvalidInput { quantity: Quantity, value: Real },
}

pub type Result<T> = std::result::Result<T, BuoyancyError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
