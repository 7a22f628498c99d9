// Physical constants and input ranges for the buoyancy lab
use crate::config::SliderRange;
use crate::math::Real;

// Standard gravity (m/s²)
pub const GRAVITY: Real = 9.81;

// Fixed block volume (m³), 100 litres
pub const BLOCK_VOLUME: Real = 0.1;

// Slider ranges (kg/m³)
pub const FLUID_DENSITY_RANGE: SliderRange = SliderRange::new(500.0, 2000.0, 50.0);
pub const OBJECT_DENSITY_RANGE: SliderRange = SliderRange::new(100.0, 8000.0, 50.0);

// Session start: a wooden-ish block in fresh water
pub const INITIAL_FLUID_DENSITY: Real = 1000.0;
pub const INITIAL_OBJECT_DENSITY: Real = 800.0;
