//! Configuration and parameters
//!
//! Physical constants, slider ranges and the session config loader.

pub mod buoyancy_config;
pub mod constants;

pub use buoyancy_config::*;
pub use constants::*;
