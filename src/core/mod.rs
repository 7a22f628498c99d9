pub mod calculator;
pub mod state;
pub mod status;

pub use calculator::{BuoyancyInput, BuoyancyResult, calculate};
pub use state::{BuoyancyState, DensityKind, SimulationResult, recompute_result};
pub use status::BuoyancyStatus;
