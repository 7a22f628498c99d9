//! Materials and fluids
//!
//! * `presets` - fixed catalogs of block materials and fluids
//! * `category` - coarse density classes used for coloring
//! * `palette` - display swatches shared by both

pub mod category;
pub mod palette;
pub mod presets;

pub use category::{DensityCategory, fluid_swatch};
pub use palette::Swatch;
pub use presets::{FLUID_PRESETS, MATERIAL_PRESETS, Preset, catalog, custom_preset, find_preset};
