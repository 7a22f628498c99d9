//! Fixed catalogs of block materials and fluids (densities in kg/m³).
//!
//! The first entry of each catalog is the "custom" sentinel. It stands for
//! any density that no other entry matches; selecting it restores its
//! default density.

use crate::core::DensityKind;
use crate::math::Real;

use super::palette::Swatch;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub density: Real,
    pub swatch: Swatch,
    pub kind: DensityKind,
    pub custom: bool,
}

impl Preset {
    const fn material(label: &'static str, density: Real, swatch: Swatch) -> Self {
        Self {
            label,
            density,
            swatch,
            kind: DensityKind::Object,
            custom: false,
        }
    }

    const fn fluid(label: &'static str, density: Real, swatch: Swatch) -> Self {
        Self {
            label,
            density,
            swatch,
            kind: DensityKind::Fluid,
            custom: false,
        }
    }

    const fn as_custom(mut self) -> Self {
        self.custom = true;
        self
    }

    /// Menu text, e.g. `Ice (917)`. The custom sentinel shows no number.
    pub fn menu_label(&self) -> String {
        if self.custom {
            self.label.to_string()
        } else {
            format!("{} ({:.0})", self.label, self.density)
        }
    }
}

pub static MATERIAL_PRESETS: [Preset; 7] = [
    Preset::material("Custom (block)", 800.0, Swatch::Amber500).as_custom(),
    Preset::material("Wood", 800.0, Swatch::Amber500),
    Preset::material("Ice", 917.0, Swatch::Blue300),
    Preset::material("Water", 1000.0, Swatch::Blue500),
    Preset::material("Brick", 1800.0, Swatch::Red600),
    Preset::material("Aluminium", 2700.0, Swatch::Gray400),
    Preset::material("Iron", 7870.0, Swatch::Gray700),
];

pub static FLUID_PRESETS: [Preset; 6] = [
    Preset::fluid("Custom (fluid)", 1000.0, Swatch::Blue500).as_custom(),
    Preset::fluid("Kerosene", 820.0, Swatch::Yellow800),
    Preset::fluid("Fresh water", 1000.0, Swatch::Blue500),
    Preset::fluid("Salt water", 1025.0, Swatch::Blue700),
    Preset::fluid("Glycerine", 1260.0, Swatch::Purple800),
    Preset::fluid("Mercury", 13534.0, Swatch::Gray900),
];

pub fn catalog(kind: DensityKind) -> &'static [Preset] {
    match kind {
        DensityKind::Object => &MATERIAL_PRESETS,
        DensityKind::Fluid => &FLUID_PRESETS,
    }
}

pub fn custom_preset(kind: DensityKind) -> &'static Preset {
    &catalog(kind)[0]
}

/// Catalog entry with exactly this density, or the custom sentinel.
pub fn find_preset(kind: DensityKind, density: Real) -> &'static Preset {
    catalog(kind)
        .iter()
        .find(|preset| !preset.custom && preset.density == density)
        .unwrap_or_else(|| custom_preset(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_expected_sizes_and_sentinels() {
        assert_eq!(MATERIAL_PRESETS.len(), 7);
        assert_eq!(FLUID_PRESETS.len(), 6);
        for kind in [DensityKind::Object, DensityKind::Fluid] {
            let presets = catalog(kind);
            assert!(presets[0].custom);
            assert_eq!(presets.iter().filter(|p| p.custom).count(), 1);
            assert!(presets.iter().all(|p| p.kind == kind && p.density > 0.0));
        }
    }

    #[test]
    fn exact_density_finds_named_preset() {
        assert_eq!(find_preset(DensityKind::Object, 917.0).label, "Ice");
        assert_eq!(find_preset(DensityKind::Fluid, 1025.0).label, "Salt water");
    }

    #[test]
    fn shared_density_prefers_named_entry_over_sentinel() {
        assert_eq!(find_preset(DensityKind::Object, 800.0).label, "Wood");
        assert_eq!(find_preset(DensityKind::Fluid, 1000.0).label, "Fresh water");
    }

    #[test]
    fn unmatched_density_is_custom() {
        let preset = find_preset(DensityKind::Object, 850.0);
        assert!(preset.custom);
        assert_eq!(preset.label, "Custom (block)");
        assert!(find_preset(DensityKind::Fluid, 1250.0).custom);
    }

    #[test]
    fn menu_label_includes_density() {
        assert_eq!(MATERIAL_PRESETS[2].menu_label(), "Ice (917)");
        assert_eq!(FLUID_PRESETS[0].menu_label(), "Custom (fluid)");
    }
}
