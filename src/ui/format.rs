//! Text and colors for the readouts.
//!
//! Bevy's built-in font only covers ASCII, so units and symbols are spelled
//! out (`kg/m^3`, `rho_L`).

use bevy::prelude::*;

use crate::core::{BuoyancyResult, BuoyancyStatus, DensityKind};
use crate::materials::{DensityCategory, Preset, Swatch};
use crate::math::Real;

pub const WEIGHT_COLOR: Color = Color::srgb(0.863, 0.149, 0.149);
pub const BUOYANT_COLOR: Color = Color::srgb(0.086, 0.639, 0.290);
pub const NET_ALARM_COLOR: Color = Color::srgb(0.725, 0.110, 0.110);
pub const MUTED_TEXT_COLOR: Color = Color::srgb(0.216, 0.255, 0.318);
pub const SUBMERGED_COLOR: Color = Color::srgb(0.310, 0.275, 0.898);

pub fn format_density(density: Real) -> String {
    format!("{density:.0} kg/m^3")
}

pub fn format_force(newtons: Real) -> String {
    format!("{newtons:.2} N")
}

/// `fraction` in [0, 1], shown as a percentage with one decimal.
pub fn format_percentage(fraction: Real) -> String {
    format!("{:.1} %", fraction * 100.0)
}

pub fn density_heading(kind: DensityKind, density: Real) -> String {
    let (name, symbol) = match kind {
        DensityKind::Fluid => ("Fluid density", "rho_L"),
        DensityKind::Object => ("Block density", "rho_O"),
    };
    format!("{name} ({symbol}): {}", format_density(density))
}

/// "Selected: ..." line under a preset menu; empty for custom values.
pub fn selected_preset_line(preset: &Preset) -> String {
    if preset.custom {
        String::new()
    } else {
        format!("Selected: {}", preset.label)
    }
}

pub fn category_line(density: Real) -> String {
    format!("Current category: {}", DensityCategory::of(density).label())
}

pub fn constants_text(volume: Real, gravity: Real) -> String {
    format!("Volume (V_O): {volume:.3} m^3\nGravity (g): {gravity:.2} m/s^2")
}

pub fn fluid_tag(fluid_density: Real) -> String {
    format!("rho_L: {}", format_density(fluid_density))
}

/// Fill color of a slider track: the block follows its density category,
/// the fluid stays blue.
pub fn slider_accent(kind: DensityKind, density: Real) -> Swatch {
    match kind {
        DensityKind::Object => DensityCategory::of(density).swatch(),
        DensityKind::Fluid => Swatch::Blue500,
    }
}

/// A positive net force pulls the block down and gets highlighted.
pub fn net_force_emphasized(net_force: Real) -> bool {
    net_force > 0.0
}

/// One line of the results panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadoutKind {
    Weight,
    BuoyantForce,
    NetForce,
    Submerged,
}

impl ReadoutKind {
    pub const ALL: [ReadoutKind; 4] = [
        Self::Weight,
        Self::BuoyantForce,
        Self::NetForce,
        Self::Submerged,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Block weight W",
            Self::BuoyantForce => "Buoyant force F_b",
            Self::NetForce => "Net force W - F_b",
            Self::Submerged => "Submerged share",
        }
    }

    pub fn text(&self, result: &BuoyancyResult) -> String {
        let value = match self {
            Self::Weight => format_force(result.weight),
            Self::BuoyantForce => format_force(result.buoyant_force),
            Self::NetForce => format_force(result.net_force),
            Self::Submerged => format_percentage(result.submerged_fraction),
        };
        format!("{}: {}", self.label(), value)
    }

    pub fn color(&self, result: &BuoyancyResult) -> Color {
        match self {
            Self::Weight => WEIGHT_COLOR,
            Self::BuoyantForce => BUOYANT_COLOR,
            Self::NetForce if net_force_emphasized(result.net_force) => NET_ALARM_COLOR,
            Self::NetForce => MUTED_TEXT_COLOR,
            Self::Submerged => SUBMERGED_COLOR,
        }
    }
}

/// Background and text color of the status banner.
pub fn status_colors(status: BuoyancyStatus) -> (Color, Color) {
    match status {
        BuoyancyStatus::Sinking => (Color::srgb(0.996, 0.886, 0.886), Color::srgb(0.600, 0.106, 0.106)),
        BuoyancyStatus::Neutral => (Color::srgb(0.996, 0.976, 0.765), Color::srgb(0.522, 0.302, 0.055)),
        BuoyancyStatus::Floating => (Color::srgb(0.863, 0.988, 0.906), Color::srgb(0.086, 0.396, 0.204)),
    }
}
