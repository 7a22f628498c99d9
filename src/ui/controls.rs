//! Input systems. Each one only touches [`BuoyancyState`] through its setters.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::core::{BuoyancyState, DensityKind};
use crate::materials::catalog;
use crate::math::Real;

use super::layout::{DensitySlider, PresetButton};

const MATERIAL_KEYS: [KeyCode; 7] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
];

const FLUID_KEYS: [KeyCode; 6] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
];

/// Track position in [0, 1] from the node-centered cursor x in [-0.5, 0.5].
#[inline]
pub fn track_fraction(centered_x: Real) -> Real {
    (centered_x + 0.5).clamp(0.0, 1.0)
}

pub fn slider_input(
    sliders: Query<(&Interaction, &RelativeCursorPosition, &DensitySlider)>,
    mut state: ResMut<BuoyancyState>,
) {
    for (interaction, cursor, slider) in &sliders {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(position) = cursor.normalized else {
            continue;
        };

        let kind = slider.0;
        let fraction = track_fraction(position.x);
        // Holding the button still fires every frame; skip no-op writes
        if state.slider(kind).value_at(fraction) == state.density(kind) {
            continue;
        }
        if let Err(e) = state.set_from_slider(kind, fraction) {
            warn!("Slider value rejected: {}", e);
        }
    }
}

pub fn preset_input(
    buttons: Query<(&Interaction, &PresetButton), Changed<Interaction>>,
    mut state: ResMut<BuoyancyState>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            select_preset(&mut state, button.kind, button.index);
        }
    }
}

pub fn keyboard_input(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<BuoyancyState>) {
    let nudges = [
        (KeyCode::ArrowLeft, DensityKind::Object, -1),
        (KeyCode::ArrowRight, DensityKind::Object, 1),
        (KeyCode::ArrowDown, DensityKind::Fluid, -1),
        (KeyCode::ArrowUp, DensityKind::Fluid, 1),
    ];
    for (key, kind, steps) in nudges {
        if keyboard.just_pressed(key) {
            if let Err(e) = state.nudge(kind, steps) {
                warn!("Nudge rejected: {}", e);
            }
        }
    }

    for (index, key) in MATERIAL_KEYS.iter().enumerate() {
        if keyboard.just_pressed(*key) {
            select_preset(&mut state, DensityKind::Object, index);
        }
    }
    for (index, key) in FLUID_KEYS.iter().enumerate() {
        if keyboard.just_pressed(*key) {
            select_preset(&mut state, DensityKind::Fluid, index);
        }
    }
}

fn select_preset(state: &mut BuoyancyState, kind: DensityKind, index: usize) {
    let Some(preset) = catalog(kind).get(index) else {
        return;
    };
    match state.apply_preset(preset) {
        Ok(()) => info!("Selected preset {}", preset.label),
        Err(e) => warn!("Preset {} rejected: {}", preset.label, e),
    }
}
