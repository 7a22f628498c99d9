//! Systems mirroring the session state and readings into the widgets.

use bevy::prelude::*;

use crate::core::{BuoyancyState, SimulationResult};
use crate::materials::{catalog, find_preset};

use super::format::{self, ReadoutKind};
use super::layout::{
    CategoryText, DensityHeading, PRESET_IDLE_COLOR, PresetButton, SelectedPresetText, SliderFill,
    StatusBanner, StatusText,
};

pub fn update_density_widgets(
    state: Res<BuoyancyState>,
    mut headings: Query<(&DensityHeading, &mut Text), Without<SelectedPresetText>>,
    mut selected: Query<(&SelectedPresetText, &mut Text), Without<DensityHeading>>,
    mut fills: Query<(&SliderFill, &mut Node, &mut BackgroundColor)>,
) {
    if !state.is_changed() {
        return;
    }

    for (heading, mut text) in &mut headings {
        text.0 = format::density_heading(heading.0, state.density(heading.0));
    }

    for (line, mut text) in &mut selected {
        let preset = find_preset(line.0, state.density(line.0));
        text.0 = format::selected_preset_line(preset);
    }

    for (fill, mut node, mut color) in &mut fills {
        let density = state.density(fill.0);
        let fraction = state.slider(fill.0).fraction_of(density);
        node.width = Val::Percent(fraction * 100.0);
        color.0 = format::slider_accent(fill.0, density).color();
    }
}

pub fn update_category_text(
    state: Res<BuoyancyState>,
    mut texts: Query<&mut Text, With<CategoryText>>,
) {
    if !state.is_changed() {
        return;
    }
    for mut text in &mut texts {
        text.0 = format::category_line(state.object_density());
    }
}

/// Tint the menu entry matching the current density.
pub fn highlight_presets(
    state: Res<BuoyancyState>,
    mut buttons: Query<(&PresetButton, &Interaction, &mut BackgroundColor)>,
) {
    for (button, interaction, mut color) in &mut buttons {
        let preset = &catalog(button.kind)[button.index];
        let active = std::ptr::eq(find_preset(button.kind, state.density(button.kind)), preset);

        let next = if active {
            preset.swatch.color().with_alpha(0.45)
        } else if *interaction == Interaction::Hovered {
            preset.swatch.color().with_alpha(0.2)
        } else {
            PRESET_IDLE_COLOR
        };
        if color.0 != next {
            color.0 = next;
        }
    }
}

pub fn update_readouts(
    readings: Res<SimulationResult>,
    mut lines: Query<(&ReadoutKind, &mut Text, &mut TextColor), Without<StatusText>>,
    mut banner: Query<&mut BackgroundColor, With<StatusBanner>>,
    mut status_text: Query<(&mut Text, &mut TextColor), With<StatusText>>,
) {
    if !readings.is_changed() {
        return;
    }

    for (kind, mut text, mut color) in &mut lines {
        text.0 = kind.text(&readings.result);
        color.0 = kind.color(&readings.result);
    }

    let (background, foreground) = format::status_colors(readings.status);
    for mut color in &mut banner {
        color.0 = background;
    }
    for (mut text, mut color) in &mut status_text {
        text.0 = readings.status.label().to_string();
        color.0 = foreground;
    }
}
