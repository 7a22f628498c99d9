//! Control panel, readouts and the tank view.
//!
//! Input systems run before the readings are recomputed and display systems
//! after, so a change shows up in the same frame.

pub mod controls;
pub mod format;
pub mod layout;
pub mod readout;

use bevy::prelude::*;

use crate::core::recompute_result;
use crate::render::TankPlugin;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.976, 0.980, 0.984);

pub struct BuoyancyUiPlugin;

impl Plugin for BuoyancyUiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_plugins(TankPlugin)
            .add_systems(
                Startup,
                (
                    spawn_camera,
                    layout::spawn_control_panel,
                    layout::spawn_results_panel,
                ),
            )
            .add_systems(
                Update,
                (
                    controls::slider_input,
                    controls::preset_input,
                    controls::keyboard_input,
                )
                    .before(recompute_result),
            )
            .add_systems(
                Update,
                (
                    readout::update_density_widgets,
                    readout::update_category_text,
                    readout::highlight_presets,
                    readout::update_readouts,
                )
                    .after(recompute_result),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
