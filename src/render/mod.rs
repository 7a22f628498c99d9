//! 2D view of the tank, the block and its bubbles.

pub mod bubbles;
pub mod tank;

use bevy::prelude::*;

use crate::core::recompute_result;

pub use tank::{BlockLayout, BlockPart, fluid_surface_y, tank_floor_y};

pub struct TankPlugin;

impl Plugin for TankPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (tank::spawn_tank, bubbles::init_bubble_assets))
            .add_systems(
                Update,
                (
                    tank::recolor_scene,
                    tank::animate_block,
                    bubbles::spawn_bubbles,
                    bubbles::rise_bubbles,
                )
                    .chain()
                    .after(recompute_result),
            );
    }
}
