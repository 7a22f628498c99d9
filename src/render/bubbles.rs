//! Bubbles trailing a sinking block.

use bevy::prelude::*;
use rand::Rng;

use crate::core::{BuoyancyStatus, SimulationResult};

use super::tank::{BLOCK_SIZE, Block, TANK_CENTER, block_top, fluid_surface_y};

/// Seconds between two bubbles.
const SPAWN_INTERVAL: f32 = 0.12;
const MAX_BUBBLES: usize = 48;

#[derive(Component, Debug, Clone, Copy)]
pub struct Bubble {
    /// Rise speed in px/s
    pub speed: f32,
    pub phase: f32,
}

#[derive(Resource)]
pub struct BubbleAssets {
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
}

pub fn init_bubble_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(BubbleAssets {
        mesh: meshes.add(Circle::new(1.0)),
        material: materials.add(Color::srgba(1.0, 1.0, 1.0, 0.65)),
    });
}

pub fn spawn_bubbles(
    mut commands: Commands,
    time: Res<Time>,
    readings: Res<SimulationResult>,
    assets: Option<Res<BubbleAssets>>,
    blocks: Query<&Transform, With<Block>>,
    bubbles: Query<(), With<Bubble>>,
    mut elapsed: Local<f32>,
) {
    let Some(assets) = assets else {
        return;
    };
    if readings.status != BuoyancyStatus::Sinking {
        *elapsed = 0.0;
        return;
    }

    *elapsed += time.delta_secs();
    if *elapsed < SPAWN_INTERVAL {
        return;
    }
    *elapsed -= SPAWN_INTERVAL;

    if bubbles.iter().count() >= MAX_BUBBLES {
        return;
    }
    let Ok(block) = blocks.single() else {
        return;
    };

    let mut rand = rand::rng();
    let x = TANK_CENTER.x + rand.random_range(-BLOCK_SIZE.x * 0.5..=BLOCK_SIZE.x * 0.5);
    let y = block_top(block.translation.y);
    if y >= fluid_surface_y() {
        return;
    }
    let radius = rand.random_range(2.0..=5.0);

    commands.spawn((
        Bubble {
            speed: rand.random_range(40.0..=90.0),
            phase: rand.random_range(0.0..std::f32::consts::TAU),
        },
        Mesh2d(assets.mesh.clone()),
        MeshMaterial2d(assets.material.clone()),
        Transform::from_xyz(x, y, 2.5).with_scale(Vec3::splat(radius)),
    ));
}

pub fn rise_bubbles(
    mut commands: Commands,
    time: Res<Time>,
    mut bubbles: Query<(Entity, &Bubble, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let wobble_time = time.elapsed_secs() * 5.0;
    let surface = fluid_surface_y();

    for (entity, bubble, mut transform) in &mut bubbles {
        transform.translation.y += bubble.speed * dt;
        transform.translation.x += (wobble_time + bubble.phase).sin() * 12.0 * dt;
        if transform.translation.y >= surface {
            commands.entity(entity).despawn();
        }
    }
}
