//! The tank, the fluid and the floating block, in world units (pixels).

use bevy::prelude::*;

use crate::core::{BuoyancyResult, BuoyancyState, BuoyancyStatus, SimulationResult};
use crate::materials::{DensityCategory, fluid_swatch};
use crate::math::{Real, exp_smoothing};
use crate::ui::format;

pub const TANK_CENTER: Vec2 = Vec2::new(400.0, 60.0);
pub const TANK_SIZE: Vec2 = Vec2::new(320.0, 350.0);
pub const WALL_THICKNESS: f32 = 8.0;
/// Share of the tank height filled with fluid.
pub const FLUID_FILL: f32 = 0.8;
pub const BLOCK_SIZE: Vec2 = Vec2::new(80.0, 200.0);
/// Gap between the surface and the top of a neutrally buoyant block.
pub const NEUTRAL_DEPTH: f32 = 12.0;
/// Smoothing rate (1/s); the block settles in roughly half a second.
const SETTLE_RATE: f32 = 6.0;

const TANK_COLOR: Color = Color::srgb(0.953, 0.957, 0.965);
const WALL_COLOR: Color = Color::srgb(0.612, 0.639, 0.686);
const SUBMERGED_ALPHA: f32 = 0.6;
const FLUID_ALPHA: f32 = 0.7;

pub fn tank_floor_y() -> f32 {
    TANK_CENTER.y - TANK_SIZE.y * 0.5
}

pub fn fluid_surface_y() -> f32 {
    tank_floor_y() + TANK_SIZE.y * FLUID_FILL
}

/// Where the block should sit and how much of it is under the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    pub center_y: f32,
    pub submerged_height: f32,
    pub exposed_height: f32,
}

impl BlockLayout {
    pub fn for_result(result: &BuoyancyResult, floor_y: f32, surface_y: f32, height: f32) -> Self {
        let submerged_height = result.submerged_fraction * height;
        let exposed_height = height - submerged_height;
        let half = height * 0.5;

        let center_y = match result.status() {
            BuoyancyStatus::Sinking => floor_y + half,
            BuoyancyStatus::Neutral => (surface_y - NEUTRAL_DEPTH - half).max(floor_y + half),
            BuoyancyStatus::Floating => surface_y - submerged_height + half,
        };

        Self {
            center_y,
            submerged_height,
            exposed_height,
        }
    }
}

#[derive(Component)]
pub struct Block;

/// Displayed (eased) block state, chasing [`BlockLayout`].
#[derive(Component, Debug, Clone, Copy)]
pub struct BlockMotion {
    pub center_y: f32,
    pub submerged_height: f32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPart {
    Exposed,
    Submerged,
}

#[derive(Component)]
pub struct FluidBody;

#[derive(Component)]
pub struct FluidTag;

pub fn spawn_tank(mut commands: Commands, readings: Res<SimulationResult>, state: Res<BuoyancyState>) {
    let floor = tank_floor_y();
    let surface = fluid_surface_y();
    let fluid_height = surface - floor;

    commands.spawn((
        Sprite::from_color(TANK_COLOR, TANK_SIZE),
        Transform::from_translation(TANK_CENTER.extend(0.0)),
    ));

    let fluid_color = fluid_swatch(state.fluid_density()).color().with_alpha(FLUID_ALPHA);
    commands.spawn((
        Sprite::from_color(fluid_color, Vec2::new(TANK_SIZE.x, fluid_height)),
        Transform::from_xyz(TANK_CENTER.x, floor + fluid_height * 0.5, 1.0),
        FluidBody,
    ));
    // Surface glint
    commands.spawn((
        Sprite::from_color(Color::srgba(1.0, 1.0, 1.0, 0.5), Vec2::new(TANK_SIZE.x, 3.0)),
        Transform::from_xyz(TANK_CENTER.x, surface - 1.5, 1.5),
    ));

    let half_width = TANK_SIZE.x * 0.5;
    let walls = [
        (Vec2::new(-half_width - WALL_THICKNESS * 0.5, 0.0), Vec2::new(WALL_THICKNESS, TANK_SIZE.y)),
        (Vec2::new(half_width + WALL_THICKNESS * 0.5, 0.0), Vec2::new(WALL_THICKNESS, TANK_SIZE.y)),
        (
            Vec2::new(0.0, -TANK_SIZE.y * 0.5 - WALL_THICKNESS * 0.5),
            Vec2::new(TANK_SIZE.x + 2.0 * WALL_THICKNESS, WALL_THICKNESS),
        ),
    ];
    for (offset, size) in walls {
        commands.spawn((
            Sprite::from_color(WALL_COLOR, size),
            Transform::from_translation((TANK_CENTER + offset).extend(3.0)),
        ));
    }

    commands.spawn((
        Text2d::new(format::fluid_tag(state.fluid_density())),
        TextFont {
            font_size: 13.0,
            ..default()
        },
        TextColor(format::MUTED_TEXT_COLOR),
        Transform::from_xyz(TANK_CENTER.x - half_width + 70.0, TANK_CENTER.y + TANK_SIZE.y * 0.5 - 14.0, 4.0),
        FluidTag,
    ));

    // Readings are first recomputed in Update; evaluate directly for the start pose
    let result = state.evaluate().unwrap_or(readings.result);
    let layout = BlockLayout::for_result(&result, floor, surface, BLOCK_SIZE.y);
    let color = DensityCategory::of(state.object_density()).swatch().color();
    commands
        .spawn((
            Block,
            BlockMotion {
                center_y: layout.center_y,
                submerged_height: layout.submerged_height,
            },
            Transform::from_xyz(TANK_CENTER.x, layout.center_y, 2.0),
            Visibility::default(),
        ))
        .with_children(|block| {
            block.spawn((Sprite::from_color(color, BLOCK_SIZE), Transform::default(), BlockPart::Exposed));
            block.spawn((
                Sprite::from_color(color.with_alpha(SUBMERGED_ALPHA), BLOCK_SIZE),
                Transform::default(),
                BlockPart::Submerged,
            ));
        });
}

/// Local y of a part's center and its height, top part first.
pub fn part_geometry(part: BlockPart, submerged_height: f32, height: f32) -> (f32, f32) {
    let half = height * 0.5;
    match part {
        BlockPart::Exposed => {
            let exposed = height - submerged_height;
            (half - exposed * 0.5, exposed)
        }
        BlockPart::Submerged => (-half + submerged_height * 0.5, submerged_height),
    }
}

pub fn animate_block(
    time: Res<Time>,
    readings: Res<SimulationResult>,
    mut blocks: Query<(&mut BlockMotion, &mut Transform), With<Block>>,
    mut parts: Query<(&BlockPart, &mut Sprite, &mut Transform), Without<Block>>,
) {
    let target = BlockLayout::for_result(
        &readings.result,
        tank_floor_y(),
        fluid_surface_y(),
        BLOCK_SIZE.y,
    );
    let dt = time.delta_secs();

    for (mut motion, mut transform) in &mut blocks {
        motion.center_y = exp_smoothing(motion.center_y, target.center_y, SETTLE_RATE, dt);
        motion.submerged_height =
            exp_smoothing(motion.submerged_height, target.submerged_height, SETTLE_RATE, dt);
        transform.translation.y = motion.center_y;

        for (part, mut sprite, mut part_transform) in &mut parts {
            let (offset, height) = part_geometry(*part, motion.submerged_height, BLOCK_SIZE.y);
            sprite.custom_size = Some(Vec2::new(BLOCK_SIZE.x, height.max(0.0)));
            part_transform.translation.y = offset;
        }
    }
}

pub fn recolor_scene(
    state: Res<BuoyancyState>,
    mut fluid: Query<&mut Sprite, (With<FluidBody>, Without<BlockPart>)>,
    mut parts: Query<(&BlockPart, &mut Sprite), Without<FluidBody>>,
    mut tags: Query<&mut Text2d, With<FluidTag>>,
) {
    if !state.is_changed() {
        return;
    }

    let fluid_color = fluid_swatch(state.fluid_density()).color().with_alpha(FLUID_ALPHA);
    for mut sprite in &mut fluid {
        sprite.color = fluid_color;
    }

    let block_color = DensityCategory::of(state.object_density()).swatch().color();
    for (part, mut sprite) in &mut parts {
        sprite.color = match part {
            BlockPart::Exposed => block_color,
            BlockPart::Submerged => block_color.with_alpha(SUBMERGED_ALPHA),
        };
    }

    for mut tag in &mut tags {
        tag.0 = format::fluid_tag(state.fluid_density());
    }
}

/// Block top in world space; bubbles start here.
pub fn block_top(center_y: Real) -> Real {
    center_y + BLOCK_SIZE.y * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BuoyancyInput, calculate};
    use approx::assert_relative_eq;

    fn layout(object_density: Real) -> BlockLayout {
        let result = calculate(&BuoyancyInput::new(object_density, 1000.0, 0.1, 9.81)).unwrap();
        BlockLayout::for_result(&result, 0.0, 280.0, 200.0)
    }

    #[test]
    fn floating_block_sinks_to_its_fraction() {
        let layout = layout(800.0);
        assert_relative_eq!(layout.submerged_height, 160.0, epsilon = 1e-3);
        assert_relative_eq!(layout.exposed_height, 40.0, epsilon = 1e-3);
        // bottom 160 below the surface
        assert_relative_eq!(layout.center_y - 100.0, 120.0, epsilon = 1e-3);
    }

    #[test]
    fn sinking_block_rests_on_floor() {
        let layout = layout(7870.0);
        assert_eq!(layout.center_y, 100.0);
        assert_eq!(layout.exposed_height, 0.0);
    }

    #[test]
    fn neutral_block_hovers_below_surface() {
        let layout = layout(1000.0);
        assert_eq!(layout.center_y, 280.0 - NEUTRAL_DEPTH - 100.0);
        assert_eq!(layout.submerged_height, 200.0);
    }

    #[test]
    fn parts_stack_to_full_height() {
        let (top_center, top_height) = part_geometry(BlockPart::Exposed, 160.0, 200.0);
        let (bottom_center, bottom_height) = part_geometry(BlockPart::Submerged, 160.0, 200.0);
        assert_eq!(top_height + bottom_height, 200.0);
        assert_eq!(top_center, 80.0);
        assert_eq!(bottom_center, -20.0);
    }
}
