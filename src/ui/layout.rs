//! Control panel and results panel widgets.

use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::core::{BuoyancyState, DensityKind};
use crate::materials::catalog;

use super::format::{self, ReadoutKind};

pub const PANEL_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.92);
pub const TRACK_COLOR: Color = Color::srgb(0.898, 0.906, 0.922);
pub const PRESET_IDLE_COLOR: Color = Color::srgb(0.953, 0.957, 0.965);
pub const HEADING_COLOR: Color = Color::srgb(0.067, 0.094, 0.153);
pub const HINT_COLOR: Color = Color::srgb(0.310, 0.275, 0.898);

const SLIDER_HEIGHT: f32 = 12.0;

/// Clickable slider track. Its child [`SliderFill`] shows the position.
#[derive(Component, Debug, Clone, Copy)]
pub struct DensitySlider(pub DensityKind);

#[derive(Component, Debug, Clone, Copy)]
pub struct SliderFill(pub DensityKind);

/// Menu entry for `catalog(kind)[index]`.
#[derive(Component, Debug, Clone, Copy)]
pub struct PresetButton {
    pub kind: DensityKind,
    pub index: usize,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct DensityHeading(pub DensityKind);

#[derive(Component, Debug, Clone, Copy)]
pub struct SelectedPresetText(pub DensityKind);

#[derive(Component)]
pub struct CategoryText;

#[derive(Component)]
pub struct StatusBanner;

#[derive(Component)]
pub struct StatusText;

fn text(value: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn panel_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(8.0),
        padding: UiRect::all(Val::Px(16.0)),
        ..default()
    }
}

pub fn spawn_control_panel(mut commands: Commands, state: Res<BuoyancyState>) {
    commands
        .spawn((
            Node {
                left: Val::Px(24.0),
                top: Val::Px(16.0),
                width: Val::Px(520.0),
                ..panel_node()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|panel| {
            panel.spawn(text("Archimedes' principle", 26.0, HEADING_COLOR));
            panel.spawn(text(
                "Vary the density of the fluid (rho_L) and of the block (rho_O).",
                14.0,
                format::MUTED_TEXT_COLOR,
            ));

            for kind in [DensityKind::Fluid, DensityKind::Object] {
                spawn_density_section(panel, kind, &state);
            }

            panel.spawn(text(
                format::constants_text(state.volume(), state.gravity()),
                14.0,
                HINT_COLOR,
            ));
            panel.spawn(text(
                "Keys: Left/Right block, Down/Up fluid, 1-7 materials, F1-F6 fluids",
                12.0,
                format::MUTED_TEXT_COLOR,
            ));
        });
}

fn spawn_density_section(
    panel: &mut ChildSpawnerCommands,
    kind: DensityKind,
    state: &BuoyancyState,
) {
    let density = state.density(kind);

    panel.spawn((
        text(format::density_heading(kind, density), 16.0, HEADING_COLOR),
        DensityHeading(kind),
    ));

    panel
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(6.0),
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|menu| {
            for (index, preset) in catalog(kind).iter().enumerate() {
                menu.spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(PRESET_IDLE_COLOR),
                    PresetButton { kind, index },
                ))
                .with_children(|button| {
                    button.spawn(text(preset.menu_label(), 12.0, HEADING_COLOR));
                });
            }
        });

    panel.spawn((text("", 12.0, HINT_COLOR), SelectedPresetText(kind)));

    panel
        .spawn((
            Button,
            Node {
                width: Val::Percent(100.0),
                height: Val::Px(SLIDER_HEIGHT),
                ..default()
            },
            BackgroundColor(TRACK_COLOR),
            RelativeCursorPosition::default(),
            DensitySlider(kind),
        ))
        .with_children(|track| {
            track.spawn((
                Node {
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::WHITE),
                SliderFill(kind),
            ));
        });

    if kind == DensityKind::Object {
        panel.spawn((
            text(format::category_line(density), 12.0, format::MUTED_TEXT_COLOR),
            CategoryText,
        ));
    }
}

pub fn spawn_results_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                right: Val::Px(24.0),
                bottom: Val::Px(16.0),
                width: Val::Px(420.0),
                ..panel_node()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|panel| {
            panel.spawn(text("Results", 20.0, HEADING_COLOR));
            for kind in ReadoutKind::ALL {
                panel.spawn((text(kind.label(), 15.0, format::MUTED_TEXT_COLOR), kind));
            }
            panel
                .spawn((
                    Node {
                        justify_content: JustifyContent::Center,
                        padding: UiRect::all(Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(Color::WHITE),
                    StatusBanner,
                ))
                .with_children(|banner| {
                    banner.spawn((text("", 16.0, HEADING_COLOR), StatusText));
                });
        });
}
