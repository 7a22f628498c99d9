use bevy::prelude::*;
use buoyancy2d::{BuoyancyPlugin, BuoyancyUiPlugin, DEFAULT_CONFIG_PATH};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Archimedes' principle".to_string(),
                resolution: bevy::window::WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(BuoyancyPlugin::from_file(DEFAULT_CONFIG_PATH))
        .add_plugins(BuoyancyUiPlugin)
        .run();
}
