//! Bevy application setup

use bevy::log::LogPlugin;
use bevy::prelude::*;

use orrery_core::{SceneBlueprint, SceneConfig};
use orrery_scene::{OrreryScenePlugin, SceneLayout, SceneSettings};

/// Run the Bevy application
pub fn run(config: SceneConfig, blueprint: SceneBlueprint) {
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        // main() already installed the tracing subscriber
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Orrery".to_string(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .insert_resource(SceneSettings(config))
        .insert_resource(SceneLayout(blueprint))
        .add_plugins(OrreryScenePlugin)
        .run();
}
