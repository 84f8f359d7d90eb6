//! Orrery Scene - 3D scene composition and motion
//!
//! This crate provides the Bevy side of the Orrery viewer: the startup
//! scene composer, the orbit camera controls, and the per-frame motion
//! updater. The procedural layout itself comes from `orrery-core`; the
//! application generates a [`SceneBlueprint`] up front and hands it to
//! these plugins through the [`SceneLayout`] resource.

pub mod camera;
pub mod motion;
pub mod scene;

use bevy::prelude::*;
use orrery_core::{SceneBlueprint, SceneConfig};

/// Plugin that sets up the complete animated scene.
///
/// Requires [`SceneSettings`] and [`SceneLayout`] to be inserted before the
/// app runs; the viewer binary does this after validating its config.
pub struct OrreryScenePlugin;

impl Plugin for OrreryScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(camera::CameraPlugin)
            .add_plugins(scene::ScenePlugin)
            .add_plugins(motion::MotionPlugin);
    }
}

/// The validated scene configuration, inserted by the application.
#[derive(Debug, Clone, Resource)]
pub struct SceneSettings(pub SceneConfig);

/// The generated procedural layout, inserted by the application.
#[derive(Debug, Clone, Resource)]
pub struct SceneLayout(pub SceneBlueprint);

// Re-export commonly used types
pub use camera::{CameraSettings, MainCamera};
pub use motion::SimulationClock;
pub use scene::{OrbitGuide, OrbitingMarker, PrimaryBody, SecondaryBody, SpinningBody, StarMarker};
