//! Scene composition - camera, lights, bodies, markers, guide rings, stars

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use tracing::info;

use orrery_core::{guide_points, OrbitalPath};

use crate::camera::MainCamera;
use crate::{SceneLayout, SceneSettings};

/// Marker component for the primary body
#[derive(Component)]
pub struct PrimaryBody;

/// Marker component for the secondary body
#[derive(Component)]
pub struct SecondaryBody;

/// Fixed spin step in radians per frame callback, applied by the motion pass
#[derive(Component)]
pub struct SpinningBody {
    pub step: f32,
}

/// A near-object marker following its orbital path
#[derive(Component)]
pub struct OrbitingMarker {
    pub path: OrbitalPath,
}

/// Decorative ring tracing a marker's orbital radius
#[derive(Component)]
pub struct OrbitGuide {
    pub radius: f32,
}

/// Background star
#[derive(Component)]
pub struct StarMarker;

/// Plugin for one-time scene composition
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
    layout: Res<SceneLayout>,
) {
    let config = &settings.0;

    // Camera
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    // Lighting
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(64, 64, 64),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 5_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Primary body at the origin
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.bodies.primary_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(config.textures.primary.clone())),
            ..default()
        })),
        Transform::default(),
        PrimaryBody,
        SpinningBody {
            step: config.bodies.spin_step,
        },
    ));

    // Secondary body at a fixed offset; the motion pass only ever spins it
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.bodies.secondary_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(asset_server.load(config.textures.secondary.clone())),
            ..default()
        })),
        Transform::from_translation(Vec3::from_array(config.bodies.secondary_offset)),
        SecondaryBody,
        SpinningBody {
            step: config.bodies.spin_step,
        },
    ));

    // Near-object markers share one textured material; each gets its own
    // sphere size and a guide ring of its orbital radius.
    let marker_material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(config.textures.marker.clone())),
        ..default()
    });
    let guide_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.0, 1.0, 0.0),
        unlit: true,
        ..default()
    });

    for marker in &layout.0.markers {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(marker.body_radius))),
            MeshMaterial3d(marker_material.clone()),
            Transform::from_translation(marker.path.position_at(0.0)),
            OrbitingMarker { path: marker.path },
        ));
        commands.spawn((
            Mesh3d(meshes.add(guide_mesh(&marker.path, config.markers.guide_segments))),
            MeshMaterial3d(guide_material.clone()),
            Transform::default(),
            OrbitGuide {
                radius: marker.path.radius,
            },
        ));
    }

    // Star field: one shared mesh and material for all instances
    let star_mesh = meshes.add(Sphere::new(config.stars.radius));
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    for position in &layout.0.stars {
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(*position),
            StarMarker,
        ));
    }

    info!(
        markers = layout.0.markers.len(),
        stars = layout.0.stars.len(),
        "Scene composed"
    );
}

/// Build a line-strip mesh tracing the orbit circle in the XZ plane.
fn guide_mesh(path: &OrbitalPath, segments: u32) -> Mesh {
    let points = guide_points(path.radius, segments);
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    let normals: Vec<[f32; 3]> = vec![[0.0, 1.0, 0.0]; positions.len()];
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}
