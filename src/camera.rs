use bevy::{
    core_pipeline::{
        bloom::BloomSettings,
        tonemapping::{DebandDither, Tonemapping},
    },
    prelude::*,
};
use bevy_third_person_camera::{camera::Zoom, ThirdPersonCamera, ThirdPersonCameraPlugin};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ThirdPersonCameraPlugin)
            .insert_resource(Msaa::default())
            .add_systems(Startup, spawn_camera);
    }
}

/// Orbit camera around the hand root.
///
/// Cursor lock stays off so the egui panel remains usable; holding the orbit
/// button rotates around the rig.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        ThirdPersonCamera {
            zoom: Zoom::new(1.5, 8.0),
            cursor_lock_toggle_enabled: true,
            cursor_lock_active: false,
            cursor_lock_key: KeyCode::Escape,
            ..default()
        },
        Camera3dBundle {
            camera: Camera {
                hdr: true,
                ..default()
            },
            dither: DebandDither::Enabled,
            tonemapping: Tonemapping::AcesFitted,
            ..default()
        },
        BloomSettings::default(),
    ));
}
