use bevy::prelude::*;

pub mod action;
pub mod camera;
pub mod external;
pub mod hand;
pub mod presets;
pub mod scene_loader;
pub mod ui;

pub struct HandSimAppPlugin;

impl Plugin for HandSimAppPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (HandSet::FanOut, HandSet::Drive).chain())
            .add_plugins((
                DefaultPlugins,
                action::ActionPlugin,
                scene_loader::SceneLoaderPlugin,
                hand::HandPlugin,
                presets::HandPresetPlugin,
                external::ExternalFeedPlugin,
                camera::CameraPlugin,
                ui::UiPlugin,
            ));

        #[cfg(feature = "debug")]
        app.add_plugins(bevy_inspector_egui::quick::WorldInspectorPlugin::new());
    }
}

/// Frame phases of the hand control loop.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSet {
    /// Resolve the active angle source and fan it out to the joints.
    FanOut,
    /// Advance each joint's control mode and write bone transforms.
    Drive,
}
