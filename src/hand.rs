use bevy::prelude::*;

pub mod hand_rig;
pub mod joint_driver;

pub struct HandPlugin;

impl Plugin for HandPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((hand_rig::HandRigPlugin, joint_driver::JointDriverPlugin));
    }
}
