use bevy::prelude::*;
use bevy_revolute::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::action::HandAction;
use crate::HandSet;

pub(super) struct JointDriverPlugin;

impl Plugin for JointDriverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (drive_joints, drive_spherical_joints).in_set(HandSet::Drive),
        );
    }
}

/// Advance every joint by one tick and write its orientation back to the bone
/// transform.
///
/// The rotation overwrites the previous orientation each tick; joints never
/// compose with what the transform held before.
fn drive_joints(
    mut q_joints: Query<(&mut RevoluteJoint, &mut Transform)>,
    action: Res<ActionState<HandAction>>,
    time: Res<Time>,
) {
    let dt = time.delta_seconds();

    for (mut joint, mut transform) in q_joints.iter_mut() {
        let keys = match joint.settings.rotation_axis {
            RotationAxis::X => KeyState {
                increase: action.pressed(&HandAction::RaiseX),
                decrease: action.pressed(&HandAction::LowerX),
            },
            RotationAxis::Z => KeyState {
                increase: action.pressed(&HandAction::RaiseZ),
                decrease: action.pressed(&HandAction::LowerZ),
            },
        };

        joint.step(dt, keys);
        transform.rotation = joint.rotation();
    }
}

/// Same per-tick drive for free-standing two-axis joints, which are always
/// key-controlled.
fn drive_spherical_joints(
    mut q_joints: Query<(&mut SphericalJoint, &mut Transform)>,
    action: Res<ActionState<HandAction>>,
    time: Res<Time>,
) {
    let dt = time.delta_seconds();
    let x_keys = KeyState {
        increase: action.pressed(&HandAction::RaiseX),
        decrease: action.pressed(&HandAction::LowerX),
    };
    let z_keys = KeyState {
        increase: action.pressed(&HandAction::RaiseZ),
        decrease: action.pressed(&HandAction::LowerZ),
    };

    for (mut joint, mut transform) in q_joints.iter_mut() {
        joint.step(dt, x_keys, z_keys);
        transform.rotation = joint.rotation();
    }
}
