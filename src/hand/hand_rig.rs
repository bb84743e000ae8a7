use bevy::prelude::*;
use bevy::utils::hashbrown::HashMap;
use bevy_revolute::prelude::*;

use crate::presets::HandPresets;
use crate::scene_loader::HandLayout;
use crate::HandSet;

pub(super) struct HandRigPlugin;

impl Plugin for HandRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HandRig>()
            .add_systems(PostStartup, resolve_hand_joints)
            .add_systems(Update, fan_out_angles.in_set(HandSet::FanOut));
    }
}

/// Where the hand-wide angle vector comes from each tick.
///
/// Transitions only happen through [`HandRig::set_input_mode`]; there is no
/// automatic switching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Panel sliders edit the angle vector in place.
    #[default]
    Slider,
    /// The selected entry of the installed preset set.
    Preset,
    /// The vector most recently accepted by [`HandRig::set_external_input`].
    External,
}

impl InputMode {
    pub const ALL: [Self; 3] = [Self::Slider, Self::Preset, Self::External];

    pub fn label(self) -> &'static str {
        match self {
            Self::Slider => "Slider",
            Self::Preset => "Preset",
            Self::External => "External",
        }
    }
}

/// The ordered set of rigged joints and the angle vector driving them.
///
/// Owns the joint list exclusively; all mutation happens inside the `Update`
/// schedule, so the single-threaded tick semantics of the source model carry
/// over unchanged.
#[derive(Resource, Debug, Default)]
pub struct HandRig {
    /// Rig order matches the angle-vector order of presets and feeds.
    pub joints: Vec<Entity>,
    input_mode: InputMode,
    preset_index: usize,
    input_angles: Vec<f32>,
    external_angles: Vec<f32>,
}

impl HandRig {
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    /// Switch the active angle source.
    ///
    /// Refuses to enter [`InputMode::Preset`] when no presets are installed;
    /// returns whether the switch happened.
    pub fn set_input_mode(&mut self, mode: InputMode, presets: Option<&HandPresetSet>) -> bool {
        if mode == InputMode::Preset && presets.map_or(true, HandPresetSet::is_empty) {
            return false;
        }
        self.input_mode = mode;
        true
    }

    /// Strictly validated preset selection; the active index is left untouched
    /// on failure.
    pub fn select_preset(
        &mut self,
        index: usize,
        presets: &HandPresetSet,
    ) -> Result<(), PresetIndexError> {
        presets.checked_get(index)?;
        self.preset_index = index;
        Ok(())
    }

    /// Store an externally supplied angle vector.
    ///
    /// Only accepted in [`InputMode::External`]; otherwise returns `false` and
    /// leaves all state unchanged.
    pub fn set_external_input(&mut self, angles: &[f32]) -> bool {
        if self.input_mode != InputMode::External {
            return false;
        }
        self.external_angles = angles.to_vec();
        true
    }

    /// Snapshot copy of the last angle vector applied to the joints.
    pub fn current_angles(&self) -> Vec<f32> {
        self.input_angles.clone()
    }

    /// Panel-slider access to one entry of the angle vector.
    pub fn input_angle_mut(&mut self, index: usize) -> Option<&mut f32> {
        self.input_angles.get_mut(index)
    }
}

/// Batch-configure the control mode of every rigged joint.
///
/// Operator tooling, not part of the per-tick flow.
pub fn apply_control_mode_to_all(
    hand_rig: &HandRig,
    q_joints: &mut Query<&mut RevoluteJoint>,
    mode: ControlMode,
) {
    for &entity in hand_rig.joints.iter() {
        let Ok(mut joint) = q_joints.get_mut(entity) else {
            continue;
        };
        joint.control_mode = mode;
    }
}

/// Resolve the spawned scene into the ordered joint list, once at setup.
fn resolve_hand_joints(
    mut hand_rig: ResMut<HandRig>,
    layout: Res<HandLayout>,
    q_joints: Query<(Entity, &Name), With<RevoluteJoint>>,
) {
    let mut by_name = HashMap::new();
    for (entity, name) in q_joints.iter() {
        by_name.insert(name.as_str(), entity);
    }

    let mut joints = Vec::with_capacity(layout.len());
    for bone in layout.iter() {
        match by_name.get(bone.name) {
            Some(&entity) => {
                info!("Found joint: {}", bone.name);
                joints.push(entity);
            }
            None => warn!("Bone '{}' has no revolute joint in the scene.", bone.name),
        }
    }

    if joints.is_empty() {
        // Degraded state: every subsequent tick is a no-op.
        error!("Revolute joints not found. Hand control is disabled.");
    } else {
        info!("Found {} joints.", joints.len());
    }

    let count = joints.len();
    hand_rig.joints = joints;
    hand_rig.input_angles = vec![0.0; count];
    hand_rig.external_angles = vec![0.0; count];
}

/// Pull a fresh angle vector from the active source and fan it out to the
/// joints, index by index.
///
/// Length mismatches are tolerated by design: extra joints keep their previous
/// angle for the tick, extra angles are dropped.
fn fan_out_angles(
    mut hand_rig: ResMut<HandRig>,
    presets: Option<Res<HandPresets>>,
    mut q_joints: Query<&mut RevoluteJoint>,
) {
    let fresh = match hand_rig.input_mode {
        InputMode::Preset => presets
            .as_ref()
            .and_then(|presets| presets.0.get(hand_rig.preset_index))
            .map(|preset| preset.angles.clone()),
        InputMode::External => Some(hand_rig.external_angles.clone()),
        // The panel mutates the vector in place.
        InputMode::Slider => None,
    };
    if let Some(angles) = fresh {
        hand_rig.input_angles = angles;
    }

    let count = usize::min(hand_rig.joints.len(), hand_rig.input_angles.len());
    for i in 0..count {
        let Ok(mut joint) = q_joints.get_mut(hand_rig.joints[i]) else {
            continue;
        };
        joint.set_target_angle(hand_rig.input_angles[i]);
    }
}
