use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Axis a revolute joint rotates about, in the bone's local frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationAxis {
    X,
    #[default]
    Z,
}

impl RotationAxis {
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Z => Vec3::Z,
        }
    }
}

/// Where a joint takes its angle from each tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// Integrate key presses at `rotation_speed` degrees per second.
    Key,
    /// Pass through the panel slider value.
    Slider,
    /// Driven by the hand rig through [`RevoluteJoint::set_target_angle`].
    #[default]
    Manager,
    /// Autonomous sinusoidal open/close oscillation.
    Grasp,
}

impl ControlMode {
    pub const ALL: [Self; 4] = [Self::Key, Self::Slider, Self::Manager, Self::Grasp];

    pub fn label(self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Slider => "Slider",
            Self::Manager => "Manager",
            Self::Grasp => "Grasp",
        }
    }
}

/// Static per-joint input transform and travel limits.
///
/// `input_gain` may be negative to invert the drive direction; limit clamping
/// then swaps which bound is treated as the low one (see [`clamp_with_gain`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JointSettings {
    pub input_offset: f32,
    pub input_gain: f32,
    pub rotation_axis: RotationAxis,
    /// `x` is the nominal lower bound, `y` the upper, in degrees.
    pub axis_limits: Vec2,
}

impl Default for JointSettings {
    fn default() -> Self {
        Self {
            input_offset: 0.0,
            input_gain: 1.0,
            rotation_axis: RotationAxis::Z,
            axis_limits: Vec2::new(-45.0, 45.0),
        }
    }
}

/// Parameters of the autonomous grasp oscillation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GraspMotion {
    /// Oscillation frequency factor (phase advance per second).
    pub speed: f32,
    /// Peak raw angle in degrees, before gain and offset.
    pub amplitude: f32,
}

impl Default for GraspMotion {
    fn default() -> Self {
        Self {
            speed: 1.0,
            amplitude: 30.0,
        }
    }
}

/// Key-mode input sampled for one tick.
///
/// Both flags may be set at once; the branches apply independently and cancel
/// out, matching two held opposing keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyState {
    pub increase: bool,
    pub decrease: bool,
}

/// A single rotational degree of freedom, limited to one local axis.
///
/// The joint owns its angle state and recomputes it every tick from whichever
/// [`ControlMode`] is active. The computed orientation is pure axis-angle from
/// identity; it never composes with a previous rotation.
#[derive(Component, Debug, Clone)]
pub struct RevoluteJoint {
    pub settings: JointSettings,
    pub control_mode: ControlMode,
    /// Key-mode travel rate in degrees per second.
    pub rotation_speed: f32,
    /// Manual target used while in [`ControlMode::Slider`].
    pub slider_angle: f32,
    pub grasp: GraspMotion,
    current_angle: f32,
    grasp_phase: f32,
}

impl Default for RevoluteJoint {
    fn default() -> Self {
        Self::new(JointSettings::default())
    }
}

impl RevoluteJoint {
    pub fn new(settings: JointSettings) -> Self {
        Self {
            settings,
            control_mode: ControlMode::default(),
            rotation_speed: 100.0,
            slider_angle: 0.0,
            grasp: GraspMotion::default(),
            current_angle: 0.0,
            grasp_phase: 0.0,
        }
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn grasp_phase(&self) -> f32 {
        self.grasp_phase
    }

    /// Drive the joint from the hand rig.
    ///
    /// Only has an effect in [`ControlMode::Manager`]. The raw value is scaled
    /// by gain and shifted by offset but deliberately not clamped to
    /// `axis_limits`; grasp mode is the only clamping path.
    pub fn set_target_angle(&mut self, value: f32) {
        if self.control_mode == ControlMode::Manager {
            self.current_angle = value * self.settings.input_gain + self.settings.input_offset;
        }
    }

    /// Advance the joint by one tick of `dt` seconds.
    pub fn step(&mut self, dt: f32, keys: KeyState) {
        match self.control_mode {
            ControlMode::Key => {
                if keys.increase {
                    self.current_angle += self.rotation_speed * dt;
                }
                if keys.decrease {
                    self.current_angle -= self.rotation_speed * dt;
                }
            }
            ControlMode::Slider => {
                self.current_angle = self.slider_angle;
            }
            ControlMode::Grasp => {
                self.grasp_phase += dt * self.grasp.speed;

                let raw_angle = f32::sin(self.grasp_phase) * self.grasp.amplitude;
                self.current_angle = clamp_with_gain(
                    raw_angle * self.settings.input_gain + self.settings.input_offset,
                    self.settings.axis_limits,
                    self.settings.input_gain,
                );
            }
            // Angle only moves through `set_target_angle`.
            ControlMode::Manager => {}
        }
    }

    /// Orientation of `current_angle` degrees about the configured axis.
    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(
            self.settings.rotation_axis.unit(),
            self.current_angle.to_radians(),
        )
    }
}

/// Clamp `value` to `limits`, honoring the drive direction.
///
/// A negative gain inverts which bound is the low one, so the limits are
/// swapped before clamping. The swapped pair is reordered so the result is
/// always bounded by `[min(limits), max(limits)]` even when the configured
/// limits were not swapped to match the gain.
pub fn clamp_with_gain(value: f32, limits: Vec2, gain: f32) -> f32 {
    match gain < 0.0 {
        true => {
            let (lo, hi) = (limits.y, limits.x);
            f32::clamp(value, f32::min(lo, hi), f32::max(lo, hi))
        }
        false => f32::clamp(value, limits.x, limits.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: Vec2 = Vec2::new(-45.0, 45.0);

    #[test]
    fn clamp_positive_gain_uses_nominal_bounds() {
        assert_eq!(clamp_with_gain(100.0, LIMITS, 1.0), 45.0);
        assert_eq!(clamp_with_gain(-100.0, LIMITS, 1.0), -45.0);
        assert_eq!(clamp_with_gain(10.0, LIMITS, 1.0), 10.0);
    }

    #[test]
    fn clamp_negative_gain_swaps_bounds() {
        // Swapped bounds still confine the value to [-45, 45].
        assert_eq!(clamp_with_gain(100.0, LIMITS, -1.0), 45.0);
        assert_eq!(clamp_with_gain(-100.0, LIMITS, -1.0), -45.0);
        assert_eq!(clamp_with_gain(0.0, LIMITS, -1.0), 0.0);

        // Limits configured pre-swapped for a negative gain reorder cleanly.
        let swapped = Vec2::new(45.0, -45.0);
        assert_eq!(clamp_with_gain(100.0, swapped, -1.0), 45.0);
        assert_eq!(clamp_with_gain(-100.0, swapped, -1.0), -45.0);
    }

    #[test]
    fn target_angle_applies_gain_and_offset_without_clamping() {
        let mut joint = RevoluteJoint::new(JointSettings {
            input_offset: 5.0,
            input_gain: 2.0,
            ..default()
        });
        joint.control_mode = ControlMode::Manager;

        joint.set_target_angle(100.0);
        // 100 * 2 + 5 exceeds the limits and stays unclamped.
        assert_eq!(joint.current_angle(), 205.0);
    }

    #[test]
    fn target_angle_ignored_outside_manager_mode() {
        for mode in [ControlMode::Key, ControlMode::Slider, ControlMode::Grasp] {
            let mut joint = RevoluteJoint::default();
            joint.control_mode = mode;
            joint.set_target_angle(30.0);
            assert_eq!(joint.current_angle(), 0.0);
        }
    }

    #[test]
    fn key_mode_branches_apply_independently() {
        let mut joint = RevoluteJoint::default();
        joint.control_mode = ControlMode::Key;

        joint.step(
            0.5,
            KeyState {
                increase: true,
                decrease: false,
            },
        );
        assert_eq!(joint.current_angle(), 50.0);

        // Opposing keys cancel out.
        joint.step(
            0.5,
            KeyState {
                increase: true,
                decrease: true,
            },
        );
        assert_eq!(joint.current_angle(), 50.0);
    }

    #[test]
    fn slider_mode_passes_value_through() {
        let mut joint = RevoluteJoint::default();
        joint.control_mode = ControlMode::Slider;
        joint.slider_angle = -12.5;

        joint.step(0.016, KeyState::default());
        assert_eq!(joint.current_angle(), -12.5);
    }

    #[test]
    fn grasp_angle_depends_only_on_cumulative_phase() {
        // All step sizes are exactly representable so the accumulated phase
        // is bit-identical across granularities.
        let mut fine = RevoluteJoint::default();
        let mut coarse = RevoluteJoint::default();
        fine.control_mode = ControlMode::Grasp;
        coarse.control_mode = ControlMode::Grasp;

        for _ in 0..4 {
            fine.step(0.25, KeyState::default());
        }
        coarse.step(1.0, KeyState::default());

        assert_eq!(fine.grasp_phase(), coarse.grasp_phase());
        assert_eq!(fine.current_angle(), coarse.current_angle());
    }

    #[test]
    fn grasp_output_matches_clamped_sine() {
        let settings = JointSettings {
            input_offset: 3.0,
            input_gain: 2.0,
            ..default()
        };
        let mut joint = RevoluteJoint::new(settings);
        joint.control_mode = ControlMode::Grasp;
        joint.grasp = GraspMotion {
            speed: 2.0,
            amplitude: 40.0,
        };

        joint.step(0.5, KeyState::default());

        let expected = clamp_with_gain(
            f32::sin(1.0) * 40.0 * 2.0 + 3.0,
            settings.axis_limits,
            settings.input_gain,
        );
        assert_eq!(joint.current_angle(), expected);
    }

    #[test]
    fn grasp_phase_frozen_outside_grasp_mode() {
        for mode in [ControlMode::Key, ControlMode::Slider, ControlMode::Manager] {
            let mut joint = RevoluteJoint::default();
            joint.control_mode = mode;
            joint.step(1.0, KeyState::default());
            assert_eq!(joint.grasp_phase(), 0.0);
        }
    }

    #[test]
    fn rotation_is_pure_axis_angle() {
        let mut z_joint = RevoluteJoint::default();
        z_joint.control_mode = ControlMode::Manager;
        z_joint.set_target_angle(30.0);
        assert_eq!(z_joint.rotation(), Quat::from_rotation_z(30f32.to_radians()));

        let mut x_joint = RevoluteJoint::new(JointSettings {
            rotation_axis: RotationAxis::X,
            ..default()
        });
        x_joint.control_mode = ControlMode::Manager;
        x_joint.set_target_angle(-20.0);
        assert_eq!(
            x_joint.rotation(),
            Quat::from_rotation_x((-20f32).to_radians())
        );
    }
}
