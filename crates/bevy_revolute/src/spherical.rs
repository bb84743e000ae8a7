use bevy::prelude::*;

use crate::joint::KeyState;

/// A two-axis key-driven joint: X and Z rotate independently, each clamped to
/// its own limits.
///
/// Unlike [`RevoluteJoint`](crate::joint::RevoluteJoint) there is no input
/// transform and no manager drive; the joint only integrates key presses.
/// Within one axis an increase press wins over a simultaneous decrease.
#[derive(Component, Debug, Clone)]
pub struct SphericalJoint {
    /// Travel rate in degrees per second, shared by both axes.
    pub rotation_speed: f32,
    /// `x` is the lower bound, `y` the upper, in degrees.
    pub x_axis_limits: Vec2,
    pub z_axis_limits: Vec2,
    current_x_angle: f32,
    current_z_angle: f32,
}

impl Default for SphericalJoint {
    fn default() -> Self {
        Self {
            rotation_speed: 50.0,
            x_axis_limits: Vec2::new(-45.0, 45.0),
            z_axis_limits: Vec2::new(-45.0, 45.0),
            current_x_angle: 0.0,
            current_z_angle: 0.0,
        }
    }
}

impl SphericalJoint {
    pub fn current_angles(&self) -> (f32, f32) {
        (self.current_x_angle, self.current_z_angle)
    }

    /// Advance both axes by one tick of `dt` seconds.
    pub fn step(&mut self, dt: f32, x_keys: KeyState, z_keys: KeyState) {
        if x_keys.increase {
            self.current_x_angle += self.rotation_speed * dt;
        } else if x_keys.decrease {
            self.current_x_angle -= self.rotation_speed * dt;
        }
        self.current_x_angle =
            f32::clamp(self.current_x_angle, self.x_axis_limits.x, self.x_axis_limits.y);

        if z_keys.increase {
            self.current_z_angle += self.rotation_speed * dt;
        } else if z_keys.decrease {
            self.current_z_angle -= self.rotation_speed * dt;
        }
        self.current_z_angle =
            f32::clamp(self.current_z_angle, self.z_axis_limits.x, self.z_axis_limits.y);
    }

    /// Orientation composing both axis angles, with Y left untouched.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.current_x_angle.to_radians(),
            0.0,
            self.current_z_angle.to_radians(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELD: KeyState = KeyState {
        increase: true,
        decrease: false,
    };

    #[test]
    fn axes_integrate_independently() {
        let mut joint = SphericalJoint::default();

        joint.step(0.5, HELD, KeyState::default());
        assert_eq!(joint.current_angles(), (25.0, 0.0));

        joint.step(0.5, KeyState::default(), HELD);
        assert_eq!(joint.current_angles(), (25.0, 25.0));
    }

    #[test]
    fn angles_clamp_to_axis_limits() {
        let mut joint = SphericalJoint {
            x_axis_limits: Vec2::new(-10.0, 10.0),
            ..default()
        };

        joint.step(1.0, HELD, KeyState::default());
        assert_eq!(joint.current_angles().0, 10.0);

        joint.step(
            1.0,
            KeyState {
                increase: false,
                decrease: true,
            },
            KeyState::default(),
        );
        joint.step(
            1.0,
            KeyState {
                increase: false,
                decrease: true,
            },
            KeyState::default(),
        );
        assert_eq!(joint.current_angles().0, -10.0);
    }

    #[test]
    fn increase_wins_over_simultaneous_decrease() {
        let mut joint = SphericalJoint::default();

        joint.step(
            0.5,
            KeyState {
                increase: true,
                decrease: true,
            },
            KeyState::default(),
        );
        assert_eq!(joint.current_angles().0, 25.0);
    }

    #[test]
    fn rotation_composes_both_axes() {
        let mut joint = SphericalJoint::default();
        joint.step(0.5, HELD, HELD);

        let expected = Quat::from_euler(
            EulerRot::XYZ,
            25f32.to_radians(),
            0.0,
            25f32.to_radians(),
        );
        assert_eq!(joint.rotation(), expected);
    }
}
