pub mod joint;
pub mod preset;
pub mod spherical;

pub mod prelude {
    pub use crate::joint::{
        clamp_with_gain, ControlMode, GraspMotion, JointSettings, KeyState, RevoluteJoint,
        RotationAxis,
    };
    pub use crate::preset::{HandPreset, HandPresetSet, PresetIndexError};
    pub use crate::spherical::SphericalJoint;
}
