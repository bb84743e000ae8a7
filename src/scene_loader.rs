use bevy::prelude::*;
use bevy_revolute::prelude::*;
use bevy_third_person_camera::ThirdPersonCameraTarget;

/// Spawn the procedural hand model and setup the scene.
pub struct SceneLoaderPlugin;

impl Plugin for SceneLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HandLayout>()
            .add_systems(Startup, (spawn_hand, spawn_light, spawn_ground));
    }
}

/// Marker for the root entity of the hand model.
#[derive(Component)]
pub struct HandRoot;

#[derive(Component)]
pub struct GroundPlane;

/// One rigged bone: its name in the hierarchy and the settings of the joint
/// driving it.
#[derive(Debug, Clone)]
pub struct BoneSpec {
    pub name: &'static str,
    pub settings: JointSettings,
}

/// Explicit, ordered joint layout of the simulated hand.
///
/// Index order is the angle-vector order used by presets and external feeds;
/// the rig resolves entities against it once at setup.
#[derive(Resource, Debug, Clone, Deref)]
pub struct HandLayout(Vec<BoneSpec>);

impl HandLayout {
    pub fn settings(&self, name: &str) -> Option<JointSettings> {
        self.0
            .iter()
            .find(|bone| bone.name == name)
            .map(|bone| bone.settings)
    }
}

impl Default for HandLayout {
    fn default() -> Self {
        let finger = |mcp: &'static str, pip: &'static str| {
            [
                BoneSpec {
                    name: mcp,
                    settings: JointSettings {
                        rotation_axis: RotationAxis::X,
                        axis_limits: Vec2::new(-10.0, 90.0),
                        ..default()
                    },
                },
                BoneSpec {
                    name: pip,
                    settings: JointSettings {
                        rotation_axis: RotationAxis::X,
                        axis_limits: Vec2::new(0.0, 100.0),
                        ..default()
                    },
                },
            ]
        };

        let mut bones = vec![
            BoneSpec {
                name: "wrist_flex",
                settings: JointSettings {
                    rotation_axis: RotationAxis::X,
                    axis_limits: Vec2::new(-60.0, 60.0),
                    ..default()
                },
            },
            BoneSpec {
                name: "wrist_dev",
                settings: JointSettings {
                    rotation_axis: RotationAxis::Z,
                    axis_limits: Vec2::new(-25.0, 35.0),
                    ..default()
                },
            },
            // The thumb drive is inverted; its limits are stored pre-swapped
            // to match the negative gain.
            BoneSpec {
                name: "thumb_mcp",
                settings: JointSettings {
                    input_gain: -1.0,
                    rotation_axis: RotationAxis::Z,
                    axis_limits: Vec2::new(55.0, -10.0),
                    ..default()
                },
            },
            BoneSpec {
                name: "thumb_ip",
                settings: JointSettings {
                    rotation_axis: RotationAxis::Z,
                    axis_limits: Vec2::new(-5.0, 80.0),
                    ..default()
                },
            },
        ];
        bones.extend(finger("index_mcp", "index_pip"));
        bones.extend(finger("middle_mcp", "middle_pip"));
        bones.extend(finger("ring_mcp", "ring_pip"));
        bones.extend(finger("pinky_mcp", "pinky_pip"));

        Self(bones)
    }
}

fn spawn_hand(
    mut commands: Commands,
    layout: Res<HandLayout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let palm_mesh = meshes.add(Cuboid::new(0.7, 0.8, 0.18));
    let segment_mesh = meshes.add(Cuboid::new(0.12, 0.3, 0.12));
    let skin = materials.add(StandardMaterial {
        base_color: Color::rgb(0.87, 0.72, 0.6),
        reflectance: 0.3,
        ..default()
    });

    let rig_joint = |name: &'static str, translation: Vec3| {
        (
            Name::new(name),
            RevoluteJoint::new(layout.settings(name).unwrap_or_default()),
            SpatialBundle::from_transform(Transform::from_translation(translation)),
        )
    };
    let segment = |offset: f32| PbrBundle {
        mesh: segment_mesh.clone(),
        material: skin.clone(),
        transform: Transform::from_xyz(0.0, offset, 0.0),
        ..default()
    };

    // Digit bases sit on the palm's upper edge, the thumb on its side.
    const DIGITS: [(&str, &str, Vec3); 5] = [
        ("thumb_mcp", "thumb_ip", Vec3::new(-0.45, 0.3, 0.0)),
        ("index_mcp", "index_pip", Vec3::new(-0.27, 0.8, 0.0)),
        ("middle_mcp", "middle_pip", Vec3::new(-0.09, 0.8, 0.0)),
        ("ring_mcp", "ring_pip", Vec3::new(0.09, 0.8, 0.0)),
        ("pinky_mcp", "pinky_pip", Vec3::new(0.27, 0.8, 0.0)),
    ];

    commands
        .spawn((
            HandRoot,
            ThirdPersonCameraTarget,
            Name::new("hand_root"),
            SpatialBundle::from_transform(Transform::from_xyz(0.0, 1.0, 0.0)),
        ))
        .with_children(|root| {
            root.spawn(rig_joint("wrist_flex", Vec3::ZERO))
                .with_children(|wrist| {
                    wrist
                        .spawn(rig_joint("wrist_dev", Vec3::ZERO))
                        .with_children(|palm| {
                            palm.spawn(PbrBundle {
                                mesh: palm_mesh.clone(),
                                material: skin.clone(),
                                transform: Transform::from_xyz(0.0, 0.4, 0.0),
                                ..default()
                            });

                            for (mcp, tip, base) in DIGITS {
                                palm.spawn(rig_joint(mcp, base)).with_children(|digit| {
                                    digit.spawn(segment(0.15));
                                    digit
                                        .spawn(rig_joint(tip, Vec3::new(0.0, 0.3, 0.0)))
                                        .with_children(|phalanx| {
                                            phalanx.spawn(segment(0.15));
                                        });
                                });
                            }
                        });
                });
        });
}

fn spawn_light(mut commands: Commands) {
    commands
        .spawn(DirectionalLightBundle {
            directional_light: DirectionalLight {
                shadows_enabled: true,
                ..default()
            },
            ..default()
        })
        .insert(Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            f32::to_radians(-45.0),
            f32::to_radians(45.0),
            0.0,
        )));
}

fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let size = 10.0;

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Plane3d::default().mesh().size(size, size)),
            material: materials.add(StandardMaterial {
                base_color: Color::rgb(0.3, 0.3, 0.32),
                reflectance: 0.5,
                metallic: 0.5,
                ..default()
            }),
            ..default()
        },
        GroundPlane,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_are_unique_and_resolvable() {
        let layout = HandLayout::default();
        assert_eq!(layout.len(), 12);

        for bone in layout.iter() {
            assert!(layout.settings(bone.name).is_some());
        }

        let mut names: Vec<&str> = layout.iter().map(|bone| bone.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }
}
