use bevy::{ecs::system::SystemState, prelude::*};
use bevy_egui::egui;
use bevy_revolute::prelude::*;

use crate::hand::hand_rig::HandRig;

pub fn joint_panel(ui: &mut egui::Ui, world: &mut World) {
    ui.heading("Joints");
    ui.add_space(10.0);

    let mut params = SystemState::<(Res<HandRig>, Query<(&Name, &mut RevoluteJoint)>)>::new(world);
    let (hand_rig, mut q_joints) = params.get_mut(world);

    for &entity in hand_rig.joints.iter() {
        let Ok((name, mut joint)) = q_joints.get_mut(entity) else {
            continue;
        };

        egui::CollapsingHeader::new(name.as_str()).show(ui, |ui| {
            control_mode_combo(ui, name.as_str(), &mut joint);

            let limits = joint.settings.axis_limits;
            let (low, high) = (f32::min(limits.x, limits.y), f32::max(limits.x, limits.y));
            ui.add_enabled(
                joint.control_mode == ControlMode::Slider,
                egui::Slider::new(&mut joint.slider_angle, low..=high).text("angle"),
            );

            if joint.control_mode == ControlMode::Grasp {
                ui.add(egui::Slider::new(&mut joint.grasp.speed, 0.0..=10.0).text("grasp speed"));
                ui.add(
                    egui::Slider::new(&mut joint.grasp.amplitude, 0.0..=90.0)
                        .text("grasp amplitude"),
                );
            }

            ui.label(format!("Current: {:.2}", joint.current_angle()));
        });
    }
}

fn control_mode_combo(ui: &mut egui::Ui, id: &str, joint: &mut RevoluteJoint) {
    egui::ComboBox::from_id_source(format!("{id}_mode"))
        .selected_text(joint.control_mode.label())
        .show_ui(ui, |ui| {
            for mode in ControlMode::ALL {
                if ui
                    .selectable_label(joint.control_mode == mode, mode.label())
                    .clicked()
                {
                    joint.control_mode = mode;
                }
            }
        });
}
