use bevy::{ecs::system::SystemState, prelude::*};
use bevy_egui::egui;
use bevy_revolute::prelude::*;

use crate::external::DummyFeed;
use crate::hand::hand_rig::{apply_control_mode_to_all, HandRig, InputMode};
use crate::presets::HandPresets;
use crate::scene_loader::{HandLayout, HandRoot};

use super::groupbox;

pub fn control_panel(ui: &mut egui::Ui, world: &mut World) {
    ui.heading("Hand Control");
    ui.add_space(10.0);
    input_mode_combo(ui, world);
    preset_picker(ui, world);
    slider_vector(ui, world);
    external_feed_checkbox(ui, world);
    ui.add_space(10.0);
    batch_mode_buttons(ui, world);
    ui.add_space(10.0);
    hand_visibility_checkbox(ui, world);
    current_angles_readout(ui, world);
}

fn input_mode_combo(ui: &mut egui::Ui, world: &mut World) {
    let mut params = SystemState::<(ResMut<HandRig>, Option<Res<HandPresets>>)>::new(world);
    let (mut hand_rig, presets) = params.get_mut(world);

    ui.horizontal(|ui| {
        ui.label("Input Mode:");
        egui::ComboBox::from_id_source("input_mode")
            .selected_text(hand_rig.input_mode().label())
            .show_ui(ui, |ui| {
                for mode in InputMode::ALL {
                    let is_active = hand_rig.input_mode() == mode;
                    if ui.selectable_label(is_active, mode.label()).clicked() {
                        let presets = presets.as_ref().map(|presets| &presets.0);
                        if hand_rig.set_input_mode(mode, presets) == false {
                            warn!("No presets are installed. Preset mode unavailable.");
                        }
                    }
                }
            });
    });
}

fn preset_picker(ui: &mut egui::Ui, world: &mut World) {
    let mut params = SystemState::<(ResMut<HandRig>, Option<Res<HandPresets>>)>::new(world);
    let (mut hand_rig, presets) = params.get_mut(world);

    let Some(presets) = presets else {
        ui.label("No presets loaded.");
        return;
    };

    let selected_name = presets
        .0
        .get(hand_rig.preset_index())
        .map(|preset| preset.name.clone())
        .unwrap_or_default();

    ui.horizontal(|ui| {
        ui.label("Preset:");
        egui::ComboBox::from_id_source("preset")
            .selected_text(selected_name)
            .show_ui(ui, |ui| {
                for (index, name) in presets.0.names().enumerate() {
                    let is_active = hand_rig.preset_index() == index;
                    if ui.selectable_label(is_active, name).clicked() {
                        if let Err(err) = hand_rig.select_preset(index, &presets.0) {
                            error!("{err}");
                        }
                    }
                }
            });
    });
}

/// Hand-wide angle sliders, editing the fan-out vector in place.
fn slider_vector(ui: &mut egui::Ui, world: &mut World) {
    let mut params = SystemState::<(ResMut<HandRig>, Res<HandLayout>)>::new(world);
    let (mut hand_rig, layout) = params.get_mut(world);

    if hand_rig.input_mode() != InputMode::Slider {
        return;
    }

    ui.add_space(5.0);
    for index in 0..layout.len() {
        let Some(angle) = hand_rig.input_angle_mut(index) else {
            continue;
        };
        ui.add(egui::Slider::new(angle, -180.0..=180.0).text(layout[index].name));
    }
}

fn external_feed_checkbox(ui: &mut egui::Ui, world: &mut World) {
    let mut params = SystemState::<(Res<HandRig>, ResMut<DummyFeed>)>::new(world);
    let (hand_rig, mut feed) = params.get_mut(world);

    if hand_rig.input_mode() != InputMode::External {
        return;
    }
    ui.checkbox(&mut feed.enabled, "Dummy external feed");
}

/// Operator batch tool: push one control mode onto every rigged joint.
fn batch_mode_buttons(ui: &mut egui::Ui, world: &mut World) {
    let mut params = SystemState::<(Res<HandRig>, Query<&mut RevoluteJoint>)>::new(world);
    let (hand_rig, mut q_joints) = params.get_mut(world);

    ui.label("Apply control mode to all joints:");
    ui.horizontal(|ui| {
        for mode in ControlMode::ALL {
            if ui.button(mode.label()).clicked() {
                apply_control_mode_to_all(&hand_rig, &mut q_joints, mode);
            }
        }
    });
}

fn hand_visibility_checkbox(ui: &mut egui::Ui, world: &mut World) {
    let mut q_hand = world.query_filtered::<&mut Visibility, With<HandRoot>>();
    let Ok(mut hand_vis) = q_hand.get_single_mut(world) else {
        return;
    };

    let mut is_visible = matches!(*hand_vis, Visibility::Hidden) == false;
    ui.checkbox(&mut is_visible, "Show Hand");
    match is_visible {
        true => *hand_vis = Visibility::Inherited,
        false => *hand_vis = Visibility::Hidden,
    }
}

fn current_angles_readout(ui: &mut egui::Ui, world: &mut World) {
    let mut params = SystemState::<Res<HandRig>>::new(world);
    let hand_rig = params.get(world);

    groupbox(ui, |ui| {
        ui.label(format!("Joints: {}", hand_rig.joints.len()));
        ui.label(format!("Applied angles: {:.1?}", hand_rig.current_angles()));
    });
}
