use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::{
    egui::{self, Color32},
    EguiContext, EguiPlugin,
};

pub mod control_panel;
pub mod joint_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin).add_systems(Update, ui);
    }
}

fn ui(world: &mut World) {
    let Ok(egui_context) = world
        .query_filtered::<&mut EguiContext, With<PrimaryWindow>>()
        .get_single(world)
    else {
        return;
    };
    let mut egui_context = egui_context.clone();

    egui::SidePanel::right("hand_panel")
        .default_width(320.0)
        .show(egui_context.get_mut(), |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                control_panel::control_panel(ui, world);
                ui.add_space(10.0);
                joint_panel::joint_panel(ui, world);
            });
        });
}

pub fn groupbox(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .inner_margin(6.0)
        .outer_margin(4.0)
        .stroke((1.0, Color32::DARK_GRAY))
        .rounding(10.0)
        .show(ui, |ui| {
            add_contents(ui);
        });
}
