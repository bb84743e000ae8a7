use bevy::prelude::*;
use bevy_hand_sim::HandSimAppPlugin;

fn main() {
    App::new().add_plugins(HandSimAppPlugin).run();
}
