use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

pub struct ActionPlugin;

impl Plugin for ActionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InputManagerPlugin::<HandAction>::default())
            .init_resource::<ActionState<HandAction>>()
            .insert_resource(HandAction::input_map());
    }
}

/// Key-mode drive actions, routed to joints by their configured axis.
#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum HandAction {
    RaiseX,
    LowerX,
    RaiseZ,
    LowerZ,
}

impl HandAction {
    /// Define the default bindings to the input
    pub fn input_map() -> InputMap<Self> {
        let mut input_map = InputMap::default();

        // X-axis joints travel on D/A, Z-axis joints on W/S.
        input_map.insert(Self::RaiseX, KeyCode::KeyD);
        input_map.insert(Self::LowerX, KeyCode::KeyA);
        input_map.insert(Self::RaiseZ, KeyCode::KeyW);
        input_map.insert(Self::LowerZ, KeyCode::KeyS);

        input_map
    }
}
