use crate::components::menu::MenuAction;
use bevy_ecs::prelude::*;

/// A menu button was pressed.
#[derive(Event, Debug, Clone)]
pub struct MenuSelectionEvent {
    pub action: MenuAction,
}
