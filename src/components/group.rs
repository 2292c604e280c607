use bevy_ecs::prelude::Component;

/// Names the family an entity belongs to ("hero", "enemies", "ground", "menu").
///
/// Every entity spawned by a level reset carries a group; the reset observer
/// despawns all grouped entities that are not
/// [`Persistent`](super::persistent::Persistent).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}
