use bevy_ecs::prelude::Component;

/// Marker for static ground tiles. Physics bodies land on the
/// [`BoxCollider`](super::boxcollider::BoxCollider) of every grounded tile.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ground;
