//! World-space position of an entity.
//!
//! The position is the entity's pivot. Hero, enemies and ground tiles all use
//! their center as pivot; [`Sprite::origin`](super::sprite::Sprite::origin) and
//! [`BoxCollider::offset`](super::boxcollider::BoxCollider::offset) are expressed
//! relative to it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
