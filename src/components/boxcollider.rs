use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Axis-aligned box attached to an entity, positioned relative to its
/// [`MapPosition`](super::mapposition::MapPosition) by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: (f32, f32),
    pub offset: (f32, f32),
}

impl BoxCollider {
    /// Create a BoxCollider with given size whose top-left sits on the position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: (width, height),
            offset: (0.0, 0.0),
        }
    }

    /// Create a BoxCollider with given size centered on the position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(-width * 0.5, -height * 0.5)
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = (dx, dy);
        self
    }

    /// World-space rectangle of the collider for an entity at `(x, y)`.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, x: f32, y: f32) -> Rect {
        Rect::new(x + self.offset.0, y + self.offset.1, self.size.0, self.size.1)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: (f32, f32), other: &Self, other_position: (f32, f32)) -> bool {
        self.aabb(position.0, position.1)
            .overlaps(&other.aabb(other_position.0, other_position.1))
    }

    /// Pivot `y` that puts the bottom edge of [`aabb`](Self::aabb) on `edge_y`.
    pub fn y_with_bottom_at(&self, edge_y: f32) -> f32 {
        edge_y - self.aabb(0.0, 0.0).bottom()
    }
}
