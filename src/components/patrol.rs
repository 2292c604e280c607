//! Back-and-forth horizontal patrol between two x bounds.

use bevy_ecs::prelude::Component;

/// Patrol state of an enemy.
///
/// The entity moves `speed * direction` units per tick and flips `direction`
/// whenever its x is at or beyond one of the limits.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Patrol {
    pub left_limit: f32,
    pub right_limit: f32,
    pub speed: f32,
    /// Either `-1.0` or `1.0`.
    pub direction: f32,
}

impl Patrol {
    pub fn new(left_limit: f32, right_limit: f32, speed: f32, direction: f32) -> Self {
        Self {
            left_limit,
            right_limit,
            speed,
            direction: if direction < 0.0 { -1.0 } else { 1.0 },
        }
    }

    /// Move `x` one tick along the patrol and return the new x.
    ///
    /// Reversal is inclusive: landing exactly on a limit flips the direction.
    pub fn step(&mut self, x: f32) -> f32 {
        let x = x + self.speed * self.direction;
        if x <= self.left_limit || x >= self.right_limit {
            self.direction = -self.direction;
        }
        x
    }
}

/// Marker for patrolling enemies.
#[derive(Component, Clone, Copy, Debug)]
pub struct Enemy;
