//! Vertical kinematics for entities that fall and land on the ground.
//!
//! The [`PhysicsBody`] component stores the per-tick vertical velocity, the
//! gravity that accelerates it and whether the entity is resting on a tile.
//! Units are world units per tick; the simulation has a fixed step, so there
//! is no time delta involved.

use bevy_ecs::prelude::Component;

use super::mapposition::MapPosition;

/// Kinematic body with gravity and a grounded flag.
///
/// Updated by [`crate::systems::physics::gravity_system`]; jumping is done by
/// the hero systems through [`PhysicsBody::jump`].
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PhysicsBody {
    /// Vertical velocity, positive downwards.
    pub velocity_y: f32,
    /// Added to `velocity_y` every tick.
    pub gravity: f32,
    /// True while the body rests on top of a tile.
    pub grounded: bool,
}

impl PhysicsBody {
    /// Create a body at rest (not yet grounded) with the given gravity.
    pub fn new(gravity: f32) -> Self {
        Self {
            velocity_y: 0.0,
            gravity,
            grounded: false,
        }
    }

    /// Integrate one tick of gravity into the velocity and the position.
    ///
    /// Clears `grounded`; landing resolution sets it again when the body
    /// ends the tick on a tile.
    pub fn integrate(&mut self, position: &mut MapPosition) {
        self.velocity_y += self.gravity;
        position.y += self.velocity_y;
        self.grounded = false;
    }

    /// Stop on a surface: zero velocity and mark grounded.
    pub fn land(&mut self) {
        self.velocity_y = 0.0;
        self.grounded = true;
    }

    /// Launch upwards with `speed` (a positive magnitude) if grounded.
    /// Returns whether the jump happened.
    pub fn jump(&mut self, speed: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity_y = -speed;
        self.grounded = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_is_at_rest() {
        let body = PhysicsBody::new(0.5);
        assert!(approx_eq(body.velocity_y, 0.0));
        assert!(!body.grounded);
    }

    #[test]
    fn test_integrate_accumulates_velocity_then_moves() {
        let mut body = PhysicsBody::new(0.5);
        let mut pos = MapPosition::new(0.0, 100.0);
        body.integrate(&mut pos);
        assert!(approx_eq(body.velocity_y, 0.5));
        assert!(approx_eq(pos.y, 100.5));
        body.integrate(&mut pos);
        assert!(approx_eq(body.velocity_y, 1.0));
        assert!(approx_eq(pos.y, 101.5));
    }

    #[test]
    fn test_integrate_clears_grounded() {
        let mut body = PhysicsBody::new(0.5);
        body.land();
        assert!(body.grounded);
        body.integrate(&mut MapPosition::new(0.0, 0.0));
        assert!(!body.grounded);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut body = PhysicsBody::new(0.5);
        assert!(!body.jump(10.0));
        assert!(approx_eq(body.velocity_y, 0.0));

        body.land();
        assert!(body.jump(10.0));
        assert!(approx_eq(body.velocity_y, -10.0));
        assert!(!body.grounded);
    }
}
