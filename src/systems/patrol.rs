use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patrol;

/// Move every patrolling entity one step and flip it at its bounds.
pub fn patrol_system(mut query: Query<(&mut MapPosition, &mut Patrol)>) {
    for (mut pos, mut patrol) in query.iter_mut() {
        pos.x = patrol.step(pos.x);
    }
}
