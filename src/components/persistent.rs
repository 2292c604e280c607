//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are never despawned by a level
//! reset. The menu and the engine observers carry it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that survive level resets.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
