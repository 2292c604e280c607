//! Level layout and tuning.
//!
//! [`LevelConfig`] holds every gameplay constant used by a level reset and
//! by the per-tick systems: where the ground row sits, where the hero and
//! the enemies spawn, how fast they move and how strong gravity is. The
//! defaults describe the single built-in level; a JSON file can override
//! any subset of fields.
//!
//! ```json
//! {
//!   "ground_y": 320.0,
//!   "hero_spawn": [120.0, 320.0],
//!   "enemies": [
//!     { "x": 420.0, "left_limit": 380.0, "right_limit": 520.0 }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Spawn point and patrol bounds of one enemy. Enemies spawn at `ground_y`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub x: f32,
    pub left_limit: f32,
    pub right_limit: f32,
}

impl EnemySpawn {
    pub fn new(x: f32, left_limit: f32, right_limit: f32) -> Self {
        Self {
            x,
            left_limit,
            right_limit,
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
    /// Top edge of the ground row, and spawn height of every entity.
    pub ground_y: f32,
    /// Hero spawn position (centre pivot).
    pub hero_spawn: (f32, f32),
    /// Horizontal hero displacement per tick while a direction is held.
    pub hero_walk_speed: f32,
    /// Upward speed given by a jump.
    pub hero_jump_speed: f32,
    /// Added to the vertical velocity of every body each tick.
    pub gravity: f32,
    /// Horizontal enemy displacement per tick.
    pub enemy_speed: f32,
    pub enemies: Vec<EnemySpawn>,
    /// Sprite frame used for every ground tile.
    pub ground_tile: String,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            ground_y: 320.0,
            hero_spawn: (120.0, 320.0),
            hero_walk_speed: 3.0,
            hero_jump_speed: 10.0,
            gravity: 0.5,
            enemy_speed: 2.0,
            enemies: vec![
                EnemySpawn::new(420.0, 380.0, 520.0),
                EnemySpawn::new(650.0, 600.0, 750.0),
            ],
            ground_tile: "platform/ground".to_string(),
        }
    }
}

impl LevelConfig {
    /// Loads a level from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let level: LevelConfig = serde_json::from_str(&file_content)?;
        level.validate()?;
        Ok(level)
    }

    /// Rejects layouts the systems cannot run sensibly.
    pub fn validate(&self) -> Result<(), String> {
        let positions = [
            ("ground_y", self.ground_y),
            ("hero_spawn.x", self.hero_spawn.0),
            ("hero_spawn.y", self.hero_spawn.1),
        ];
        for (name, value) in positions {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }
        let rates = [
            ("gravity", self.gravity),
            ("hero_walk_speed", self.hero_walk_speed),
            ("hero_jump_speed", self.hero_jump_speed),
            ("enemy_speed", self.enemy_speed),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        for (i, enemy) in self.enemies.iter().enumerate() {
            if !(enemy.x.is_finite() && enemy.left_limit.is_finite() && enemy.right_limit.is_finite())
            {
                return Err(format!("enemy {} has a non-finite position or bound", i));
            }
            if enemy.left_limit > enemy.right_limit {
                return Err(format!(
                    "enemy {} has left_limit {} > right_limit {}",
                    i, enemy.left_limit, enemy.right_limit
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let level = LevelConfig::default();
        assert_eq!(level.ground_y, 320.0);
        assert_eq!(level.hero_spawn, (120.0, 320.0));
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.enemies[1], EnemySpawn::new(650.0, 600.0, 750.0));
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let level: LevelConfig =
            serde_json::from_str(r#"{ "gravity": 0.25, "enemies": [] }"#).unwrap();
        assert_eq!(level.gravity, 0.25);
        assert!(level.enemies.is_empty());
        assert_eq!(level.hero_walk_speed, 3.0);
        assert_eq!(level.ground_tile, "platform/ground");
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let level = LevelConfig {
            enemies: vec![EnemySpawn::new(10.0, 50.0, 0.0)],
            ..LevelConfig::default()
        };
        assert!(level.validate().is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let nan_speed = LevelConfig {
            hero_walk_speed: f32::NAN,
            ..LevelConfig::default()
        };
        assert!(nan_speed.validate().is_err());

        let nan_enemy_speed = LevelConfig {
            enemy_speed: f32::NAN,
            ..LevelConfig::default()
        };
        assert!(nan_enemy_speed.validate().is_err());

        let infinite_ground = LevelConfig {
            ground_y: f32::INFINITY,
            ..LevelConfig::default()
        };
        assert!(infinite_ground.validate().is_err());

        let nan_spawn = LevelConfig {
            hero_spawn: (f32::NAN, 320.0),
            ..LevelConfig::default()
        };
        assert!(nan_spawn.validate().is_err());

        let nan_enemy = LevelConfig {
            enemies: vec![EnemySpawn::new(f32::NAN, 380.0, 520.0)],
            ..LevelConfig::default()
        };
        assert!(nan_enemy.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(LevelConfig::load_from_file("/nonexistent/groundhop_level.json").is_err());
    }
}
