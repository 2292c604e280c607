//! Game configuration resource.
//!
//! Manages host settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 450
//! target_fps = 60
//! title = Platformer Test
//!
//! [audio]
//! music = walen_gameboy
//! music_volume = 0.4
//!
//! [assets]
//! path = ./assets
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 450;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Platformer Test";
const DEFAULT_MUSIC: &str = "walen_gameboy";
const DEFAULT_MUSIC_VOLUME: f32 = 0.4;
const DEFAULT_ASSETS_PATH: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the background track and where assets live.
/// The window size is also the visible width the ground row must cover.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames (ticks) per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Background music track id.
    pub music: String,
    /// Background music volume in `[0, 1]`.
    pub music_volume: f32,
    /// Root folder of images, music and sounds.
    pub assets_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            music: DEFAULT_MUSIC.to_string(),
            music_volume: DEFAULT_MUSIC_VOLUME,
            assets_path: PathBuf::from(DEFAULT_ASSETS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [audio] section
        if let Some(music) = config.get("audio", "music") {
            self.music = music;
        }
        if let Some(volume) = config.getfloat("audio", "music_volume").ok().flatten() {
            self.music_volume = (volume as f32).clamp(0.0, 1.0);
        }

        // [assets] section
        if let Some(path) = config.get("assets", "path") {
            self.assets_path = PathBuf::from(path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, music='{}' vol={}, assets={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.music,
            self.music_volume,
            self.assets_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [audio] section
        config.set("audio", "music", Some(self.music.clone()));
        config.set("audio", "music_volume", Some(self.music_volume.to_string()));

        // [assets] section
        config.set(
            "assets",
            "path",
            Some(self.assets_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("groundhop_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 450));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.music, "walen_gameboy");
        assert!((config.music_volume - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("missing_does_not_exist"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (800, 450));
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_path("partial");
        std::fs::write(&path, "[window]\nwidth = 1024\n\n[audio]\nmusic_volume = 0.8\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 450);
        assert!((config.music_volume - 0.8).abs() < 1e-6);
        assert_eq!(config.music, "walen_gameboy");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let mut config = GameConfig::with_path(&path);
        config.window_width = 640;
        config.target_fps = 30;
        config.music = "theme".to_string();
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window_width, 640);
        assert_eq!(loaded.target_fps, 30);
        assert_eq!(loaded.music, "theme");

        std::fs::remove_file(&path).ok();
    }
}
