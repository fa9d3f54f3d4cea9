//! Runtime settings read from ~/.flappy/config.json.
//!
//! Every field has a default, so a missing file, a partial file, or a file
//! that fails to parse all produce a playable configuration.

use crate::constants::{CONFIG_FILE, DEFAULT_SCROLL_SPEED, DEFAULT_TARGET_FPS, MAX_SCROLL_SPEED};
use crate::utils::persistence::{load_json_or_default, save_path};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frame-rate cap for the main loop.
    pub target_fps: u32,
    /// Shared pipe and ground scroll speed in px/s.
    pub scroll_speed: f64,
    /// Ring the terminal bell for score and death cues.
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match save_path(CONFIG_FILE) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("No config directory ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        load_json_or_default::<Self>(path).sanitized()
    }

    /// Replace out-of-range values with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(1..=240).contains(&self.target_fps) {
            self.target_fps = defaults.target_fps;
        }
        if !(self.scroll_speed > 0.0 && self.scroll_speed <= MAX_SCROLL_SPEED) {
            self.scroll_speed = defaults.scroll_speed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "sound": false }"#).unwrap();
        let config = GameConfig::load_from(&path);
        assert!(!config.sound);
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
        assert_eq!(config.scroll_speed, DEFAULT_SCROLL_SPEED);
    }

    #[test]
    fn test_out_of_range_values_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "target_fps": 0, "scroll_speed": -5.0 }"#).unwrap();
        let config = GameConfig::load_from(&path);
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);
        assert_eq!(config.scroll_speed, DEFAULT_SCROLL_SPEED);

        for speed in ["1e10", "2000.5", "0"] {
            fs::write(&path, format!(r#"{{ "scroll_speed": {} }}"#, speed)).unwrap();
            let config = GameConfig::load_from(&path);
            assert_eq!(config.scroll_speed, DEFAULT_SCROLL_SPEED, "{}", speed);
        }

        fs::write(&path, r#"{ "scroll_speed": 2000.0 }"#).unwrap();
        assert_eq!(GameConfig::load_from(&path).scroll_speed, MAX_SCROLL_SPEED);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{{{{").unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
    }
}
