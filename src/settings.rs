//! Game settings
//!
//! Fixed presentation constants. Nothing is read from disk; the effective
//! settings are logged at startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::entity::KeyBindings;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    /// Window size in pixels
    pub window_size: (u32, u32),
    /// Frame-rate cap (frames per second)
    pub frame_rate_limit: u32,
    /// Background color (linear RGBA)
    pub clear_color: [f32; 4],

    // === Assets ===
    pub player_texture: PathBuf,
    pub ball_texture: PathBuf,

    // === Entities ===
    /// Player start position (screen space)
    pub player_start: Vec2,
    pub player_keys: KeyBindings,
    /// Ball spawn point (screen space)
    pub spawn_origin: Vec2,
    pub spawn_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Space Shooter".to_string(),
            window_size: (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
            frame_rate_limit: 60,
            clear_color: [1.0, 1.0, 1.0, 1.0],

            player_texture: PathBuf::from("mario.png"),
            ball_texture: PathBuf::from("smiley.png"),

            player_start: Vec2::new(SCREEN_WIDTH / 2.0, 0.0),
            player_keys: KeyBindings::ARROWS,
            spawn_origin: Vec2::new(SCREEN_WIDTH / 2.0, 0.0),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Settings {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Resolve an asset path: next to the executable if present there,
    /// otherwise relative to the working directory
    pub fn asset_path(&self, name: &Path) -> PathBuf {
        if name.is_absolute() {
            return name.to_path_buf();
        }
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(name)));
        match beside_exe {
            Some(path) if path.exists() => path,
            _ => name.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_playfield() {
        let settings = Settings::default();
        assert_eq!(settings.window_size, (800, 600));
        assert_eq!(settings.frame_rate_limit, 60);
        assert_eq!(settings.spawn_interval(), Duration::from_millis(500));
        assert_eq!(settings.player_start, Vec2::new(400.0, 0.0));
        assert_eq!(settings.spawn_origin, Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_missing_asset_falls_back_to_relative() {
        let settings = Settings::default();
        let path = settings.asset_path(Path::new("does-not-exist.png"));
        assert_eq!(path, PathBuf::from("does-not-exist.png"));
    }

    #[test]
    fn test_settings_json_has_bindings() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"window_title\":\"Space Shooter\""));
        assert!(json.contains("Left"));
    }
}
