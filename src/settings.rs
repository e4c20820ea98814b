//! Static game settings and the per-level difficulty value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SettingsError;
use crate::fleet::Formation;

// ── Difficulty ────────────────────────────────────────────────────────────────

/// Speeds and bullet capacity for the current level.
///
/// Never mutated in place: a level-up replaces it with [`Difficulty::scaled`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Difficulty {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub fleet_speed: f32,
    /// Kept fractional so small scale factors still add a bullet eventually.
    pub bullet_capacity: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty {
            ship_speed: 5.0,
            bullet_speed: 7.0,
            fleet_speed: 2.0,
            bullet_capacity: 5.0,
        }
    }
}

impl Difficulty {
    pub fn scaled(&self, factor: f32) -> Difficulty {
        Difficulty {
            ship_speed: self.ship_speed * factor,
            bullet_speed: self.bullet_speed * factor,
            fleet_speed: self.fleet_speed * factor,
            bullet_capacity: self.bullet_capacity * factor,
        }
    }

    /// Maximum number of bullets allowed in flight at once.
    pub fn max_bullets(&self) -> usize {
        self.bullet_capacity.floor() as usize
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_w: u32,
    pub screen_h: u32,
    pub ship_w: u32,
    pub ship_h: u32,
    pub bullet_w: u32,
    pub bullet_h: u32,
    pub alien_w: u32,
    pub alien_h: u32,
    pub fleet_drop_speed: f32,
    pub alien_points: u32,
    pub starting_lives: u32,
    /// Multiplier applied to the difficulty on every level advance.
    pub difficulty_scale: f32,
    pub fps: u32,
    pub life_lost_pause_ticks: u32,
    pub formation: Formation,
    pub scores_file: PathBuf,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            screen_w: 1200,
            screen_h: 800,
            ship_w: 40,
            ship_h: 60,
            bullet_w: 25,
            bullet_h: 80,
            alien_w: 40,
            alien_h: 40,
            fleet_drop_speed: 40.0,
            alien_points: 50,
            starting_lives: 3,
            difficulty_scale: 1.1,
            fps: 60,
            life_lost_pause_ticks: 30,
            formation: Formation::Cross,
            scores_file: PathBuf::from("scores.json"),
            difficulty: Difficulty::default(),
        }
    }
}

impl Settings {
    /// Read settings from a TOML file.  Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Settings, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_toml_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Settings, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let sizes = [
            ("screen_w", self.screen_w),
            ("screen_h", self.screen_h),
            ("ship_w", self.ship_w),
            ("ship_h", self.ship_h),
            ("bullet_w", self.bullet_w),
            ("bullet_h", self.bullet_h),
            ("alien_w", self.alien_w),
            ("alien_h", self.alien_h),
            ("fps", self.fps),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(invalid(name, "must be greater than zero"));
            }
        }
        if self.ship_w > self.screen_w || self.ship_h > self.screen_h {
            return Err(invalid("ship_w", "ship does not fit on the screen"));
        }

        let speeds = [
            ("difficulty.ship_speed", self.difficulty.ship_speed),
            ("difficulty.bullet_speed", self.difficulty.bullet_speed),
            ("difficulty.fleet_speed", self.difficulty.fleet_speed),
            ("fleet_drop_speed", self.fleet_drop_speed),
        ];
        for (name, value) in speeds {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(name, "must be a positive number"));
            }
        }
        if self.difficulty.max_bullets() == 0 {
            return Err(invalid("difficulty.bullet_capacity", "must allow at least one bullet"));
        }
        if !(self.difficulty_scale.is_finite() && self.difficulty_scale >= 1.0) {
            return Err(invalid("difficulty_scale", "must be at least 1.0"));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        name,
        reason: reason.to_string(),
    }
}
