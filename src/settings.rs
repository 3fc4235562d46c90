//! Arena settings
//!
//! Loaded from a JSON file at startup. Every field is optional in the file;
//! missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Arena;

/// Arena and startup parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Entity footprint and collision distance
    pub entity_size: f32,
    /// Distance from the walls kept clear when spawning
    pub spawn_margin: f32,

    // === Clock ===
    /// Ticks per second at speed 1
    pub base_tick_hz: u32,
    pub initial_speed: u32,

    // === Population ===
    pub initial_max_objects: usize,

    /// RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            entity_size: ENTITY_SIZE,
            spawn_margin: SPAWN_MARGIN,

            base_tick_hz: BASE_TICK_HZ,
            initial_speed: MIN_SPEED,

            initial_max_objects: DEFAULT_MAX_OBJECTS,

            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "RPS_SETTINGS";
    /// Settings file used when the environment variable is unset
    pub const DEFAULT_PATH: &'static str = "rps_settings.json";

    /// Settings file location
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load from `path`, falling back to defaults if missing or malformed
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            None => {
                log::warn!("Malformed settings in {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse and sanitize settings JSON
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::debug!("Settings parse error: {}", e);
                None
            }
        }
    }

    /// Save to `path` as pretty JSON
    pub fn save_to(&self, path: &Path) -> bool {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
                return false;
            }
        };
        match std::fs::write(path, json) {
            Ok(()) => {
                log::info!("Settings saved to {}", path.display());
                true
            }
            Err(e) => {
                log::warn!("Failed to write {}: {}", path.display(), e);
                false
            }
        }
    }

    /// Copy with every value forced into a usable range
    pub fn sanitized(&self) -> Self {
        let entity_size = positive_or(self.entity_size, ENTITY_SIZE);
        let arena_width = positive_or(self.arena_width, ARENA_WIDTH).max(entity_size);
        let arena_height = positive_or(self.arena_height, ARENA_HEIGHT).max(entity_size);
        let spawn_margin = if self.spawn_margin.is_finite() {
            self.spawn_margin.clamp(0.0, arena_width.min(arena_height) / 2.0)
        } else {
            SPAWN_MARGIN.min(arena_width.min(arena_height) / 2.0)
        };

        Self {
            arena_width,
            arena_height,
            entity_size,
            spawn_margin,
            base_tick_hz: self.base_tick_hz.clamp(1, MAX_BASE_TICK_HZ),
            initial_speed: self.initial_speed.clamp(MIN_SPEED, MAX_SPEED),
            initial_max_objects: self
                .initial_max_objects
                .clamp(MIN_MAX_OBJECTS, MAX_MAX_OBJECTS),
            seed: self.seed,
        }
    }

    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
            entity_size: self.entity_size,
            spawn_margin: self.spawn_margin,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
