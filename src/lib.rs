//! RPS Arena - A rock/paper/scissors particle simulation
//!
//! Core modules:
//! - `sim`: Simulation core (motion, collisions, population, clock, tick loop)
//! - `settings`: Data-driven arena configuration
//! - `ui`: Control panel layout and input-event translation

pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
pub use sim::{Command, Kind, Snapshot, World, tick};

/// Simulation configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Entity footprint, also the collision distance threshold
    pub const ENTITY_SIZE: f32 = 50.0;
    /// Spawn keeps this far from every arena edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Per-axis initial speed range (pixels per tick)
    pub const MIN_AXIS_SPEED: f32 = 0.5;
    pub const MAX_AXIS_SPEED: f32 = 2.0;

    /// Ticks per second at speed multiplier 1
    pub const BASE_TICK_HZ: u32 = 30;
    /// Upper bound for a configured base tick rate
    pub const MAX_BASE_TICK_HZ: u32 = 1000;
    /// Speed multiplier bounds
    pub const MIN_SPEED: u32 = 1;
    pub const MAX_SPEED: u32 = 10;

    /// Population cap bounds and default
    pub const MIN_MAX_OBJECTS: usize = 1;
    pub const MAX_MAX_OBJECTS: usize = 100;
    pub const DEFAULT_MAX_OBJECTS: usize = 20;

    /// Maximum ticks run per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 16;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
}
