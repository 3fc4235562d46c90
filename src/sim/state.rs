//! World state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::command::Command;
use super::population::Population;
use crate::consts::*;
use crate::settings::Settings;

/// Entity category governing dominance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Rock,
    Paper,
    Scissors,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Rock, Kind::Paper, Kind::Scissors];

    /// Cyclic dominance: Rock > Scissors > Paper > Rock
    pub fn beats(self, other: Kind) -> bool {
        matches!(
            (self, other),
            (Kind::Rock, Kind::Scissors) | (Kind::Scissors, Kind::Paper) | (Kind::Paper, Kind::Rock)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Rock => "rock",
            Kind::Paper => "paper",
            Kind::Scissors => "scissors",
        }
    }

    /// Sprite the asset provider supplies for this kind
    pub fn asset_name(&self) -> &'static str {
        match self {
            Kind::Rock => "rock.png",
            Kind::Paper => "paper.png",
            Kind::Scissors => "scissors.png",
        }
    }
}

/// Arena bounds and entity geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Shared footprint and collision threshold of every entity
    pub entity_size: f32,
    pub spawn_margin: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            entity_size: ENTITY_SIZE,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

impl Arena {
    /// Largest in-bounds x for an entity's top-left corner
    pub fn max_x(&self) -> f32 {
        self.width - self.entity_size
    }

    /// Largest in-bounds y for an entity's top-left corner
    pub fn max_y(&self) -> f32 {
        self.height - self.entity_size
    }

    /// Random spawn position inside the arena minus the margin
    pub fn random_spawn_position(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            spawn_coord(rng, self.spawn_margin, self.width - self.spawn_margin, self.max_x()),
            spawn_coord(rng, self.spawn_margin, self.height - self.spawn_margin, self.max_y()),
        )
    }
}

fn spawn_coord(rng: &mut impl Rng, lo: f32, hi: f32, limit: f32) -> f32 {
    let hi = hi.min(limit).max(0.0);
    let lo = lo.min(hi).max(0.0);
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// A single rock, paper or scissors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: Kind,
    /// Top-left corner of the footprint
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Entity {
    pub fn new(kind: Kind, pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { kind, pos, vel, size }
    }

    /// Spawn at a random position with a random velocity
    pub fn random(kind: Kind, arena: &Arena, rng: &mut impl Rng) -> Self {
        let pos = arena.random_spawn_position(rng);
        let vel = Vec2::new(random_axis_speed(rng), random_axis_speed(rng));
        Self::new(kind, pos, vel, arena.entity_size)
    }
}

/// Random sign times a magnitude in [MIN_AXIS_SPEED, MAX_AXIS_SPEED]
fn random_axis_speed(rng: &mut impl Rng) -> f32 {
    let magnitude = rng.random_range(MIN_AXIS_SPEED..=MAX_AXIS_SPEED);
    if rng.random_bool(0.5) { magnitude } else { -magnitude }
}

/// User-controlled simulation parameters
///
/// Only ever changed by explicit commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    pub paused: bool,
    /// Tick rate multiplier in [MIN_SPEED, MAX_SPEED]
    pub speed_multiplier: u32,
    /// Population cap in [MIN_MAX_OBJECTS, MAX_MAX_OBJECTS]
    pub max_objects: usize,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            paused: false,
            speed_multiplier: MIN_SPEED,
            max_objects: DEFAULT_MAX_OBJECTS,
        }
    }
}

impl SimulationState {
    pub fn new(speed_multiplier: u32, max_objects: usize) -> Self {
        Self {
            paused: false,
            speed_multiplier: speed_multiplier.clamp(MIN_SPEED, MAX_SPEED),
            max_objects: max_objects.clamp(MIN_MAX_OBJECTS, MAX_MAX_OBJECTS),
        }
    }
}

/// Complete simulation world, owned by the tick loop
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the RNG was created from
    pub seed: u64,
    pub arena: Arena,
    pub sim: SimulationState,
    pub population: Population,
    /// Control panel visibility (input layer state, not simulation state)
    pub ui_visible: bool,
    /// Ticks executed so far
    pub time_ticks: u64,
    rng: Pcg32,
}

impl World {
    /// Create an empty world with default arena and parameters
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Arena::default(), SimulationState::default())
    }

    pub fn with_config(seed: u64, arena: Arena, sim: SimulationState) -> Self {
        Self {
            seed,
            arena,
            sim,
            population: Population::new(),
            ui_visible: true,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Build a world from (sanitized) settings; picks a fresh seed when unset
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.sanitized();
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("World created with seed: {}", seed);
        Self::with_config(
            seed,
            settings.arena(),
            SimulationState::new(settings.initial_speed, settings.initial_max_objects),
        )
    }

    /// Append a random entity of `kind` if below the cap. Returns whether it spawned.
    pub fn spawn(&mut self, kind: Kind) -> bool {
        self.population.spawn(kind, &self.sim, &self.arena, &mut self.rng)
    }

    pub fn clear(&mut self) {
        self.population.clear();
    }

    pub fn toggle_pause(&mut self) {
        self.sim.toggle_pause();
    }

    pub fn speed_up(&mut self) {
        self.sim.increase_speed();
    }

    pub fn speed_down(&mut self) {
        self.sim.decrease_speed();
    }

    /// Slider value; clamped, non-finite values ignored
    pub fn set_cap(&mut self, value: f32) {
        self.sim.set_cap_from_slider(value);
    }

    pub fn toggle_ui_visibility(&mut self) {
        self.ui_visible = !self.ui_visible;
    }

    pub fn show_ui(&mut self) {
        self.ui_visible = true;
    }

    /// Dispatch one input-layer command to its entry point
    pub fn apply(&mut self, command: &Command) {
        log::debug!("Applying command: {:?}", command);
        match *command {
            Command::SpawnRock => {
                self.spawn(Kind::Rock);
            }
            Command::SpawnPaper => {
                self.spawn(Kind::Paper);
            }
            Command::SpawnScissors => {
                self.spawn(Kind::Scissors);
            }
            Command::ClearAll => self.clear(),
            Command::TogglePause => self.toggle_pause(),
            Command::SpeedUp => self.speed_up(),
            Command::SpeedDown => self.speed_down(),
            Command::SetCap(value) => self.set_cap(value),
            Command::ToggleUiVisibility => self.toggle_ui_visibility(),
            Command::ShowUi => self.show_ui(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_table() {
        assert!(Kind::Rock.beats(Kind::Scissors));
        assert!(Kind::Scissors.beats(Kind::Paper));
        assert!(Kind::Paper.beats(Kind::Rock));
        for kind in Kind::ALL {
            assert!(!kind.beats(kind));
        }
        assert!(!Kind::Scissors.beats(Kind::Rock));
        assert!(!Kind::Paper.beats(Kind::Scissors));
        assert!(!Kind::Rock.beats(Kind::Paper));
    }

    #[test]
    fn test_random_entity_velocity_and_position() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let e = Entity::random(Kind::Rock, &arena, &mut rng);
            for v in [e.vel.x, e.vel.y] {
                assert!(v.abs() >= MIN_AXIS_SPEED && v.abs() <= MAX_AXIS_SPEED);
            }
            assert!(e.pos.x >= SPAWN_MARGIN && e.pos.x <= ARENA_WIDTH - SPAWN_MARGIN);
            assert!(e.pos.y >= SPAWN_MARGIN && e.pos.y <= ARENA_HEIGHT - SPAWN_MARGIN);
            assert_eq!(e.size, ENTITY_SIZE);
        }
    }

    #[test]
    fn test_spawn_in_tiny_arena_stays_in_bounds() {
        let arena = Arena {
            width: 60.0,
            height: 40.0,
            entity_size: 50.0,
            spawn_margin: 50.0,
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let pos = arena.random_spawn_position(&mut rng);
        assert!(pos.x >= 0.0 && pos.x <= arena.max_x());
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = World::new(42);
        let mut b = World::new(42);
        for kind in Kind::ALL {
            a.spawn(kind);
            b.spawn(kind);
        }
        assert_eq!(a.population.entities(), b.population.entities());
    }

    #[test]
    fn test_ui_visibility_commands() {
        let mut world = World::new(1);
        assert!(world.ui_visible);
        world.apply(&Command::ToggleUiVisibility);
        assert!(!world.ui_visible);
        world.apply(&Command::ShowUi);
        assert!(world.ui_visible);
    }

    #[test]
    fn test_simulation_state_new_clamps() {
        let state = SimulationState::new(0, 500);
        assert_eq!(state.speed_multiplier, MIN_SPEED);
        assert_eq!(state.max_objects, MAX_MAX_OBJECTS);
    }
}
