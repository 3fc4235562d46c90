//! Simulation tick
//!
//! Core loop that advances the arena by one step. Order is fixed:
//! commands, motion (unless paused), collisions (always), cap enforcement.

use super::collision::resolve_collisions;
use super::command::Command;
use super::motion::integrate_all;
use super::state::World;

/// Commands gathered by the input layer since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Take the pending commands, leaving this input empty
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Kind conversions made by the collision pass
    pub conversions: usize,
    /// Entities dropped by cap enforcement
    pub truncated: usize,
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    for command in &input.commands {
        world.apply(command);
    }

    if !world.sim.paused {
        integrate_all(world.population.entities_mut(), &world.arena);
    }

    // Runs while paused too: overlapping entities still convert at rest
    let conversions = resolve_collisions(world.population.entities_mut());

    let truncated = world.population.enforce_cap(&world.sim);

    world.time_ticks += 1;

    TickReport {
        conversions,
        truncated,
    }
}
