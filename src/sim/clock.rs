//! Simulation clock: pause state, speed multiplier and frame pacing
//!
//! The multiplier scales how many ticks run per real second. A single tick
//! always moves entities by exactly one velocity step.

use super::state::SimulationState;
use crate::consts::{
    BASE_TICK_HZ, MAX_BASE_TICK_HZ, MAX_FRAME_DT, MAX_SPEED, MAX_SUBSTEPS, MIN_SPEED,
};

impl SimulationState {
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("Paused: {}", self.paused);
    }

    pub fn increase_speed(&mut self) {
        self.speed_multiplier = (self.speed_multiplier + 1).min(MAX_SPEED);
    }

    pub fn decrease_speed(&mut self) {
        self.speed_multiplier = self.speed_multiplier.saturating_sub(1).max(MIN_SPEED);
    }

    /// Target ticks per real second for a given base rate
    pub fn tick_rate_hz(&self, base_hz: u32) -> u32 {
        base_hz.max(1).saturating_mul(self.speed_multiplier.max(1))
    }
}

/// Fixed-step accumulator turning real frame time into a tick count
#[derive(Debug, Clone)]
pub struct FixedStep {
    base_hz: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(BASE_TICK_HZ)
    }
}

impl FixedStep {
    pub fn new(base_hz: u32) -> Self {
        Self {
            base_hz: base_hz.clamp(1, MAX_BASE_TICK_HZ),
            accumulator: 0.0,
        }
    }

    pub fn base_hz(&self) -> u32 {
        self.base_hz
    }

    /// Feed one frame's elapsed time; returns how many ticks to run now.
    ///
    /// Capped at MAX_SUBSTEPS; any backlog beyond that is dropped.
    pub fn advance(&mut self, frame_dt: f32, sim: &SimulationState) -> u32 {
        let tick_dt = 1.0 / sim.tick_rate_hz(self.base_hz) as f32;
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= tick_dt && ticks < MAX_SUBSTEPS {
            self.accumulator -= tick_dt;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS && self.accumulator >= tick_dt {
            log::debug!("Frame backlog dropped ({:.3}s)", self.accumulator);
            self.accumulator = 0.0;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pause_twice_restores() {
        let mut sim = SimulationState::default();
        let before = sim.paused;
        sim.toggle_pause();
        assert_ne!(sim.paused, before);
        sim.toggle_pause();
        assert_eq!(sim.paused, before);
    }

    #[test]
    fn test_speed_clamped() {
        let mut sim = SimulationState::default();
        sim.decrease_speed();
        assert_eq!(sim.speed_multiplier, 1);
        for _ in 0..20 {
            sim.increase_speed();
        }
        assert_eq!(sim.speed_multiplier, 10);
        sim.decrease_speed();
        assert_eq!(sim.speed_multiplier, 9);
    }

    #[test]
    fn test_tick_rate_scales_with_speed() {
        let mut sim = SimulationState::default();
        assert_eq!(sim.tick_rate_hz(30), 30);
        sim.increase_speed();
        sim.increase_speed();
        assert_eq!(sim.tick_rate_hz(30), 90);
    }

    #[test]
    fn test_tick_rate_saturates() {
        let sim = SimulationState::new(10, 20);
        assert_eq!(sim.tick_rate_hz(500_000_000), u32::MAX);
        assert_eq!(sim.tick_rate_hz(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_fixed_step_clamps_base_rate() {
        let sim = SimulationState::new(10, 20);
        let mut step = FixedStep::new(500_000_000);
        assert_eq!(step.base_hz(), MAX_BASE_TICK_HZ);
        assert_eq!(step.advance(0.016, &sim), MAX_SUBSTEPS);
        assert_eq!(FixedStep::new(0).base_hz(), 1);
    }

    #[test]
    fn test_fixed_step_accumulates() {
        let sim = SimulationState::default();
        let mut step = FixedStep::new(30);
        // Half a tick: nothing yet
        assert_eq!(step.advance(1.0 / 60.0, &sim), 0);
        // Second half plus a bit: one tick
        assert_eq!(step.advance(1.0 / 60.0 + 0.001, &sim), 1);
        // 0.1s at 30 Hz: three ticks
        assert_eq!(step.advance(0.1, &sim), 3);
    }

    #[test]
    fn test_fixed_step_caps_substeps() {
        let sim = SimulationState::new(10, 20);
        let mut step = FixedStep::new(30);
        // 0.25s at 300 Hz would be 75 ticks
        assert_eq!(step.advance(1.0, &sim), MAX_SUBSTEPS);
        // Backlog was dropped
        assert_eq!(step.advance(0.0, &sim), 0);
    }
}
