//! Population management and cap enforcement
//!
//! `spawn` refuses to grow past the cap, but the cap itself can shrink at any
//! time (slider). `enforce_cap` runs every tick and is the authoritative
//! reconciliation point: it truncates from the tail.

use rand::Rng;

use super::snapshot::KindCounts;
use super::state::{Arena, Entity, Kind, SimulationState};
use crate::consts::{MAX_MAX_OBJECTS, MIN_MAX_OBJECTS};

/// Ordered entity sequence (insertion order, never re-sorted)
#[derive(Debug, Clone, Default)]
pub struct Population {
    entities: Vec<Entity>,
}

impl Population {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(MAX_MAX_OBJECTS),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable view for the integrator and resolver; length is fixed through it
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Append a pre-built entity, subject to the cap
    pub fn push(&mut self, entity: Entity, sim: &SimulationState) -> bool {
        if self.entities.len() >= sim.max_objects {
            log::debug!(
                "Spawn of {} dropped: population at cap {}",
                entity.kind.as_str(),
                sim.max_objects
            );
            return false;
        }
        self.entities.push(entity);
        true
    }

    /// Spawn a random entity of `kind`; silently dropped at the cap
    pub fn spawn(
        &mut self,
        kind: Kind,
        sim: &SimulationState,
        arena: &Arena,
        rng: &mut impl Rng,
    ) -> bool {
        self.push(Entity::random(kind, arena, rng), sim)
    }

    pub fn clear(&mut self) {
        if !self.entities.is_empty() {
            log::info!("Arena cleared ({} entities removed)", self.entities.len());
        }
        self.entities.clear();
    }

    /// Drop entities from the tail until the cap holds. Returns how many were removed.
    pub fn enforce_cap(&mut self, sim: &SimulationState) -> usize {
        let excess = self.entities.len().saturating_sub(sim.max_objects);
        if excess > 0 {
            self.entities.truncate(sim.max_objects);
            log::debug!("Cap {} enforced: removed {} entities", sim.max_objects, excess);
        }
        excess
    }

    pub fn counts(&self) -> KindCounts {
        KindCounts::from_entities(&self.entities)
    }
}

impl SimulationState {
    /// Set the population cap, clamped to [MIN_MAX_OBJECTS, MAX_MAX_OBJECTS]
    pub fn set_cap(&mut self, new_max: usize) {
        self.max_objects = new_max.clamp(MIN_MAX_OBJECTS, MAX_MAX_OBJECTS);
    }

    /// Set the cap from a raw slider value (truncated toward zero, then clamped).
    /// Non-finite values are ignored.
    pub fn set_cap_from_slider(&mut self, value: f32) {
        if !value.is_finite() {
            log::debug!("Ignoring non-finite cap value {}", value);
            return;
        }
        // Negative values saturate to 0 and then clamp up to the minimum
        self.set_cap(value.trunc() as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn entity(kind: Kind, x: f32) -> Entity {
        Entity::new(kind, Vec2::new(x, 0.0), Vec2::new(1.0, 1.0), 50.0)
    }

    #[test]
    fn test_spawn_respects_cap() {
        let sim = SimulationState::new(1, 3);
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pop = Population::new();

        for _ in 0..3 {
            assert!(pop.spawn(Kind::Paper, &sim, &arena, &mut rng));
        }
        assert!(!pop.spawn(Kind::Rock, &sim, &arena, &mut rng));
        assert!(!pop.push(entity(Kind::Scissors, 0.0), &sim));
        assert_eq!(pop.len(), 3);
        assert!(pop.entities().iter().all(|e| e.kind == Kind::Paper));
    }

    #[test]
    fn test_enforce_cap_truncates_tail() {
        let mut sim = SimulationState::new(1, 10);
        let mut pop = Population::new();
        for i in 0..5 {
            assert!(pop.push(entity(Kind::ALL[i % 3], i as f32), &sim));
        }

        sim.set_cap(2);
        // Shrinking the cap alone changes nothing until enforcement
        assert_eq!(pop.len(), 5);
        assert_eq!(pop.enforce_cap(&sim), 3);
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.entities()[0].pos.x, 0.0);
        assert_eq!(pop.entities()[1].pos.x, 1.0);

        assert_eq!(pop.enforce_cap(&sim), 0);
    }

    #[test]
    fn test_clear() {
        let sim = SimulationState::default();
        let mut pop = Population::new();
        pop.push(entity(Kind::Rock, 0.0), &sim);
        pop.clear();
        assert!(pop.is_empty());
        pop.clear();
        assert!(pop.is_empty());
    }

    #[test]
    fn test_set_cap_clamps() {
        let mut sim = SimulationState::default();
        sim.set_cap(0);
        assert_eq!(sim.max_objects, 1);
        sim.set_cap(250);
        assert_eq!(sim.max_objects, 100);
        sim.set_cap(37);
        assert_eq!(sim.max_objects, 37);
    }

    #[test]
    fn test_set_cap_from_slider() {
        let mut sim = SimulationState::default();
        sim.set_cap_from_slider(41.9);
        assert_eq!(sim.max_objects, 41);
        sim.set_cap_from_slider(0.4);
        assert_eq!(sim.max_objects, 1);
        sim.set_cap_from_slider(-12.0);
        assert_eq!(sim.max_objects, 1);
        sim.set_cap_from_slider(1e9);
        assert_eq!(sim.max_objects, 100);
        sim.set_cap_from_slider(f32::NAN);
        assert_eq!(sim.max_objects, 100);
    }

    #[test]
    fn test_counts() {
        let sim = SimulationState::default();
        let mut pop = Population::new();
        for kind in [Kind::Rock, Kind::Rock, Kind::Scissors] {
            pop.push(entity(kind, 0.0), &sim);
        }
        let counts = pop.counts();
        assert_eq!((counts.rock, counts.paper, counts.scissors), (2, 0, 1));
    }
}
