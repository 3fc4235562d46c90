//! Read-only per-tick view handed to the renderer

use serde::{Deserialize, Serialize};

use super::state::{Entity, Kind, World};

/// Per-kind population counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl KindCounts {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let mut counts = Self::default();
        for entity in entities {
            *counts.get_mut(entity.kind) += 1;
        }
        counts
    }

    pub fn get(&self, kind: Kind) -> usize {
        match kind {
            Kind::Rock => self.rock,
            Kind::Paper => self.paper,
            Kind::Scissors => self.scissors,
        }
    }

    fn get_mut(&mut self, kind: Kind) -> &mut usize {
        match kind {
            Kind::Rock => &mut self.rock,
            Kind::Paper => &mut self.paper,
            Kind::Scissors => &mut self.scissors,
        }
    }

    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    /// The only kind left alive, if the arena is non-empty and uniform
    pub fn sole_survivor(&self) -> Option<Kind> {
        let mut alive = Kind::ALL.into_iter().filter(|&k| self.get(k) > 0);
        match (alive.next(), alive.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }
}

/// Renderer-facing entity: kind and top-left position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: Kind,
    pub x: f32,
    pub y: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entities: Vec<EntityView>,
    pub counts: KindCounts,
    pub paused: bool,
    pub speed: u32,
    pub max_objects: usize,
    pub total_count: usize,
    pub ui_visible: bool,
    pub tick: u64,
}

impl World {
    pub fn snapshot(&self) -> Snapshot {
        let entities = self.population.entities();
        Snapshot {
            entities: entities
                .iter()
                .map(|e| EntityView {
                    kind: e.kind,
                    x: e.pos.x,
                    y: e.pos.y,
                })
                .collect(),
            counts: KindCounts::from_entities(entities),
            paused: self.sim.paused,
            speed: self.sim.speed_multiplier,
            max_objects: self.sim.max_objects,
            total_count: entities.len(),
            ui_visible: self.ui_visible,
            tick: self.time_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sole_survivor() {
        let empty = KindCounts::default();
        assert_eq!(empty.sole_survivor(), None);

        let mixed = KindCounts {
            rock: 2,
            paper: 1,
            scissors: 0,
        };
        assert_eq!(mixed.sole_survivor(), None);

        let uniform = KindCounts {
            rock: 0,
            paper: 0,
            scissors: 4,
        };
        assert_eq!(uniform.sole_survivor(), Some(Kind::Scissors));
        assert_eq!(uniform.total(), 4);
    }

    #[test]
    fn test_snapshot_mirrors_world() {
        let mut world = World::new(5);
        world.spawn(Kind::Rock);
        world.spawn(Kind::Paper);
        world.speed_up();
        world.toggle_pause();

        let snap = world.snapshot();
        assert_eq!(snap.total_count, 2);
        assert_eq!(
            snap.counts,
            KindCounts {
                rock: 1,
                paper: 1,
                scissors: 0,
            }
        );
        assert_eq!(snap.entities[0].kind, Kind::Rock);
        assert_eq!(snap.entities[1].kind, Kind::Paper);
        assert_eq!(snap.entities[0].x, world.population.entities()[0].pos.x);
        assert!(snap.paused);
        assert_eq!(snap.speed, 2);
        assert_eq!(snap.max_objects, 20);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut world = World::new(5);
        world.spawn(Kind::Scissors);
        let json = serde_json::to_value(world.snapshot()).unwrap();
        assert_eq!(json["entities"][0]["kind"], "scissors");
        assert_eq!(json["counts"]["scissors"], 1);
        assert_eq!(json["total_count"], 1);
    }
}
