//! Motion integration with soft wall bounce
//!
//! Positions advance by one velocity step per tick. A coordinate touching or
//! crossing a wall flips that axis's velocity; the position itself is never
//! clamped, so an entity may overshoot a wall for a tick before coming back.

use super::state::{Arena, Entity};

/// Advance one entity by one tick
pub fn integrate(entity: &mut Entity, arena: &Arena) {
    entity.pos += entity.vel;

    if entity.pos.x <= 0.0 || entity.pos.x >= arena.width - entity.size {
        entity.vel.x = -entity.vel.x;
    }
    if entity.pos.y <= 0.0 || entity.pos.y >= arena.height - entity.size {
        entity.vel.y = -entity.vel.y;
    }
}

/// Advance every entity, in population order
pub fn integrate_all(entities: &mut [Entity], arena: &Arena) {
    for entity in entities.iter_mut() {
        integrate(entity, arena);
    }
}
