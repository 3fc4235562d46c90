//! Pairwise contact detection and kind conversion
//!
//! Every unordered pair is visited once per tick in `(i, j)`, `i < j` order.
//! Kinds are read live, so a conversion early in the pass feeds into later
//! pairs of the same pass (chained infection). Do not snapshot kinds first.

use super::state::{Entity, Kind};

/// Whether two entities are close enough to interact
#[inline]
pub fn in_contact(a: &Entity, b: &Entity, threshold: f32) -> bool {
    a.pos.distance(b.pos) < threshold
}

/// Apply the dominance rule to a touching pair.
///
/// Returns the kind the loser was converted to, if any.
pub fn convert_pair(a: &mut Entity, b: &mut Entity) -> Option<Kind> {
    if a.kind.beats(b.kind) {
        b.kind = a.kind;
        Some(a.kind)
    } else if b.kind.beats(a.kind) {
        a.kind = b.kind;
        Some(b.kind)
    } else {
        None
    }
}

/// Run one O(n²) conversion pass over the population.
///
/// The first entity's size is the contact threshold for each pair. Returns
/// the number of conversions performed; the population length never changes.
pub fn resolve_collisions(entities: &mut [Entity]) -> usize {
    let mut conversions = 0;
    let n = entities.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = entities.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if !in_contact(a, b, a.size) {
                continue;
            }
            if let Some(winner) = convert_pair(a, b) {
                log::trace!("Pair ({}, {}) converted to {}", i, j, winner.as_str());
                conversions += 1;
            }
        }
    }
    conversions
}
