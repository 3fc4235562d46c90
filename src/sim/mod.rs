//! Simulation module
//!
//! All arena logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One tick = one fixed step (no dt scaling)
//! - Seeded RNG only
//! - Stable iteration order (insertion order, never re-sorted)

pub mod clock;
pub mod collision;
pub mod command;
pub mod motion;
pub mod population;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::FixedStep;
pub use collision::resolve_collisions;
pub use command::Command;
pub use motion::{integrate, integrate_all};
pub use population::Population;
pub use snapshot::{EntityView, KindCounts, Snapshot};
pub use state::{Arena, Entity, Kind, SimulationState, World};
pub use tick::{TickInput, tick};
