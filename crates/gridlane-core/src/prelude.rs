//! Gridlane Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use gridlane_core::prelude::*;
//! ```

pub use crate::types::{
    Direction, Terrain, Light,
    GridPoint, NeighborView,
    VehicleId, Tick,
};

pub use crate::primitives::{Collide, CollisionOutcome, Mortal, MovementPolicy, Revive};
pub use crate::primitives::collide::{resolve_collision, Mortality};

pub use crate::agent::Agent;

pub use crate::random::{ChoiceSource, ScriptedChoice, seeded_rng};

pub use crate::error::{GridlaneError, Result};
