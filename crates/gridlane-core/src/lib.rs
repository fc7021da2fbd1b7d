//! # Gridlane Core
//!
//! Core traits and types for agents moving across a terrain grid under a
//! global traffic light.
//!
//! This crate defines the value types every other gridlane crate speaks
//! ([`Direction`](types::Direction), [`Terrain`](types::Terrain),
//! [`Light`](types::Light), [`NeighborView`](types::NeighborView)) and the
//! three capabilities an agent is built from:
//!
//! - **NAVIGATE** — decide where to go and whether a cell may be entered
//! - **REVIVE** — die, count down while dead, come back
//! - **COLLIDE** — settle who survives when two agents share a cell
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlane_core::prelude::*;
//!
//! let facing = Direction::North;
//! assert_eq!(facing.left(), Direction::West);
//! assert_eq!(facing.reverse().reverse(), facing);
//!
//! // Deterministic vehicle id (for testing)
//! let id = VehicleId::from_seed(42);
//! assert_eq!(id, VehicleId::from_seed(42));
//! ```

pub mod types;
pub mod primitives;
pub mod agent;
pub mod random;
pub mod error;
pub mod prelude;
