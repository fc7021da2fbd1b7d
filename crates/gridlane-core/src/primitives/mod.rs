//! The three agent capabilities.
//!
//! Each capability is a trait. A vehicle kind supplies a
//! [`MovementPolicy`]; the shared lifecycle supplies [`Revive`] and
//! [`Collide`].

pub mod collide;
pub mod navigate;
pub mod revive;

pub use collide::{Collide, CollisionOutcome};
pub use navigate::MovementPolicy;
pub use revive::{Mortal, Revive};
