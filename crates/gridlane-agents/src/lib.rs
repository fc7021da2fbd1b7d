//! # Gridlane Agents
//!
//! The six vehicle kinds and the lifecycle they share.
//!
//! Each kind is a [`MovementPolicy`](gridlane_core::primitives::MovementPolicy)
//! with its own terrain rules and death time:
//!
//! - **Car** / **Taxi** — streets, crosswalks on green, lights on green/yellow; ordered turns
//! - **Truck** — runs red lights, random turns, never dies
//! - **Bicycle** — prefers trails, then streets, then crosswalks
//! - **Atv** — goes anywhere but walls; only turns when a wall is near
//! - **Human** — grass, and crosswalks while cars are held at yellow/red
//!
//! A [`Vehicle`](vehicle::Vehicle) pairs a [`VehicleKind`](kind::VehicleKind)
//! with a [`Lifecycle`](lifecycle::Lifecycle).

pub mod lifecycle;
pub mod policy;
pub mod kind;
pub mod vehicle;
pub mod prelude;
