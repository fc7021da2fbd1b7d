//! # Gridlane Runtime
//!
//! The grid the agents live on, the traffic light that governs it, and
//! the TOML scenarios that set both up.
//!
//! Each tick the grid hands every live vehicle a view of its four
//! neighbours, validates the move it asks for, resolves collisions on
//! shared cells, pokes the dead, and advances the light.

pub mod grid;
pub mod light;
pub mod map;
pub mod scenario;
pub mod prelude;
