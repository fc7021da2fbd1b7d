//! NAVIGATE — where an agent wants to go, and where it may go.
//!
//! The two questions are asked at different times. Choosing happens first,
//! against the terrain around the agent. Entering happens afterwards, when
//! the grid re-checks the destination with [`MovementPolicy::can_pass`]
//! against the live light. An agent may therefore choose a cell it is then
//! refused; it simply stays put for that tick.

use crate::random::ChoiceSource;
use crate::types::{Direction, Light, NeighborView, Terrain};

/// Per-kind terrain rules and direction preferences.
///
/// Implementations are stateless: everything they need (current heading,
/// surrounding terrain, light color, random source) is passed in.
pub trait MovementPolicy {
    /// Whether this kind may enter `terrain` while the light shows `light`.
    ///
    /// Total over every pairing; anything not explicitly allowed is refused.
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool;

    /// The heading this kind wants next.
    ///
    /// Returns the current heading, a 90° turn, or `facing.reverse()` when
    /// nothing ahead or to the sides is acceptable.
    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction;
}

/// Front, left and right of a heading, in that order.
pub fn forward_arc(facing: Direction) -> [Direction; 3] {
    [facing, facing.left(), facing.right()]
}
