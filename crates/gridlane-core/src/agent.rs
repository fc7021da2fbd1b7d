//! Agent — one vehicle or pedestrian on the grid.
//!
//! An agent owns its position, heading and lifecycle. The grid never
//! reaches into those fields; it asks the agent where it wants to go,
//! checks the destination with [`Agent::can_pass`], and then applies the
//! move through [`Agent::set_position`] and [`Agent::set_direction`].

use crate::primitives::{Collide, Revive};
use crate::random::ChoiceSource;
use crate::types::*;

/// A grid agent: movement rules plus the shared lifecycle.
pub trait Agent: Revive + Collide {
    /// The agent's unique identity.
    fn id(&self) -> VehicleId;

    /// Short lowercase kind name (`"car"`, `"truck"`, ...).
    fn kind_name(&self) -> &'static str;

    fn position(&self) -> GridPoint;

    /// Only called by the grid after validating a move.
    fn set_position(&mut self, position: GridPoint);

    fn direction(&self) -> Direction;

    /// Only called by the grid after a decision or on revival.
    fn set_direction(&mut self, direction: Direction);

    /// Whether this agent may enter `terrain` under `light`.
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool;

    /// The heading this agent wants next. Does not mutate the agent.
    fn choose_direction(
        &self,
        neighbors: &NeighborView,
        light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction;

    /// Sprite name for renderers: `car.gif` alive, `car_dead.gif` dead.
    fn image_file_name(&self) -> String {
        if self.is_alive() {
            format!("{}.gif", self.kind_name())
        } else {
            format!("{}_dead.gif", self.kind_name())
        }
    }
}
