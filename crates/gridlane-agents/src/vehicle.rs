//! Vehicle — a kind plus its lifecycle.

use crate::kind::VehicleKind;
use crate::lifecycle::Lifecycle;
use gridlane_core::agent::Agent;
use gridlane_core::primitives::{Collide, Mortal, Revive};
use gridlane_core::random::ChoiceSource;
use gridlane_core::types::*;
use serde::{Deserialize, Serialize};

/// One agent on the grid.
///
/// The heading lives only in the lifecycle. Policies are handed that
/// heading on each call and never keep a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    kind: VehicleKind,
    lifecycle: Lifecycle,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, x: i32, y: i32, direction: Direction) -> Self {
        Self::with_id(VehicleId::new(), kind, x, y, direction)
    }

    /// Create a vehicle with a deterministic ID (for testing).
    pub fn with_seed(kind: VehicleKind, x: i32, y: i32, direction: Direction, seed: u64) -> Self {
        Self::with_id(VehicleId::from_seed(seed), kind, x, y, direction)
    }

    fn with_id(id: VehicleId, kind: VehicleKind, x: i32, y: i32, direction: Direction) -> Self {
        Self {
            id,
            kind,
            lifecycle: Lifecycle::new(GridPoint::new(x, y), direction, kind.death_time()),
        }
    }

    pub fn atv(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(VehicleKind::Atv, x, y, direction)
    }

    pub fn bicycle(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(VehicleKind::Bicycle, x, y, direction)
    }

    pub fn car(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(VehicleKind::Car, x, y, direction)
    }

    pub fn human(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(VehicleKind::Human, x, y, direction)
    }

    pub fn taxi(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(VehicleKind::Taxi, x, y, direction)
    }

    pub fn truck(x: i32, y: i32, direction: Direction) -> Self {
        Self::new(VehicleKind::Truck, x, y, direction)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn x(&self) -> i32 {
        self.lifecycle.position().x
    }

    pub fn y(&self) -> i32 {
        self.lifecycle.position().y
    }
}

impl Mortal for Vehicle {
    fn is_alive(&self) -> bool {
        self.lifecycle.is_alive()
    }

    fn death_time(&self) -> u32 {
        self.lifecycle.death_time()
    }
}

impl Revive for Vehicle {
    fn poke_count(&self) -> u32 {
        self.lifecycle.poke_count()
    }

    fn poke(&mut self, rng: &mut dyn ChoiceSource) -> bool {
        self.lifecycle.poke(rng)
    }

    fn reset(&mut self) {
        self.lifecycle.reset();
    }
}

impl Collide for Vehicle {
    fn collide(&mut self, other: &dyn Mortal) -> bool {
        self.lifecycle.collide(other)
    }
}

impl Agent for Vehicle {
    fn id(&self) -> VehicleId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    fn position(&self) -> GridPoint {
        self.lifecycle.position()
    }

    fn set_position(&mut self, position: GridPoint) {
        self.lifecycle.set_position(position);
    }

    fn direction(&self) -> Direction {
        self.lifecycle.direction()
    }

    fn set_direction(&mut self, direction: Direction) {
        self.lifecycle.set_direction(direction);
    }

    fn can_pass(&self, terrain: Terrain, light: Light) -> bool {
        self.kind.policy().can_pass(terrain, light)
    }

    fn choose_direction(
        &self,
        neighbors: &NeighborView,
        light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction {
        self.kind
            .policy()
            .choose_direction(self.direction(), neighbors, light, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_kind_death_time() {
        assert_eq!(Vehicle::human(0, 0, Direction::North).death_time(), 45);
        assert_eq!(Vehicle::truck(0, 0, Direction::North).death_time(), 0);
        assert_eq!(Vehicle::taxi(1, 2, Direction::East).kind(), VehicleKind::Taxi);
    }

    #[test]
    fn image_file_name_tracks_liveness() {
        let mut bike = Vehicle::bicycle(0, 0, Direction::North);
        assert_eq!(bike.image_file_name(), "bicycle.gif");
        let truck = Vehicle::truck(0, 0, Direction::North);
        assert!(bike.collide(&truck));
        assert_eq!(bike.image_file_name(), "bicycle_dead.gif");
    }

    #[test]
    fn seeded_ids_are_stable() {
        let a = Vehicle::with_seed(VehicleKind::Car, 0, 0, Direction::North, 7);
        let b = Vehicle::with_seed(VehicleKind::Car, 3, 3, Direction::South, 7);
        assert_eq!(a.id(), b.id());
    }
}
