//! Truck — runs red lights and never dies.

use super::{all_eligible, sides_then_front};
use crate::policy::car::Car;
use gridlane_core::primitives::MovementPolicy;
use gridlane_core::random::{choose, ChoiceSource};
use gridlane_core::types::{Direction, Light, NeighborView, Terrain};

/// Zero: a truck can never lose a collision, so it is never dead.
pub const DEATH_TIME: u32 = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Truck;

impl MovementPolicy for Truck {
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Street | Terrain::Light => true,
            Terrain::Crosswalk => matches!(light, Light::Green | Light::Yellow),
            Terrain::Grass | Terrain::Trail | Terrain::Wall => false,
        }
    }

    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        _light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction {
        let candidates = all_eligible(sides_then_front(facing), neighbors, Car::is_road);
        choose(rng, &candidates).unwrap_or_else(|| facing.reverse())
    }
}
