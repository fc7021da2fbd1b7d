//! Taxi — drives exactly like a car.

use super::car::Car;
use gridlane_core::primitives::MovementPolicy;
use gridlane_core::random::ChoiceSource;
use gridlane_core::types::{Direction, Light, NeighborView, Terrain};

pub const DEATH_TIME: u32 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Taxi;

impl MovementPolicy for Taxi {
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool {
        Car.can_pass(terrain, light)
    }

    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction {
        Car.choose_direction(facing, neighbors, light, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlane_core::random::ScriptedChoice;

    #[test]
    fn matches_car_everywhere() {
        for terrain in Terrain::ALL {
            for light in Light::ALL {
                assert_eq!(Taxi.can_pass(terrain, light), Car.can_pass(terrain, light));
            }
        }
        let view = NeighborView::uniform(Terrain::Wall).with(Direction::North, Terrain::Crosswalk);
        for facing in Direction::ALL {
            assert_eq!(
                Taxi.choose_direction(facing, &view, Light::Red, &mut ScriptedChoice::default()),
                Car.choose_direction(facing, &view, Light::Red, &mut ScriptedChoice::default()),
            );
        }
    }
}
