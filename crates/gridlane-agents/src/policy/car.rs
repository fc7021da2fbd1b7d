//! Car — obeys the lights, turns in a fixed order.

use super::first_eligible;
use gridlane_core::primitives::navigate::forward_arc;
use gridlane_core::primitives::MovementPolicy;
use gridlane_core::random::ChoiceSource;
use gridlane_core::types::{Direction, Light, NeighborView, Terrain};

/// Ticks a car stays dead after losing a collision.
pub const DEATH_TIME: u32 = 15;

/// Street-bound, light-respecting driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

impl Car {
    /// Terrain a car will steer toward, whatever the light.
    pub fn is_road(terrain: Terrain) -> bool {
        matches!(terrain, Terrain::Street | Terrain::Crosswalk | Terrain::Light)
    }
}

impl MovementPolicy for Car {
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Street => true,
            Terrain::Crosswalk => light == Light::Green,
            Terrain::Light => matches!(light, Light::Green | Light::Yellow),
            Terrain::Grass | Terrain::Trail | Terrain::Wall => false,
        }
    }

    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        _light: Light,
        _rng: &mut dyn ChoiceSource,
    ) -> Direction {
        first_eligible(forward_arc(facing), neighbors, Car::is_road)
            .unwrap_or_else(|| facing.reverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlane_core::random::ScriptedChoice;

    #[test]
    fn pass_table() {
        let car = Car;
        for light in Light::ALL {
            assert!(car.can_pass(Terrain::Street, light));
            assert!(!car.can_pass(Terrain::Grass, light));
            assert!(!car.can_pass(Terrain::Trail, light));
            assert!(!car.can_pass(Terrain::Wall, light));
        }
        assert!(car.can_pass(Terrain::Crosswalk, Light::Green));
        assert!(!car.can_pass(Terrain::Crosswalk, Light::Yellow));
        assert!(!car.can_pass(Terrain::Crosswalk, Light::Red));
        assert!(car.can_pass(Terrain::Light, Light::Green));
        assert!(car.can_pass(Terrain::Light, Light::Yellow));
        assert!(!car.can_pass(Terrain::Light, Light::Red));
    }

    #[test]
    fn prefers_straight_ahead() {
        let view = NeighborView::uniform(Terrain::Street);
        let mut rng = ScriptedChoice::default();
        assert_eq!(
            Car.choose_direction(Direction::South, &view, Light::Red, &mut rng),
            Direction::South
        );
        assert_eq!(rng.calls(), 0, "cars never consult the random source");
    }

    #[test]
    fn right_only_when_front_and_left_are_blocked() {
        // facing east: left is north, right is south
        let view = NeighborView::uniform(Terrain::Grass).with(Direction::South, Terrain::Light);
        let d = Car.choose_direction(Direction::East, &view, Light::Red, &mut ScriptedChoice::default());
        assert_eq!(d, Direction::South);
    }

    #[test]
    fn reverses_in_a_dead_end() {
        let view = NeighborView::uniform(Terrain::Wall).with(Direction::West, Terrain::Street);
        let d = Car.choose_direction(Direction::East, &view, Light::Green, &mut ScriptedChoice::default());
        assert_eq!(d, Direction::West);
    }
}
