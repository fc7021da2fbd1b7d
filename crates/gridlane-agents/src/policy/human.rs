//! Human — walks on grass, crosses when traffic is held.

use super::{all_eligible, sides_then_front};
use gridlane_core::primitives::MovementPolicy;
use gridlane_core::random::{choose, ChoiceSource};
use gridlane_core::types::{Direction, Light, NeighborView, Terrain};

/// The longest wait of any kind.
pub const DEATH_TIME: u32 = 45;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Human;

impl MovementPolicy for Human {
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Grass => true,
            Terrain::Crosswalk => matches!(light, Light::Yellow | Light::Red),
            Terrain::Street | Terrain::Light | Terrain::Trail | Terrain::Wall => false,
        }
    }

    /// Draws among grass cells and the crosswalks it may step on right now.
    /// A crosswalk under a green light is not a candidate.
    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction {
        let walkable = |t: Terrain| match t {
            Terrain::Grass => true,
            Terrain::Crosswalk => self.can_pass(t, light),
            _ => false,
        };
        let candidates = all_eligible(sides_then_front(facing), neighbors, walkable);
        choose(rng, &candidates).unwrap_or_else(|| facing.reverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlane_core::random::ScriptedChoice;

    #[test]
    fn pass_table() {
        for light in Light::ALL {
            assert!(Human.can_pass(Terrain::Grass, light));
            assert!(!Human.can_pass(Terrain::Street, light));
            assert!(!Human.can_pass(Terrain::Trail, light));
        }
        assert!(!Human.can_pass(Terrain::Crosswalk, Light::Green));
        assert!(Human.can_pass(Terrain::Crosswalk, Light::Yellow));
        assert!(Human.can_pass(Terrain::Crosswalk, Light::Red));
    }

    #[test]
    fn crosswalk_is_a_candidate_on_red() {
        let view = NeighborView::uniform(Terrain::Wall).with(Direction::West, Terrain::Crosswalk);
        let mut rng = ScriptedChoice::new([0]);
        assert_eq!(
            Human.choose_direction(Direction::North, &view, Light::Red, &mut rng),
            Direction::West
        );
    }

    #[test]
    fn reverses_when_stranded() {
        let view = NeighborView::uniform(Terrain::Street);
        assert_eq!(
            Human.choose_direction(Direction::East, &view, Light::Red, &mut ScriptedChoice::default()),
            Direction::West
        );
    }
}
