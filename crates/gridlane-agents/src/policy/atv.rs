//! ATV — goes almost anywhere, lurches free when it meets a wall.

use gridlane_core::primitives::navigate::forward_arc;
use gridlane_core::primitives::MovementPolicy;
use gridlane_core::random::{choose, ChoiceSource};
use gridlane_core::types::{Direction, Light, NeighborView, Terrain};

pub const DEATH_TIME: u32 = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atv;

impl MovementPolicy for Atv {
    fn can_pass(&self, terrain: Terrain, _light: Light) -> bool {
        terrain != Terrain::Wall
    }

    /// Keeps its heading until a wall appears ahead or to either side, then
    /// draws uniformly among front, left and right regardless of what is
    /// there. The draw may land on the wall; the grid then refuses the move
    /// and the ATV tries again next tick.
    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        _light: Light,
        rng: &mut dyn ChoiceSource,
    ) -> Direction {
        let arc = forward_arc(facing);
        if arc.iter().any(|&d| neighbors[d] == Terrain::Wall) {
            choose(rng, &arc).unwrap_or(facing)
        } else {
            facing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlane_core::random::ScriptedChoice;

    #[test]
    fn only_walls_stop_it() {
        for terrain in Terrain::ALL {
            for light in Light::ALL {
                assert_eq!(Atv.can_pass(terrain, light), terrain != Terrain::Wall);
            }
        }
    }

    #[test]
    fn keeps_heading_without_touching_rng() {
        let view = NeighborView::uniform(Terrain::Grass).with(Direction::South, Terrain::Wall);
        let mut rng = ScriptedChoice::new([2]);
        // facing north: the wall is behind, out of the arc
        assert_eq!(
            Atv.choose_direction(Direction::North, &view, Light::Red, &mut rng),
            Direction::North
        );
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn side_wall_triggers_a_draw() {
        let view = NeighborView::uniform(Terrain::Street).with(Direction::West, Terrain::Wall);
        let mut rng = ScriptedChoice::new([2]);
        // facing north: arc is [north, west, east]
        assert_eq!(
            Atv.choose_direction(Direction::North, &view, Light::Red, &mut rng),
            Direction::East
        );
        assert_eq!(rng.calls(), 1);
    }
}
