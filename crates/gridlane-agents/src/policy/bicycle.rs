//! Bicycle — trail first, road second, crosswalk last.

use super::first_eligible;
use gridlane_core::primitives::navigate::forward_arc;
use gridlane_core::primitives::MovementPolicy;
use gridlane_core::random::ChoiceSource;
use gridlane_core::types::{Direction, Light, NeighborView, Terrain};

pub const DEATH_TIME: u32 = 35;

/// Terrain tiers in order of preference. Each tier is scanned front, left,
/// right before the next tier is tried.
const PREFERENCE: [fn(Terrain) -> bool; 3] = [is_trail, is_road, is_crosswalk];

fn is_trail(terrain: Terrain) -> bool {
    terrain == Terrain::Trail
}

fn is_road(terrain: Terrain) -> bool {
    matches!(terrain, Terrain::Street | Terrain::Light)
}

fn is_crosswalk(terrain: Terrain) -> bool {
    terrain == Terrain::Crosswalk
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bicycle;

impl MovementPolicy for Bicycle {
    fn can_pass(&self, terrain: Terrain, light: Light) -> bool {
        match terrain {
            Terrain::Trail | Terrain::Street => true,
            Terrain::Crosswalk | Terrain::Light => light == Light::Green,
            Terrain::Grass | Terrain::Wall => false,
        }
    }

    fn choose_direction(
        &self,
        facing: Direction,
        neighbors: &NeighborView,
        _light: Light,
        _rng: &mut dyn ChoiceSource,
    ) -> Direction {
        let arc = forward_arc(facing);
        PREFERENCE
            .iter()
            .find_map(|&tier| first_eligible(arc, neighbors, tier))
            .unwrap_or_else(|| facing.reverse())
    }
}
