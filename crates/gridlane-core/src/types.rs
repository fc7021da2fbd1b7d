//! Shared types used across all gridlane crates.

use crate::error::{GridlaneError, Result};
use crate::random::ChoiceSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a vehicle on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub Uuid);

impl VehicleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id derived from a seed (for testing and replays).
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u64_pair(0, seed))
    }
}

impl Default for VehicleId {
    fn default() -> Self {
        Self::new()
    }
}

/// The current tick of the simulation.
pub type Tick = u64;

/// A compass heading on the grid.
///
/// `North` points toward smaller `y`, `East` toward larger `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction 90° counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The direction 90° clockwise.
    pub fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// A uniformly chosen direction.
    pub fn random(rng: &mut dyn ChoiceSource) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    /// Unit step along x.
    pub fn dx(self) -> i32 {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }

    /// Unit step along y.
    pub fn dy(self) -> i32 {
        match self {
            Direction::South => 1,
            Direction::North => -1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Single-letter form used in scenario files.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(GridlaneError::unknown_direction(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = GridlaneError;

    /// Accepts full names (`"north"`) or single letters (`"N"`), any case.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Direction::from_letter(c);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "north" => Ok(Direction::North),
            "east" => Ok(Direction::East),
            "south" => Ok(Direction::South),
            "west" => Ok(Direction::West),
            _ => Err(GridlaneError::unknown_direction(trimmed)),
        }
    }
}

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Street,
    Crosswalk,
    /// Intersection controlled by the traffic light.
    Light,
    Grass,
    Trail,
    Wall,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Street,
        Terrain::Crosswalk,
        Terrain::Light,
        Terrain::Grass,
        Terrain::Trail,
        Terrain::Wall,
    ];

    /// Map letter for this terrain.
    pub fn as_char(self) -> char {
        match self {
            Terrain::Street => 'S',
            Terrain::Crosswalk => 'C',
            Terrain::Light => 'L',
            Terrain::Grass => 'G',
            Terrain::Trail => 'T',
            Terrain::Wall => 'W',
        }
    }

    pub fn from_char(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'S' => Ok(Terrain::Street),
            'C' => Ok(Terrain::Crosswalk),
            'L' => Ok(Terrain::Light),
            'G' => Ok(Terrain::Grass),
            'T' => Ok(Terrain::Trail),
            'W' => Ok(Terrain::Wall),
            _ => Err(GridlaneError::UnknownTerrain(letter)),
        }
    }
}

/// The global traffic-light color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    Green,
    Yellow,
    Red,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::Green, Light::Yellow, Light::Red];

    /// The color that follows this one in a green → yellow → red cycle.
    pub fn next(self) -> Self {
        match self {
            Light::Green => Light::Yellow,
            Light::Yellow => Light::Red,
            Light::Red => Light::Green,
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Light::Green => "green",
            Light::Yellow => "yellow",
            Light::Red => "red",
        };
        f.write_str(name)
    }
}

/// An integer cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        Self {
            x: self.x + direction.dx(),
            y: self.y + direction.dy(),
        }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Terrain of the four cells around an agent, keyed by absolute direction.
///
/// Total by construction: there is no way to build a view with a missing
/// direction. Collaborators holding a loose map go through
/// [`NeighborView::from_map`], which rejects incomplete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborView {
    pub north: Terrain,
    pub east: Terrain,
    pub south: Terrain,
    pub west: Terrain,
}

impl NeighborView {
    pub fn new(north: Terrain, east: Terrain, south: Terrain, west: Terrain) -> Self {
        Self { north, east, south, west }
    }

    /// Every neighbor is the same terrain.
    pub fn uniform(terrain: Terrain) -> Self {
        Self::new(terrain, terrain, terrain, terrain)
    }

    /// Copy of this view with one direction replaced.
    pub fn with(mut self, direction: Direction, terrain: Terrain) -> Self {
        *self.slot_mut(direction) = terrain;
        self
    }

    pub fn get(&self, direction: Direction) -> Terrain {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Build a view from a direction → terrain map.
    ///
    /// Fails fast on the first direction the map does not cover.
    pub fn from_map(map: &HashMap<Direction, Terrain>) -> Result<Self> {
        let lookup = |direction: Direction| {
            map.get(&direction)
                .copied()
                .ok_or(GridlaneError::MissingNeighbor(direction))
        };
        Ok(Self::new(
            lookup(Direction::North)?,
            lookup(Direction::East)?,
            lookup(Direction::South)?,
            lookup(Direction::West)?,
        ))
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Terrain {
        match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }
}

impl Index<Direction> for NeighborView {
    type Output = Terrain;

    fn index(&self, direction: Direction) -> &Terrain {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedChoice;

    #[test]
    fn reverse_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_ne!(d.reverse(), d);
        }
    }

    #[test]
    fn left_and_right_are_inverse_rotations() {
        for d in Direction::ALL {
            assert_eq!(d.right().left(), d);
            assert_eq!(d.left().right(), d);
            assert_eq!(d.left().left(), d.reverse());
        }
    }

    #[test]
    fn random_indexes_the_clockwise_table() {
        let mut rng = ScriptedChoice::new([0, 1, 2, 3]);
        let picked: Vec<Direction> = (0..4).map(|_| Direction::random(&mut rng)).collect();
        assert_eq!(picked, Direction::ALL.to_vec());
    }

    #[test]
    fn step_follows_screen_coordinates() {
        let origin = GridPoint::new(3, 3);
        assert_eq!(origin.step(Direction::North), GridPoint::new(3, 2));
        assert_eq!(origin.step(Direction::East), GridPoint::new(4, 3));
        assert_eq!(origin.step(Direction::South), GridPoint::new(3, 4));
        assert_eq!(origin.step(Direction::West), GridPoint::new(2, 3));
    }

    #[test]
    fn direction_parses_names_and_letters() {
        assert_eq!("north".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("W".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!(" East ".parse::<Direction>().unwrap(), Direction::East);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn terrain_letters_round_trip() {
        for t in Terrain::ALL {
            assert_eq!(Terrain::from_char(t.as_char()).unwrap(), t);
        }
        assert_eq!(Terrain::from_char('?'), Err(GridlaneError::UnknownTerrain('?')));
    }

    #[test]
    fn light_cycles_through_three_colors() {
        assert_eq!(Light::Green.next(), Light::Yellow);
        assert_eq!(Light::Yellow.next(), Light::Red);
        assert_eq!(Light::Red.next(), Light::Green);
    }

    #[test]
    fn neighbor_view_from_incomplete_map_fails_fast() {
        let mut map = HashMap::new();
        map.insert(Direction::North, Terrain::Street);
        map.insert(Direction::East, Terrain::Grass);
        map.insert(Direction::South, Terrain::Wall);
        assert_eq!(
            NeighborView::from_map(&map),
            Err(GridlaneError::MissingNeighbor(Direction::West))
        );

        map.insert(Direction::West, Terrain::Trail);
        let view = NeighborView::from_map(&map).unwrap();
        assert_eq!(view[Direction::West], Terrain::Trail);
        assert_eq!(view.get(Direction::East), Terrain::Grass);
    }

    #[test]
    fn with_replaces_a_single_slot() {
        let view = NeighborView::uniform(Terrain::Wall).with(Direction::South, Terrain::Street);
        assert_eq!(view.south, Terrain::Street);
        assert_eq!(view.north, Terrain::Wall);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Direction::North).unwrap();
        assert_eq!(json, "\"north\"");
        let t: Terrain = serde_json::from_str("\"crosswalk\"").unwrap();
        assert_eq!(t, Terrain::Crosswalk);
    }
}
