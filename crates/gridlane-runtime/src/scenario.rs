//! Scenario files: map, light timings and starting vehicles in TOML.
//!
//! ```toml
//! [simulation]
//! seed = 42
//! ticks = 100
//!
//! [map]
//! rows = ["WWW", "WSW", "WWW"]
//!
//! [[vehicles]]
//! kind = "car"
//! x = 1
//! y = 1
//! direction = "north"
//! ```

use crate::grid::Grid;
use crate::light::{LightConfig, LightCycle};
use crate::map::TerrainMap;
use gridlane_agents::kind::VehicleKind;
use gridlane_agents::vehicle::Vehicle;
use gridlane_core::error::GridlaneError;
use gridlane_core::types::{Direction, GridPoint, Light};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can be wrong with a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("map has no rows")]
    EmptyMap,

    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map row {row}: {source}")]
    Terrain {
        row: usize,
        #[source]
        source: GridlaneError,
    },

    #[error("vehicle {index} ({kind}) at {at} is outside the {width}x{height} map")]
    VehicleOutOfBounds {
        index: usize,
        kind: VehicleKind,
        at: GridPoint,
        width: usize,
        height: usize,
    },

    #[error("{0} light must last at least one tick")]
    ZeroLightDuration(Light),

    #[error("invalid scenario: {0}")]
    Parse(String),

    #[error("could not serialize scenario: {0}")]
    Serialize(String),

    #[error(transparent)]
    Core(#[from] GridlaneError),
}

/// `[simulation]`: run length and RNG seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Absent means seed from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ticks: 100,
        }
    }
}

/// `[map]`: terrain rows, north first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    pub rows: Vec<String>,
}

/// One `[[vehicles]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub kind: VehicleKind,
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl VehicleSpec {
    pub fn new(kind: VehicleKind, x: i32, y: i32, direction: Direction) -> Self {
        Self { kind, x, y, direction }
    }

    pub fn build(&self) -> Vehicle {
        Vehicle::new(self.kind, self.x, self.y, self.direction)
    }

    /// Like [`build`](Self::build), with an id derived from `index`.
    pub fn build_seeded(&self, index: u64) -> Vehicle {
        Vehicle::with_seed(self.kind, self.x, self.y, self.direction, index)
    }
}

/// A complete scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub light: LightConfig,
    pub map: MapConfig,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

impl ScenarioConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ScenarioError> {
        toml::from_str(input).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        toml::to_string_pretty(self).map_err(|e| ScenarioError::Serialize(e.to_string()))
    }

    /// Check the map, light timings and vehicle placements.
    pub fn validate(&self) -> Result<TerrainMap, ScenarioError> {
        self.light.validate()?;
        let map = TerrainMap::parse(&self.map.rows)?;
        for (index, spec) in self.vehicles.iter().enumerate() {
            let at = GridPoint::new(spec.x, spec.y);
            if !map.contains(at) {
                return Err(ScenarioError::VehicleOutOfBounds {
                    index,
                    kind: spec.kind,
                    at,
                    width: map.width(),
                    height: map.height(),
                });
            }
        }
        Ok(map)
    }

    /// Validate and build a ready-to-run grid.
    ///
    /// A seeded scenario also gets vehicle ids derived from their position
    /// in the file, so two builds produce identical snapshots.
    pub fn build_grid(&self) -> Result<Grid, ScenarioError> {
        let map = self.validate()?;
        let light = LightCycle::new(self.light)?;
        let mut grid = Grid::new(map, light, self.simulation.seed);
        for (index, spec) in self.vehicles.iter().enumerate() {
            let vehicle = match self.simulation.seed {
                Some(_) => spec.build_seeded(index as u64),
                None => spec.build(),
            };
            grid.spawn(vehicle)?;
        }
        Ok(grid)
    }

    /// A small town with one of every kind, used by `gridlane init`.
    pub fn sample() -> Self {
        let rows = [
            "WWWWWWWWWWWW",
            "WGGGGCGGGGGW",
            "WGTTTSTTTTGW",
            "WGTGGSGGGTGW",
            "WCSSSLSSSSCW",
            "WGTGGSGGGTGW",
            "WGTTTSTTTTGW",
            "WGGGGCGGGGGW",
            "WWWWWWWWWWWW",
        ];
        Self {
            simulation: SimulationConfig {
                seed: Some(42),
                ticks: 100,
            },
            light: LightConfig::default(),
            map: MapConfig {
                rows: rows.iter().map(|r| r.to_string()).collect(),
            },
            vehicles: vec![
                VehicleSpec::new(VehicleKind::Car, 2, 4, Direction::East),
                VehicleSpec::new(VehicleKind::Taxi, 9, 4, Direction::West),
                VehicleSpec::new(VehicleKind::Truck, 5, 2, Direction::South),
                VehicleSpec::new(VehicleKind::Bicycle, 3, 2, Direction::East),
                VehicleSpec::new(VehicleKind::Atv, 9, 6, Direction::North),
                VehicleSpec::new(VehicleKind::Human, 1, 1, Direction::East),
            ],
        }
    }
}
