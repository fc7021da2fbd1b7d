//! TerrainMap — the static terrain matrix.
//!
//! Rows run north to south, columns west to east, so `(0, 0)` is the
//! north-west corner and moving north decreases `y`. Anything outside the
//! matrix reads as [`Terrain::Wall`].

use crate::scenario::ScenarioError;
use gridlane_core::types::{Direction, GridPoint, NeighborView, Terrain};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerrainMap {
    width: usize,
    height: usize,
    cells: Vec<Terrain>,
}

impl TerrainMap {
    /// Parse rows of terrain letters (`S C L G T W`).
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, ScenarioError> {
        let first = rows.first().ok_or(ScenarioError::EmptyMap)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(ScenarioError::EmptyMap);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ScenarioError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for letter in line.chars() {
                let terrain = Terrain::from_char(letter)
                    .map_err(|source| ScenarioError::Terrain { row, source })?;
                cells.push(terrain);
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// A map of `width × height` cells, all `terrain`.
    pub fn filled(width: usize, height: usize, terrain: Terrain) -> Self {
        Self {
            width,
            height,
            cells: vec![terrain; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.index(point).is_some()
    }

    fn index(&self, point: GridPoint) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Terrain at `point`; walls beyond the edge.
    pub fn terrain_at(&self, point: GridPoint) -> Terrain {
        self.index(point)
            .map(|i| self.cells[i])
            .unwrap_or(Terrain::Wall)
    }

    /// Returns false if `point` is off the map.
    pub fn set(&mut self, point: GridPoint, terrain: Terrain) -> bool {
        match self.index(point) {
            Some(i) => {
                self.cells[i] = terrain;
                true
            }
            None => false,
        }
    }

    /// The four terrains adjacent to `point`.
    pub fn neighbors(&self, point: GridPoint) -> NeighborView {
        let at = |d: Direction| self.terrain_at(point.step(d));
        NeighborView::new(
            at(Direction::North),
            at(Direction::East),
            at(Direction::South),
            at(Direction::West),
        )
    }

    /// The map back as rows of terrain letters.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|t| t.as_char()).collect())
            .collect()
    }
}
