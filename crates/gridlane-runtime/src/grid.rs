//! Grid — terrain, vehicles and the tick loop.
//!
//! The grid is the world. It owns the terrain, the vehicles, the traffic
//! light and the random source every decision draws from.
//!
//! Each tick:
//! 1. Every live vehicle sees its neighbours, picks a heading and moves if
//!    it may pass the destination; every dead vehicle is poked
//! 2. Vehicles sharing a cell collide pairwise
//! 3. The light advances and the tick counter moves on

use crate::light::{LightCycle, LightConfig};
use crate::map::TerrainMap;
use crate::scenario::ScenarioError;
use gridlane_agents::kind::VehicleKind;
use gridlane_agents::vehicle::Vehicle;
use gridlane_core::agent::Agent;
use gridlane_core::primitives::collide::Mortality;
use gridlane_core::primitives::{Collide, Mortal, Revive};
use gridlane_core::random::seeded_rng;
use gridlane_core::types::*;
use rand::rngs::SmallRng;
use serde::Serialize;
use tracing::{debug, info, trace};

/// Event emitted by the grid during simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GridEvent {
    /// A vehicle was placed on the grid.
    Spawned { id: VehicleId, kind: VehicleKind, at: GridPoint },
    /// A vehicle moved one cell.
    Moved { id: VehicleId, from: GridPoint, to: GridPoint, direction: Direction },
    /// A vehicle turned toward terrain it may not enter and stayed put.
    Blocked { id: VehicleId, at: GridPoint, direction: Direction, terrain: Terrain },
    /// A vehicle lost a collision.
    Died { id: VehicleId, kind: VehicleKind, at: GridPoint },
    /// A dead vehicle came back.
    Revived { id: VehicleId, direction: Direction },
    /// The traffic light changed colour.
    LightChanged { light: Light },
    /// A tick completed.
    TickComplete { tick: Tick, alive: usize, dead: usize },
}

/// Statistics about the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridStats {
    pub tick: Tick,
    pub light: Light,
    pub vehicles: usize,
    pub alive: usize,
    pub dead: usize,
    pub total_moves: usize,
    pub total_blocked: usize,
    pub total_deaths: usize,
    pub total_revivals: usize,
}

/// A serializable snapshot of one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub position: GridPoint,
    pub direction: Direction,
    pub alive: bool,
    pub pokes: u32,
    pub image: String,
}

/// A complete serializable snapshot of the grid at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub tick: Tick,
    pub light: Light,
    pub rows: Vec<String>,
    pub vehicles: Vec<VehicleSnapshot>,
    pub stats: GridStats,
}

#[derive(Debug)]
pub struct Grid {
    map: TerrainMap,
    vehicles: Vec<Vehicle>,
    light: LightCycle,
    rng: SmallRng,
    seed: Option<u64>,
    tick: Tick,
    event_history: Vec<(Tick, GridEvent)>,

    total_moves: usize,
    total_blocked: usize,
    total_deaths: usize,
    total_revivals: usize,
}

impl Grid {
    /// An empty grid over `map`. With a seed, runs are reproducible.
    pub fn new(map: TerrainMap, light: LightCycle, seed: Option<u64>) -> Self {
        Self {
            map,
            vehicles: Vec::new(),
            light,
            rng: seeded_rng(seed),
            seed,
            tick: 0,
            event_history: Vec::new(),
            total_moves: 0,
            total_blocked: 0,
            total_deaths: 0,
            total_revivals: 0,
        }
    }

    /// A grid with the default light timings.
    pub fn with_map(map: TerrainMap, seed: Option<u64>) -> Self {
        Self::new(map, LightCycle::default(), seed)
    }

    /// Place a vehicle. Fails if its position is off the map.
    pub fn spawn(&mut self, vehicle: Vehicle) -> Result<VehicleId, ScenarioError> {
        let at = vehicle.position();
        if !self.map.contains(at) {
            return Err(ScenarioError::VehicleOutOfBounds {
                index: self.vehicles.len(),
                kind: vehicle.kind(),
                at,
                width: self.map.width(),
                height: self.map.height(),
            });
        }
        let id = vehicle.id();
        let event = GridEvent::Spawned { id, kind: vehicle.kind(), at };
        self.event_history.push((self.tick, event));
        self.vehicles.push(vehicle);
        Ok(id)
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> Vec<GridEvent> {
        let mut events = Vec::new();
        let light = self.light.current();

        // Phase 1: move the living, poke the dead
        for vehicle in self.vehicles.iter_mut() {
            if !vehicle.is_alive() {
                if vehicle.poke(&mut self.rng) {
                    info!(kind = %vehicle.kind(), at = %vehicle.position(), "revived");
                    self.total_revivals += 1;
                    events.push(GridEvent::Revived {
                        id: vehicle.id(),
                        direction: vehicle.direction(),
                    });
                }
                continue;
            }

            let from = vehicle.position();
            let view = self.map.neighbors(from);
            trace!(kind = %vehicle.kind(), at = %from, ?view, "neighbours");

            let direction = vehicle.choose_direction(&view, light, &mut self.rng);
            vehicle.set_direction(direction);

            let terrain = view.get(direction);
            if vehicle.can_pass(terrain, light) {
                let to = from.step(direction);
                vehicle.set_position(to);
                debug!(kind = %vehicle.kind(), %from, %to, "moved");
                self.total_moves += 1;
                events.push(GridEvent::Moved { id: vehicle.id(), from, to, direction });
            } else {
                debug!(kind = %vehicle.kind(), at = %from, %direction, ?terrain, %light, "blocked");
                self.total_blocked += 1;
                events.push(GridEvent::Blocked { id: vehicle.id(), at: from, direction, terrain });
            }
        }

        // Phase 2: collisions on shared cells
        for i in 0..self.vehicles.len() {
            for j in (i + 1)..self.vehicles.len() {
                if self.vehicles[i].position() != self.vehicles[j].position() {
                    continue;
                }
                let other = Mortality::of(&self.vehicles[j]);
                if self.vehicles[i].collide(&other) {
                    events.push(self.record_death(i));
                }
                let other = Mortality::of(&self.vehicles[i]);
                if self.vehicles[j].collide(&other) {
                    events.push(self.record_death(j));
                }
            }
        }

        // Phase 3: light and clock
        if let Some(changed) = self.light.advance() {
            info!(light = %changed, "light changed");
            events.push(GridEvent::LightChanged { light: changed });
        }
        self.tick += 1;

        let alive = self.alive_count();
        events.push(GridEvent::TickComplete {
            tick: self.tick,
            alive,
            dead: self.vehicles.len() - alive,
        });

        for event in &events {
            self.event_history.push((self.tick, event.clone()));
        }

        events
    }

    fn record_death(&mut self, idx: usize) -> GridEvent {
        let vehicle = &self.vehicles[idx];
        info!(kind = %vehicle.kind(), at = %vehicle.position(), "died");
        self.total_deaths += 1;
        GridEvent::Died {
            id: vehicle.id(),
            kind: vehicle.kind(),
            at: vehicle.position(),
        }
    }

    /// Run the simulation for N ticks.
    pub fn run(&mut self, ticks: u64) -> Vec<Vec<GridEvent>> {
        let mut all_events = Vec::new();
        for _ in 0..ticks {
            all_events.push(self.tick());
        }
        all_events
    }

    /// Put every vehicle back at its spawn point and restart the clock.
    ///
    /// A seeded grid also restarts its random stream, so a reset followed
    /// by `run(n)` replays the first run exactly.
    pub fn reset(&mut self) {
        for vehicle in self.vehicles.iter_mut() {
            vehicle.reset();
        }
        self.light.reset();
        self.rng = seeded_rng(self.seed);
        self.tick = 0;
        self.total_moves = 0;
        self.total_blocked = 0;
        self.total_deaths = 0;
        self.total_revivals = 0;
        self.event_history.retain(|(_, e)| matches!(e, GridEvent::Spawned { .. }));
    }

    pub fn stats(&self) -> GridStats {
        let alive = self.alive_count();
        GridStats {
            tick: self.tick,
            light: self.light.current(),
            vehicles: self.vehicles.len(),
            alive,
            dead: self.vehicles.len() - alive,
            total_moves: self.total_moves,
            total_blocked: self.total_blocked,
            total_deaths: self.total_deaths,
            total_revivals: self.total_revivals,
        }
    }

    /// Take a serializable snapshot of the grid's current state.
    pub fn snapshot(&self) -> GridSnapshot {
        let vehicles = self
            .vehicles
            .iter()
            .map(|v| VehicleSnapshot {
                id: v.id(),
                kind: v.kind(),
                position: v.position(),
                direction: v.direction(),
                alive: v.is_alive(),
                pokes: v.poke_count(),
                image: v.image_file_name(),
            })
            .collect();

        GridSnapshot {
            tick: self.tick,
            light: self.light.current(),
            rows: self.map.rows(),
            vehicles,
            stats: self.stats(),
        }
    }

    /// The map as text with vehicles drawn over it.
    ///
    /// Live vehicles use their kind's capital letter, dead ones the lower
    /// case. When several share a cell the last one spawned is drawn.
    pub fn render(&self) -> String {
        let mut rows: Vec<Vec<char>> = self
            .map
            .rows()
            .iter()
            .map(|row| row.chars().map(|c| c.to_ascii_lowercase()).map(terrain_glyph).collect())
            .collect();

        for vehicle in &self.vehicles {
            let p = vehicle.position();
            let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) else {
                continue;
            };
            if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                let symbol = vehicle.kind().symbol();
                *cell = if vehicle.is_alive() {
                    symbol
                } else {
                    symbol.to_ascii_lowercase()
                };
            }
        }

        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of vehicles currently alive.
    pub fn alive_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_alive()).count()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn map(&self) -> &TerrainMap {
        &self.map
    }

    pub fn terrain_at(&self, point: GridPoint) -> Terrain {
        self.map.terrain_at(point)
    }

    pub fn neighbors(&self, point: GridPoint) -> NeighborView {
        self.map.neighbors(point)
    }

    pub fn light(&self) -> Light {
        self.light.current()
    }

    pub fn light_config(&self) -> LightConfig {
        self.light.config()
    }

    /// Ticks before the light next changes.
    pub fn light_remaining(&self) -> u32 {
        self.light.remaining()
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Get the full event history with tick numbers.
    pub fn event_history(&self) -> &[(Tick, GridEvent)] {
        &self.event_history
    }
}

/// Terrain glyphs for [`Grid::render`], chosen not to clash with the
/// capital vehicle symbols.
fn terrain_glyph(letter: char) -> char {
    match letter {
        's' => '.',
        'c' => '=',
        'l' => '+',
        'g' => ',',
        't' => ':',
        _ => '#',
    }
}
