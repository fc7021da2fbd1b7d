//! # Gridlane
//!
//! Grid traffic simulation with one movement policy per kind of road user
//! and a shared death/revival lifecycle.
//!
//! Cars, taxis, trucks, bicycles, ATVs and pedestrians wander a map of
//! streets, crosswalks, lights, grass, trails and walls under a single
//! traffic light. When two of them end up on the same cell the one that
//! stays dead longer loses, waits out its death time, and comes back
//! facing a random direction.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlane::prelude::*;
//!
//! // Build a small map: a street loop around a patch of grass
//! let map = TerrainMap::parse(&["WWWWW", "WSSSW", "WSGSW", "WSSSW", "WWWWW"]).unwrap();
//! let mut grid = Grid::with_map(map, Some(42));
//!
//! // Spawn a car and a pedestrian
//! grid.spawn(Vehicle::car(1, 1, Direction::East)).unwrap();
//! grid.spawn(Vehicle::human(2, 2, Direction::North)).unwrap();
//!
//! // Run the simulation
//! grid.run(30);
//!
//! let stats = grid.stats();
//! assert_eq!(stats.tick, 30);
//! println!("{}", grid.render());
//! ```
//!
//! ## Architecture
//!
//! - [`gridlane_core`] - Directions, terrain, lights, the lifecycle and
//!   movement traits, the shared random-choice source
//! - [`gridlane_agents`] - The six movement policies, [`Vehicle`](prelude::Vehicle)
//!   and its lifecycle state machine
//! - [`gridlane_runtime`] - The grid tick loop, the traffic light cycle and
//!   TOML scenarios
//!
//! ## Kinds
//!
//! | Kind | Death time | Moves on |
//! |------|-----------:|----------|
//! | Truck | 0 | streets, lights, crosswalks unless red |
//! | Car / Taxi | 15 | streets, lights unless red, crosswalks on green |
//! | ATV | 25 | anything but walls |
//! | Bicycle | 35 | trails first, then streets, then crosswalks |
//! | Human | 45 | grass, and crosswalks when not green |
//!
//! A truck never dies, so it wins every collision.
//!
//! ## Scenarios
//!
//! ```rust
//! use gridlane::prelude::*;
//!
//! let scenario = ScenarioConfig::from_toml_str(r#"
//!     [simulation]
//!     seed = 7
//!     ticks = 20
//!
//!     [map]
//!     rows = ["WWWW", "WSSW", "WWWW"]
//!
//!     [[vehicles]]
//!     kind = "taxi"
//!     x = 1
//!     y = 1
//!     direction = "east"
//! "#).unwrap();
//!
//! let mut grid = scenario.build_grid().unwrap();
//! grid.run(scenario.simulation.ticks);
//! assert_eq!(grid.alive_count(), 1);
//! ```

// Re-export all subcrates
pub use gridlane_agents as agents;
pub use gridlane_core as core;
pub use gridlane_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use gridlane::prelude::*;
/// ```
pub mod prelude {
    pub use gridlane_runtime::prelude::*;
}
