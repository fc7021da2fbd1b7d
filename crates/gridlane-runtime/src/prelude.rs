//! Gridlane Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use gridlane_runtime::prelude::*;
//! ```

pub use crate::grid::{Grid, GridEvent, GridSnapshot, GridStats, VehicleSnapshot};
pub use crate::light::{LightConfig, LightCycle};
pub use crate::map::TerrainMap;
pub use crate::scenario::{
    MapConfig, ScenarioConfig, ScenarioError, SimulationConfig, VehicleSpec,
};

// Re-export from agents
pub use gridlane_agents::prelude::*;
