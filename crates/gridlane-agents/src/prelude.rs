//! Gridlane Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use gridlane_agents::prelude::*;
//! ```

pub use crate::lifecycle::Lifecycle;
pub use crate::kind::VehicleKind;
pub use crate::vehicle::Vehicle;
pub use crate::policy::{Atv, Bicycle, Car, Human, Taxi, Truck};

// Re-export from core
pub use gridlane_core::prelude::*;
