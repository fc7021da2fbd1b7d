//! VehicleKind — the closed set of species on the grid.

use crate::policy::{self, Atv, Bicycle, Car, Human, Taxi, Truck};
use gridlane_core::error::{GridlaneError, Result};
use gridlane_core::primitives::MovementPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Atv,
    Bicycle,
    Car,
    Human,
    Taxi,
    Truck,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 6] = [
        VehicleKind::Atv,
        VehicleKind::Bicycle,
        VehicleKind::Car,
        VehicleKind::Human,
        VehicleKind::Taxi,
        VehicleKind::Truck,
    ];

    /// Ticks this kind stays dead, and its collision priority.
    pub fn death_time(self) -> u32 {
        match self {
            VehicleKind::Atv => policy::atv::DEATH_TIME,
            VehicleKind::Bicycle => policy::bicycle::DEATH_TIME,
            VehicleKind::Car => policy::car::DEATH_TIME,
            VehicleKind::Human => policy::human::DEATH_TIME,
            VehicleKind::Taxi => policy::taxi::DEATH_TIME,
            VehicleKind::Truck => policy::truck::DEATH_TIME,
        }
    }

    /// The movement rules for this kind.
    pub fn policy(self) -> &'static dyn MovementPolicy {
        match self {
            VehicleKind::Atv => &Atv,
            VehicleKind::Bicycle => &Bicycle,
            VehicleKind::Car => &Car,
            VehicleKind::Human => &Human,
            VehicleKind::Taxi => &Taxi,
            VehicleKind::Truck => &Truck,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Atv => "atv",
            VehicleKind::Bicycle => "bicycle",
            VehicleKind::Car => "car",
            VehicleKind::Human => "human",
            VehicleKind::Taxi => "taxi",
            VehicleKind::Truck => "truck",
        }
    }

    /// One-letter tag for text renderings.
    pub fn symbol(self) -> char {
        match self {
            VehicleKind::Atv => 'A',
            VehicleKind::Bicycle => 'B',
            VehicleKind::Car => 'C',
            VehicleKind::Human => 'H',
            VehicleKind::Taxi => 'X',
            VehicleKind::Truck => 'K',
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = GridlaneError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        VehicleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| GridlaneError::unknown_kind(s.trim()))
    }
}
