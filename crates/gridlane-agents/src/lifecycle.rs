//! Lifecycle — position, heading and the alive/dead state machine.
//!
//! Every vehicle kind shares this. The kind only contributes its death
//! time; the transitions are the same for all of them:
//!
//! ```text
//! Alive --collide(loses)--> Dead(0)
//! Dead(n) --poke--> Dead(n + 1)        while n < death_time
//! Dead(death_time) --poke--> Alive     with a random heading
//! any --reset--> Alive at spawn
//! ```

use gridlane_core::error::GridlaneError;
use gridlane_core::primitives::collide::resolve_collision;
use gridlane_core::primitives::{Collide, CollisionOutcome, Mortal, Revive};
use gridlane_core::random::ChoiceSource;
use gridlane_core::types::{Direction, GridPoint};
use serde::{Deserialize, Serialize};

/// Alive, or dead with the number of pokes received so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dead { pokes: u32 },
}

/// Mutable state shared by every vehicle kind.
///
/// Deserializing checks the stored state against the death time, so a
/// loaded lifecycle obeys the same bounds as one driven by transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LifecycleRecord")]
pub struct Lifecycle {
    position: GridPoint,
    direction: Direction,
    state: LifeState,
    death_time: u32,

    // Captured at construction for reset()
    spawn_position: GridPoint,
    spawn_direction: Direction,
}

#[derive(Deserialize)]
struct LifecycleRecord {
    position: GridPoint,
    direction: Direction,
    state: LifeState,
    death_time: u32,
    spawn_position: GridPoint,
    spawn_direction: Direction,
}

impl TryFrom<LifecycleRecord> for Lifecycle {
    type Error = GridlaneError;

    fn try_from(r: LifecycleRecord) -> Result<Self, Self::Error> {
        if let LifeState::Dead { pokes } = r.state {
            if r.death_time == 0 {
                return Err(GridlaneError::InvalidLifecycle(
                    "dead with a zero death time".to_string(),
                ));
            }
            if pokes > r.death_time {
                return Err(GridlaneError::InvalidLifecycle(format!(
                    "{} pokes exceeds death time {}",
                    pokes, r.death_time
                )));
            }
        }
        Ok(Self {
            position: r.position,
            direction: r.direction,
            state: r.state,
            death_time: r.death_time,
            spawn_position: r.spawn_position,
            spawn_direction: r.spawn_direction,
        })
    }
}

impl Lifecycle {
    pub fn new(position: GridPoint, direction: Direction, death_time: u32) -> Self {
        Self {
            position,
            direction,
            state: LifeState::Alive,
            death_time,
            spawn_position: position,
            spawn_direction: direction,
        }
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn set_position(&mut self, position: GridPoint) {
        self.position = position;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    pub fn spawn(&self) -> (GridPoint, Direction) {
        (self.spawn_position, self.spawn_direction)
    }
}

impl Mortal for Lifecycle {
    fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    fn death_time(&self) -> u32 {
        self.death_time
    }
}

impl Revive for Lifecycle {
    fn poke_count(&self) -> u32 {
        match self.state {
            LifeState::Alive => 0,
            LifeState::Dead { pokes } => pokes,
        }
    }

    fn poke(&mut self, rng: &mut dyn ChoiceSource) -> bool {
        match self.state {
            LifeState::Alive => false,
            LifeState::Dead { pokes } if pokes < self.death_time => {
                self.state = LifeState::Dead { pokes: pokes + 1 };
                false
            }
            LifeState::Dead { .. } => {
                self.state = LifeState::Alive;
                self.direction = Direction::random(rng);
                true
            }
        }
    }

    fn reset(&mut self) {
        self.position = self.spawn_position;
        self.direction = self.spawn_direction;
        self.state = LifeState::Alive;
    }
}

impl Collide for Lifecycle {
    fn collide(&mut self, other: &dyn Mortal) -> bool {
        match resolve_collision(&*self, other) {
            Some(CollisionOutcome::Dies) => {
                debug_assert!(self.death_time > 0, "an agent with zero death time cannot die");
                self.state = LifeState::Dead { pokes: 0 };
                true
            }
            Some(CollisionOutcome::Survives) | None => false,
        }
    }
}
