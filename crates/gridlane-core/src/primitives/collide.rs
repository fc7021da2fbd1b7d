//! COLLIDE — who survives when two agents share a cell.
//!
//! The rule compares death times: the agent that would stay dead longer is
//! the weaker one and dies. Ties leave both alive. Both participants run
//! the rule against each other, each deciding only its own fate.
//!
//! A death time of zero can never be strictly higher than another, so a
//! kind with zero death time never loses a collision.

use super::revive::Mortal;

/// What a collision means for the agent evaluating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Survives,
    Dies,
}

/// Decide the fate of `this` after touching `other`.
///
/// `None` when either side is already dead: the rule is not evaluated.
pub fn resolve_collision(this: &dyn Mortal, other: &dyn Mortal) -> Option<CollisionOutcome> {
    if !this.is_alive() || !other.is_alive() {
        return None;
    }
    if this.death_time() > other.death_time() {
        Some(CollisionOutcome::Dies)
    } else {
        Some(CollisionOutcome::Survives)
    }
}

/// Apply the collision rule to self.
pub trait Collide: Mortal {
    /// Mutates only `self`. Returns `true` if this call killed it.
    fn collide(&mut self, other: &dyn Mortal) -> bool;
}

/// A detached copy of an agent's liveness.
///
/// Lets a driver hand one agent's state to another without holding two
/// borrows into the same collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mortality {
    pub alive: bool,
    pub death_time: u32,
}

impl Mortality {
    pub fn of(agent: &dyn Mortal) -> Self {
        Self {
            alive: agent.is_alive(),
            death_time: agent.death_time(),
        }
    }
}

impl Mortal for Mortality {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn death_time(&self) -> u32 {
        self.death_time
    }
}
