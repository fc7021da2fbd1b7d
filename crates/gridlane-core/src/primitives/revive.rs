//! REVIVE — death, the countdown while dead, and coming back.
//!
//! A dead agent is not removed from the grid. Each tick the grid pokes it;
//! after `death_time` pokes the next one brings it back with a fresh random
//! heading.

use crate::random::ChoiceSource;

/// Read-only liveness, the only view one agent gets of another.
pub trait Mortal {
    fn is_alive(&self) -> bool;

    /// Ticks this agent stays dead. Zero means it never dies.
    ///
    /// Also serves as collision priority: the higher value loses.
    fn death_time(&self) -> u32;
}

/// Lifecycle transitions driven by the grid.
pub trait Revive: Mortal {
    /// Ticks spent dead so far, always within `0..=death_time`.
    fn poke_count(&self) -> u32;

    /// One "still dead" notification. No-op while alive.
    ///
    /// Returns `true` when this poke brought the agent back to life.
    fn poke(&mut self, rng: &mut dyn ChoiceSource) -> bool;

    /// Back to the spawn cell and heading, alive, with a cleared counter.
    fn reset(&mut self);
}
