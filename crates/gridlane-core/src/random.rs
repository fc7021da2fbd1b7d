//! The shared random-choice source.
//!
//! Every random decision an agent makes (tie-breaks between eligible
//! directions, the heading it wakes up with) goes through one
//! [`ChoiceSource`] owned by the driver and lent to each call. Production
//! runs use a seeded [`SmallRng`]; tests script the exact picks.

use rand::rngs::{SmallRng, StdRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// A uniform index picker.
pub trait ChoiceSource {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl ChoiceSource for SmallRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl ChoiceSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Pick one element uniformly, or `None` from an empty slice.
pub fn choose<T: Copy>(rng: &mut dyn ChoiceSource, items: &[T]) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.pick_index(items.len())])
    }
}

/// A seeded RNG, or an entropy-seeded one when no seed is given.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Replays a fixed list of picks, then keeps returning 0.
///
/// Each scripted value is reduced modulo the requested length, so a script
/// never produces an out-of-range index.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoice {
    picks: VecDeque<usize>,
    calls: usize,
}

impl ScriptedChoice {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            calls: 0,
        }
    }

    /// Number of picks requested so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ChoiceSource for ScriptedChoice {
    fn pick_index(&mut self, len: usize) -> usize {
        self.calls += 1;
        self.picks.pop_front().unwrap_or(0) % len
    }
}
