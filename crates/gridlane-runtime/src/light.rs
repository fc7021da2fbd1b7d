//! The traffic light shared by every cell of the grid.
//!
//! One light colour holds for the whole map at a time. The cycle runs
//! Green → Yellow → Red → Green, staying on each colour for its configured
//! number of ticks.

use crate::scenario::ScenarioError;
use gridlane_core::types::Light;
use serde::{Deserialize, Serialize};

/// Per-colour durations in ticks (default: 19 / 3 / 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub green_ticks: u32,
    pub yellow_ticks: u32,
    pub red_ticks: u32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            green_ticks: 19,
            yellow_ticks: 3,
            red_ticks: 19,
        }
    }
}

impl LightConfig {
    pub fn duration(&self, light: Light) -> u32 {
        match light {
            Light::Green => self.green_ticks,
            Light::Yellow => self.yellow_ticks,
            Light::Red => self.red_ticks,
        }
    }

    /// Every colour must last at least one tick.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        match Light::ALL.into_iter().find(|&light| self.duration(light) == 0) {
            Some(light) => Err(ScenarioError::ZeroLightDuration(light)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightCycle {
    config: LightConfig,
    current: Light,
    elapsed: u32,
}

impl LightCycle {
    /// Start a cycle on green.
    pub fn new(config: LightConfig) -> Result<Self, ScenarioError> {
        config.validate()?;
        Ok(Self {
            config,
            current: Light::Green,
            elapsed: 0,
        })
    }

    pub fn current(&self) -> Light {
        self.current
    }

    pub fn config(&self) -> LightConfig {
        self.config
    }

    /// Ticks left before the colour changes.
    pub fn remaining(&self) -> u32 {
        self.config.duration(self.current) - self.elapsed
    }

    /// Count one tick. Returns the new colour if it changed.
    pub fn advance(&mut self) -> Option<Light> {
        self.elapsed += 1;
        if self.elapsed < self.config.duration(self.current) {
            return None;
        }
        self.current = self.current.next();
        self.elapsed = 0;
        Some(self.current)
    }

    pub fn reset(&mut self) {
        self.current = Light::Green;
        self.elapsed = 0;
    }
}

impl Default for LightCycle {
    fn default() -> Self {
        Self {
            config: LightConfig::default(),
            current: Light::Green,
            elapsed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(g: u32, y: u32, r: u32) -> LightCycle {
        LightCycle::new(LightConfig {
            green_ticks: g,
            yellow_ticks: y,
            red_ticks: r,
        })
        .unwrap()
    }

    #[test]
    fn starts_green() {
        assert_eq!(LightCycle::default().current(), Light::Green);
        assert_eq!(LightCycle::default().remaining(), 19);
    }

    #[test]
    fn cycles_through_colours_on_schedule() {
        let mut light = cycle(2, 1, 3);
        let changes: Vec<Option<Light>> = (0..7).map(|_| light.advance()).collect();
        assert_eq!(
            changes,
            vec![
                None,
                Some(Light::Yellow),
                Some(Light::Red),
                None,
                None,
                Some(Light::Green),
                None,
            ]
        );
    }

    #[test]
    fn zero_duration_is_rejected() {
        let config = LightConfig {
            yellow_ticks: 0,
            ..LightConfig::default()
        };
        assert_eq!(
            LightCycle::new(config),
            Err(ScenarioError::ZeroLightDuration(Light::Yellow))
        );
    }

    #[test]
    fn reset_returns_to_green() {
        let mut light = cycle(1, 1, 1);
        light.advance();
        assert_eq!(light.current(), Light::Yellow);
        light.reset();
        assert_eq!(light.current(), Light::Green);
        assert_eq!(light.remaining(), 1);
    }
}
