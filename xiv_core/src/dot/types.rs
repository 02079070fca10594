//! DoT type definitions

use crate::types::Job;
use serde::{Deserialize, Serialize};

/// Server tick interval for damage over time, in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 3000;

/// Configuration for one damage-over-time effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotConfig {
    /// Unique identifier (e.g., "biolysis", "chaotic_spring")
    pub id: String,
    /// Display name
    pub name: String,
    /// Job that applies it
    pub job: Job,
    /// Potency of each tick
    pub potency: i64,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Time between ticks in milliseconds
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u32,
}

fn default_tick_interval() -> u32 {
    DEFAULT_TICK_INTERVAL_MS
}

impl DotConfig {
    pub fn new(id: &str, name: &str, job: Job, potency: i64, duration_ms: u32) -> Self {
        DotConfig {
            id: id.to_string(),
            name: name.to_string(),
            job,
            potency,
            duration_ms,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    /// Number of ticks over the full duration, rounded up
    pub fn tick_count(&self) -> u32 {
        if self.tick_interval_ms == 0 {
            return 0;
        }
        self.duration_ms.div_ceil(self.tick_interval_ms)
    }
}
