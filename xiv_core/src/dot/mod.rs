//! DoT (Damage over Time) system

mod active;
mod types;

pub use active::ActiveDot;
pub use types::{DotConfig, DEFAULT_TICK_INTERVAL_MS};

use crate::types::Job;
use std::collections::HashMap;

/// DoT type registry
#[derive(Debug, Clone, Default)]
pub struct DotRegistry {
    /// Mapping from DoT type ID to configuration
    configs: HashMap<String, DotConfig>,
}

impl DotRegistry {
    pub fn new() -> Self {
        DotRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a DoT type, replacing any previous one with the same ID
    pub fn register(&mut self, config: DotConfig) {
        self.configs.insert(config.id.clone(), config);
    }

    pub fn get(&self, id: &str) -> Option<&DotConfig> {
        self.configs.get(id)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// DoTs applied by `job`, sorted by ID
    pub fn for_job(&self, job: Job) -> Vec<&DotConfig> {
        let mut dots: Vec<&DotConfig> = self.configs.values().filter(|c| c.job == job).collect();
        dots.sort_by(|a, b| a.id.cmp(&b.id));
        dots
    }

    /// Registered IDs, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.configs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
