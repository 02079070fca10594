//! Named buff presets

use super::Buff;
use crate::config::ConfigError;
use std::collections::HashMap;

/// Immutable name -> buff mapping, owned by the caller
///
/// The pipeline never consults this; callers resolve names into plain
/// [`Buff`] values and pass those in.
#[derive(Debug, Clone, Default)]
pub struct BuffPresets {
    buffs: HashMap<String, Buff>,
}

impl BuffPresets {
    pub fn new(buffs: HashMap<String, Buff>) -> Self {
        BuffPresets { buffs }
    }

    pub fn get(&self, name: &str) -> Option<&Buff> {
        self.buffs.get(name)
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }

    /// Preset names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.buffs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a list of names into buffs, keeping the given order
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Buff>, ConfigError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
            })
            .collect()
    }
}
