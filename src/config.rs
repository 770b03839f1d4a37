//! Saved card configuration store
//!
//! Holds the last known grid position and size for every toggle, keyed by
//! toggle name, so a freshly constructed menu screen reproduces the layout
//! the player left behind. The store lives as long as the owning client
//! session and is passed by reference into the screen constructors; it is
//! written through after every mutation and read once at construction.
//!
//! Entries are only ever overwritten per name, never cleared. Nothing here
//! touches the filesystem; the JSON round-trip exists so the host can hand
//! the snapshot around as an opaque blob.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::layout::SizeClass;

/// Saved placement for one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub grid_x: i32,
    pub grid_y: i32,
    pub size: SizeClass,
}

/// Session-lifetime store of card placements, keyed by toggle name
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigStore {
    entries: HashMap<String, CardConfig>,
}

impl ConfigStore {
    /// Creates an empty store
    pub fn new() -> Self {
        ConfigStore {
            entries: HashMap::new(),
        }
    }

    /// Records the placement for a toggle, replacing any previous entry
    pub fn record(&mut self, name: impl Into<String>, config: CardConfig) {
        self.entries.insert(name.into(), config);
    }

    /// Looks up the saved placement for a toggle
    pub fn get(&self, name: &str) -> Option<CardConfig> {
        self.entries.get(name).copied()
    }

    /// Number of toggles with a saved placement
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no placements have been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the store to JSON (pretty format for readability/debugging)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reconstructs a store from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
