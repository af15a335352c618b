//! Packing result representation.

use crate::item::{Item, PlacedItem};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
///
/// Items that could not be placed are returned whole in `unplaced` so that
/// callers can report or retry them; they are never silently dropped.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Successfully placed items, with positions and load order.
    pub placed: Vec<PlacedItem>,

    /// Items for which no legal position was found.
    pub unplaced: Vec<Item>,

    /// Volume utilization ratio (0.0 - 1.0): placed volume / cargo volume.
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Strategy used for this run.
    pub strategy: Option<String>,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every input item was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Returns the number of unplaced items.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns the total number of items this run received.
    pub fn total_count(&self) -> usize {
        self.placed.len() + self.unplaced.len()
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}
