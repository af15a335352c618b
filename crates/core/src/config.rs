//! Packer configuration and strategy selection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Bottom-Left-Back free-space heuristic (deterministic, delivery-order
    /// aware). The default for planning placements.
    #[default]
    FreeSpace,
    /// Exhaustive lattice scan with explicit AABB collision checks
    /// (deterministic, correctness-critical fallback path).
    GridExhaustive,
    /// Randomized gravity-drop on a voxel occupancy grid (seeded, used for
    /// synthetic/demo visualization).
    GridRandom,
}

/// Common configuration for packers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Placement strategy.
    pub strategy: Strategy,

    /// Lattice step for the exhaustive grid scan, in millimeters.
    pub step_mm: f64,

    /// Voxel cell size for the randomized grid packer, in millimeters.
    pub cell_mm: f64,

    /// Maximum random footprint attempts per item (randomized mode).
    pub max_attempts: usize,

    /// Seed for the randomized packer. `None` draws from thread RNG.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            step_mm: 10.0,
            cell_mm: 100.0,
            max_attempts: 100,
            seed: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the exhaustive-scan lattice step in millimeters.
    pub fn with_step_mm(mut self, step_mm: f64) -> Self {
        self.step_mm = step_mm;
        self
    }

    /// Sets the voxel cell size in millimeters.
    pub fn with_cell_mm(mut self, cell_mm: f64) -> Self {
        self.cell_mm = cell_mm;
        self
    }

    /// Sets the per-item attempt limit for the randomized packer.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the RNG seed for the randomized packer.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> crate::Result<()> {
        if self.step_mm <= 0.0 {
            return Err(crate::Error::ConfigError(
                "step_mm must be positive".into(),
            ));
        }
        if self.cell_mm <= 0.0 {
            return Err(crate::Error::ConfigError(
                "cell_mm must be positive".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(crate::Error::ConfigError(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
