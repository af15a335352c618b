//! # Cargopack Engine
//!
//! Placement strategies, load sequencing and synthetic item generation for
//! the cargopack cargo placement engine.
//!
//! ## Strategies
//!
//! | Strategy | Determinism | Description |
//! |----------|-------------|-------------|
//! | `FreeSpace` | Deterministic | Bottom-Left-Back free-space split, delivery-order aware |
//! | `GridExhaustive` | Deterministic | Lattice scan with explicit AABB collision checks |
//! | `GridRandom` | Per seed | Gravity-drop on a voxel occupancy grid |
//!
//! ## Quick start
//!
//! ```rust
//! use cargopack_engine::{CargoBounds, Item, Packer};
//!
//! let bounds = CargoBounds::new(2000.0, 4400.0, 2000.0);
//! let items = vec![Item::new("XM01-001", 286.0, 213.0, 24.0)];
//!
//! let packer = Packer::default_config();
//! let result = packer.pack(&items, &bounds).unwrap();
//! assert_eq!(result.placed_count(), 1);
//! ```
//!
//! All operations are synchronous, single-threaded, pure functions of their
//! inputs; per-run state (free-space lists, occupancy grids) is owned by
//! the call and discarded at completion.

pub mod free_space;
pub mod generator;
pub mod grid;
pub mod packer;
pub mod sequencer;

// Re-exports
pub use free_space::run_free_space_packing;
pub use generator::{generate, generate_by_count, BoxType, GeneratorConfig, BOX_CATALOG};
pub use grid::{run_exhaustive_packing, run_random_packing};
pub use packer::Packer;
pub use sequencer::{assign_load_order, delivery_sequence};

pub use cargopack_core::{
    Aabb, CargoBounds, Config, Error, Item, PackResult, PlacedItem, Result, Rotation, Strategy,
};
