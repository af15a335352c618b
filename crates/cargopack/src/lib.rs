//! # Cargopack
//!
//! 3D cargo placement engine for vehicle load beds: given box-shaped items
//! (dimensions, weight, fragility, rotation permission, delivery order) and
//! a rectangular cargo volume, it decides legal non-overlapping positions
//! and orientations for as many items as fit, derives a load/unload
//! sequence, and reports whatever does not fit.
//!
//! ## Quick Start
//!
//! ```rust
//! use cargopack::{CargoBounds, Item, Packer};
//!
//! let bounds = CargoBounds::new(2000.0, 4400.0, 2000.0);
//! let items = vec![
//!     Item::new("XM01-001", 286.0, 213.0, 24.0).with_delivery_order(1),
//!     Item::new("X11-002", 405.0, 305.0, 255.0).with_delivery_order(2),
//! ];
//!
//! let result = Packer::default_config().pack(&items, &bounds).unwrap();
//! assert!(result.all_placed());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for all public data types

/// Core data model.
pub use cargopack_core as core;

/// Placement strategies, sequencing and synthetic items.
pub use cargopack_engine as engine;

// Re-export commonly used types at root level
pub use cargopack_core::{
    Aabb, CargoBounds, Config, Error, Item, PackResult, PlacedItem, Result, Rotation, Strategy,
};
pub use cargopack_engine::{
    assign_load_order, delivery_sequence, generate, generate_by_count, GeneratorConfig, Packer,
};
