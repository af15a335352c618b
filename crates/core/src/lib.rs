//! # Cargopack Core
//!
//! Core data model for the cargopack cargo placement engine.
//!
//! This crate provides the types shared by every placement strategy: cargo
//! items, cargo bed bounds, axis-aligned boxes, packer configuration, and
//! the packing result.
//!
//! ## Conventions
//!
//! - All linear dimensions are millimeters, weights are kilograms, volumes
//!   are mm³. Meter-based input is converted once at
//!   [`CargoBounds::from_corners_m`].
//! - Rotation is restricted to 90° about the vertical axis
//!   ([`Rotation::Deg90`] swaps x/y extents, never z).
//! - Items that cannot be placed are reported in [`PackResult::unplaced`],
//!   never dropped and never an error.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod bounds;
pub mod config;
pub mod error;
pub mod item;
pub mod result;

// Re-exports
pub use aabb::Aabb;
pub use bounds::CargoBounds;
pub use config::{Config, Strategy};
pub use error::{Error, Result};
pub use item::{Item, ItemId, PlacedItem, Rotation};
pub use result::PackResult;
