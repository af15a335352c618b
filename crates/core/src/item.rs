//! Cargo item types.

use crate::aabb::Aabb;
use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an item.
pub type ItemId = String;

/// Rotation of an item about the vertical axis.
///
/// Only yaw rotations are permitted: a `Deg90` rotation swaps the x/y
/// extents of an item and never alters its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Original orientation.
    #[default]
    Deg0,
    /// Rotated 90° about the vertical axis (x/y extents swapped).
    Deg90,
}

impl Rotation {
    /// Returns the rotation angle in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
        }
    }
}

/// A box-shaped cargo item to be placed.
///
/// All linear dimensions are in millimeters, weight in kilograms.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,

    /// Optional product name.
    pub name: Option<String>,

    /// Optional delivery destination.
    pub destination: Option<String>,

    /// Dimensions (x, y, z) in millimeters.
    pub dims: Vector3<f64>,

    /// Delivery stop sequence (1-based, smaller = delivered sooner).
    pub delivery_order: u32,

    /// Weight in kilograms.
    pub weight_kg: f64,

    /// Whether the item is fragile (kept topmost / placed last).
    pub fragile: bool,

    /// Whether the item may be rotated 90° about the vertical axis.
    pub rotatable_xy: bool,
}

impl Item {
    /// Creates a new item with the given ID and dimensions in millimeters.
    pub fn new(id: impl Into<ItemId>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            destination: None,
            dims: Vector3::new(x, y, z),
            delivery_order: 1,
            weight_kg: 0.0,
            fragile: false,
            rotatable_xy: true,
        }
    }

    /// Sets the product name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the delivery destination.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Sets the delivery stop sequence (1-based).
    pub fn with_delivery_order(mut self, order: u32) -> Self {
        self.delivery_order = order;
        self
    }

    /// Sets the weight in kilograms.
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Marks the item as fragile.
    pub fn with_fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }

    /// Sets whether the item may be rotated about the vertical axis.
    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable_xy = rotatable;
        self
    }

    /// Returns the volume in mm³.
    pub fn volume(&self) -> f64 {
        self.dims.x * self.dims.y * self.dims.z
    }

    /// Returns the (x, y, z) extents for the given rotation.
    pub fn extents(&self, rotation: Rotation) -> Vector3<f64> {
        match rotation {
            Rotation::Deg0 => self.dims,
            Rotation::Deg90 => Vector3::new(self.dims.y, self.dims.x, self.dims.z),
        }
    }

    /// Validates the item and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dims.x <= 0.0 || self.dims.y <= 0.0 || self.dims.z <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.weight_kg < 0.0 {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' cannot be negative",
                self.id
            )));
        }

        if self.delivery_order == 0 {
            return Err(Error::InvalidItem(format!(
                "Delivery order for '{}' must be at least 1",
                self.id
            )));
        }

        Ok(())
    }
}

/// An item that has been assigned a position inside the cargo volume.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// The placed item.
    pub item: Item,

    /// Min-corner position in millimeters, relative to the cargo origin.
    pub pos: Vector3<f64>,

    /// Applied rotation. `Deg90` only appears when `item.rotatable_xy`.
    pub rotation: Rotation,

    /// Loading sequence (dense 1..=N, assigned by the sequencer).
    pub load_order: u32,
}

impl PlacedItem {
    /// Creates a placement at the given position.
    pub fn new(item: Item, x: f64, y: f64, z: f64, rotation: Rotation) -> Self {
        Self {
            item,
            pos: Vector3::new(x, y, z),
            rotation,
            load_order: 0,
        }
    }

    /// Returns the effective (x, y, z) extents after rotation.
    pub fn footprint(&self) -> Vector3<f64> {
        self.item.extents(self.rotation)
    }

    /// Returns the axis-aligned bounding box of this placement.
    pub fn aabb(&self) -> Aabb {
        let ext = self.footprint();
        Aabb::from_corner(self.pos.x, self.pos.y, self.pos.z, ext.x, ext.y, ext.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_item_volume() {
        let item = Item::new("B1", 10.0, 20.0, 30.0);
        assert_relative_eq!(item.volume(), 6000.0, epsilon = 0.001);
    }

    #[test]
    fn test_rotation_swaps_xy_only() {
        let item = Item::new("B1", 100.0, 200.0, 50.0);
        let ext = item.extents(Rotation::Deg90);
        assert_relative_eq!(ext.x, 200.0);
        assert_relative_eq!(ext.y, 100.0);
        assert_relative_eq!(ext.z, 50.0);
    }

    #[test]
    fn test_validation() {
        let valid = Item::new("B1", 10.0, 20.0, 30.0);
        assert!(valid.validate().is_ok());

        let bad_dims = Item::new("B2", -10.0, 20.0, 30.0);
        assert!(bad_dims.validate().is_err());

        let bad_weight = Item::new("B3", 10.0, 20.0, 30.0).with_weight(-1.0);
        assert!(bad_weight.validate().is_err());

        let bad_order = Item::new("B4", 10.0, 20.0, 30.0).with_delivery_order(0);
        assert!(bad_order.validate().is_err());
    }

    #[test]
    fn test_placed_aabb() {
        let item = Item::new("B1", 100.0, 200.0, 50.0);
        let placed = PlacedItem::new(item, 10.0, 20.0, 0.0, Rotation::Deg90);

        let aabb = placed.aabb();
        assert_relative_eq!(aabb.min_x, 10.0);
        assert_relative_eq!(aabb.max_x, 210.0);
        assert_relative_eq!(aabb.max_y, 120.0);
        assert_relative_eq!(aabb.max_z, 50.0);
    }

    #[test]
    fn test_rotation_degrees() {
        assert_eq!(Rotation::Deg0.degrees(), 0);
        assert_eq!(Rotation::Deg90.degrees(), 90);
    }
}
