//! Axis-aligned bounding boxes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in 3D, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Minimum z coordinate.
    pub min_z: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
    /// Maximum z coordinate.
    pub max_z: f64,
}

impl Aabb {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB from a min corner and extents.
    pub fn from_corner(x: f64, y: f64, z: f64, w: f64, d: f64, h: f64) -> Self {
        Self::new(x, y, z, x + w, y + d, z + h)
    }

    /// Returns the width (x dimension).
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the depth (y dimension).
    pub fn depth(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the height (z dimension).
    pub fn height(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Returns the volume in mm³.
    pub fn volume(&self) -> f64 {
        self.width() * self.depth() * self.height()
    }

    /// Checks whether this AABB overlaps another.
    ///
    /// Overlap requires a strict intersection on all three axes: boxes that
    /// merely share a face or an edge do not overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
            && self.min_z < other.max_z
            && self.max_z > other.min_z
    }

    /// Checks whether `other` lies entirely within this AABB.
    pub fn contains(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
            && other.min_z >= self.min_z
            && other.max_z <= self.max_z
    }
}
