//! Cargo bed bounds.

use crate::aabb::Aabb;
use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular cargo volume of a vehicle, in millimeters.
///
/// The engine works exclusively in millimeters; meter-based caller input is
/// converted once at this boundary via [`CargoBounds::from_corners_m`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoBounds {
    /// Minimum corner (mm).
    min: Vector3<f64>,
    /// Maximum corner (mm).
    max: Vector3<f64>,
}

impl CargoBounds {
    /// Creates bounds with the given extents and the origin at zero.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            min: Vector3::zeros(),
            max: Vector3::new(width, depth, height),
        }
    }

    /// Creates bounds from explicit min/max corners in millimeters.
    pub fn from_corners(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates bounds from min/max corners given in meters.
    ///
    /// This is the single unit-conversion point for meter-based callers.
    pub fn from_corners_m(min_m: Vector3<f64>, max_m: Vector3<f64>) -> Self {
        Self {
            min: min_m * 1000.0,
            max: max_m * 1000.0,
        }
    }

    /// Returns the minimum corner (mm).
    pub fn min(&self) -> &Vector3<f64> {
        &self.min
    }

    /// Returns the maximum corner (mm).
    pub fn max(&self) -> &Vector3<f64> {
        &self.max
    }

    /// Returns the width (x extent, mm).
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the depth (y extent, mm).
    pub fn depth(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the height (z extent, mm).
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Returns the volume in mm³.
    pub fn volume(&self) -> f64 {
        self.width() * self.depth() * self.height()
    }

    /// Returns the bounds as an [`Aabb`].
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        )
    }

    /// Checks whether the given AABB lies entirely within the cargo volume.
    pub fn contains(&self, aabb: &Aabb) -> bool {
        self.aabb().contains(aabb)
    }

    /// Validates the bounds and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.width() <= 0.0 || self.depth() <= 0.0 || self.height() <= 0.0 {
            return Err(Error::InvalidBounds(
                "All extents must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_extents_and_volume() {
        let bounds = CargoBounds::new(2000.0, 4400.0, 2000.0);
        assert_relative_eq!(bounds.width(), 2000.0);
        assert_relative_eq!(bounds.depth(), 4400.0);
        assert_relative_eq!(bounds.height(), 2000.0);
        assert_relative_eq!(bounds.volume(), 2000.0 * 4400.0 * 2000.0);
    }

    #[test]
    fn test_meter_conversion() {
        let bounds = CargoBounds::from_corners_m(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.7, 3.1, 1.8),
        );
        assert_relative_eq!(bounds.width(), 1700.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.depth(), 3100.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.height(), 1800.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contains() {
        let bounds = CargoBounds::new(1000.0, 1000.0, 1000.0);
        let inside = Aabb::from_corner(0.0, 0.0, 0.0, 500.0, 500.0, 500.0);
        let outside = Aabb::from_corner(600.0, 0.0, 0.0, 500.0, 500.0, 500.0);

        assert!(bounds.contains(&inside));
        assert!(!bounds.contains(&outside));
    }

    #[test]
    fn test_validation() {
        assert!(CargoBounds::new(1000.0, 1000.0, 1000.0).validate().is_ok());
        assert!(CargoBounds::new(0.0, 1000.0, 1000.0).validate().is_err());
        assert!(CargoBounds::from_corners(
            Vector3::new(100.0, 0.0, 0.0),
            Vector3::new(50.0, 1000.0, 1000.0)
        )
        .validate()
        .is_err());
    }
}
