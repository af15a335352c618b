//! Bottom-Left-Back free-space packer.
//!
//! Maintains a list of candidate empty sub-volumes, places each item into
//! the space that wastes the least volume, and splits the leftover space
//! into up to three new candidates (right, back, top).
//!
//! Items are processed in *descending* delivery order: items delivered last
//! are placed first, pushing them toward the back and bottom of the vehicle
//! so that early-stop items end up near the exit.

use cargopack_core::{CargoBounds, Item, PackResult, PlacedItem, Rotation};
use nalgebra::Vector3;

/// Minimum usable free-space extent in x and y, in millimeters.
const MIN_SPACE_XY: f64 = 100.0;
/// Minimum usable free-space extent in z, in millimeters.
const MIN_SPACE_Z: f64 = 20.0;

/// A candidate empty sub-volume, owned by a single packing run.
#[derive(Debug, Clone, Copy)]
struct FreeSpace {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
    d: f64,
    h: f64,
}

impl FreeSpace {
    fn volume(&self) -> f64 {
        self.w * self.d * self.h
    }

    /// Checks whether a box with the given extents fits in this space.
    fn admits(&self, ext: &Vector3<f64>) -> bool {
        ext.x <= self.w && ext.y <= self.d && ext.z <= self.h
    }

    /// Spaces below the minimum usable thresholds are discarded to bound
    /// the search cost.
    fn usable(&self) -> bool {
        self.w >= MIN_SPACE_XY && self.d >= MIN_SPACE_XY && self.h >= MIN_SPACE_Z
    }
}

/// Per-run manager for the candidate free-space list.
struct SpaceSet {
    spaces: Vec<FreeSpace>,
}

impl SpaceSet {
    fn new(bounds: &CargoBounds) -> Self {
        Self {
            spaces: vec![FreeSpace {
                x: bounds.min().x,
                y: bounds.min().y,
                z: bounds.min().z,
                w: bounds.width(),
                d: bounds.depth(),
                h: bounds.height(),
            }],
        }
    }

    /// Finds the minimum-waste fit for the item across all spaces and both
    /// orientations. Ties resolve to the first-encountered space, and to the
    /// unrotated orientation within a space.
    fn best_fit(&self, item: &Item) -> Option<(usize, Rotation)> {
        let mut best: Option<(usize, Rotation)> = None;
        let mut best_waste = f64::INFINITY;

        for (idx, space) in self.spaces.iter().enumerate() {
            if space.admits(&item.extents(Rotation::Deg0)) {
                let waste = space.volume() - item.volume();
                if waste < best_waste {
                    best_waste = waste;
                    best = Some((idx, Rotation::Deg0));
                }
            }

            if item.rotatable_xy && space.admits(&item.extents(Rotation::Deg90)) {
                let waste = space.volume() - item.volume();
                if waste < best_waste {
                    best_waste = waste;
                    best = Some((idx, Rotation::Deg90));
                }
            }
        }

        best
    }

    /// Removes the chosen space, splits its residual volume around the
    /// placed extents, and re-sorts the remaining spaces by (y, z, x) so the
    /// next scan favors positions near the entrance and floor.
    fn place(&mut self, idx: usize, ext: &Vector3<f64>) -> Vector3<f64> {
        let s = self.spaces.remove(idx);

        // Right: remaining width beside the item.
        if s.w - ext.x > 0.0 {
            self.spaces.push(FreeSpace {
                x: s.x + ext.x,
                y: s.y,
                z: s.z,
                w: s.w - ext.x,
                d: s.d,
                h: s.h,
            });
        }
        // Back: remaining depth behind the item, limited to its width.
        if s.d - ext.y > 0.0 {
            self.spaces.push(FreeSpace {
                x: s.x,
                y: s.y + ext.y,
                z: s.z,
                w: ext.x,
                d: s.d - ext.y,
                h: s.h,
            });
        }
        // Top: remaining height above the item, limited to its footprint.
        if s.h - ext.z > 0.0 {
            self.spaces.push(FreeSpace {
                x: s.x,
                y: s.y,
                z: s.z + ext.z,
                w: ext.x,
                d: ext.y,
                h: s.h - ext.z,
            });
        }

        self.spaces.retain(FreeSpace::usable);
        self.spaces.sort_by(|a, b| {
            a.y.total_cmp(&b.y)
                .then(a.z.total_cmp(&b.z))
                .then(a.x.total_cmp(&b.x))
        });

        Vector3::new(s.x, s.y, s.z)
    }

    fn len(&self) -> usize {
        self.spaces.len()
    }
}

/// Runs the free-space packing heuristic.
///
/// Positions are relative to the cargo origin. `load_order` is left
/// unassigned; run the placements through
/// [`assign_load_order`](crate::sequencer::assign_load_order) (the
/// dispatching [`Packer`](crate::Packer) does this automatically).
pub fn run_free_space_packing(items: &[Item], bounds: &CargoBounds) -> PackResult {
    let mut result = PackResult::new();
    let mut spaces = SpaceSet::new(bounds);

    // Descending delivery order; the sort is stable so equal stops keep
    // their input order.
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by(|a, b| b.delivery_order.cmp(&a.delivery_order));

    let mut placed_volume = 0.0;

    for item in ordered {
        match spaces.best_fit(item) {
            Some((idx, rotation)) => {
                let ext = item.extents(rotation);
                let pos = spaces.place(idx, &ext);
                placed_volume += item.volume();
                result
                    .placed
                    .push(PlacedItem::new(item.clone(), pos.x, pos.y, pos.z, rotation));
            }
            None => result.unplaced.push(item.clone()),
        }
    }

    result.utilization = placed_volume / bounds.volume();

    if !result.unplaced.is_empty() {
        log::debug!(
            "free-space: capacity shortfall, {}/{} items unplaced ({} spaces left)",
            result.unplaced.len(),
            items.len(),
            spaces.len()
        );
    }

    result
}
