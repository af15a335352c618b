//! Grid collision packers.
//!
//! Two sub-modes over the same no-overlap/containment invariant:
//!
//! - [`run_exhaustive_packing`]: deterministic scan of candidate origins on
//!   a millimeter lattice with explicit AABB collision checks. Used for
//!   correctness-critical paths and as the fallback when an external
//!   optimizer is unavailable.
//! - [`run_random_packing`]: randomized gravity-drop on a boolean voxel
//!   grid, with an injected RNG so a seed replays a run bit-for-bit. Used
//!   for synthetic/demo visualization.

use cargopack_core::{Aabb, CargoBounds, Item, PackResult, PlacedItem, Rotation};
use nalgebra::Vector3;
use rand::seq::SliceRandom;
use rand::Rng;

/// Orders items for deterministic placement: fragile items last, and within
/// each fragility class heavier items first.
fn placement_order(items: &[Item]) -> Vec<&Item> {
    let mut ordered: Vec<&Item> = items.iter().collect();
    ordered.sort_by(|a, b| {
        a.fragile
            .cmp(&b.fragile)
            .then(b.weight_kg.total_cmp(&a.weight_kg))
    });
    ordered
}

/// Scans lattice origins in z, y, x ascending order and returns the first
/// position where the box neither overlaps a placed AABB nor leaves the
/// cargo volume.
fn scan_lattice(
    placed: &[Aabb],
    bounds: &CargoBounds,
    ext: &Vector3<f64>,
    step_mm: f64,
) -> Option<Vector3<f64>> {
    let span_x = bounds.width() - ext.x;
    let span_y = bounds.depth() - ext.y;
    let span_z = bounds.height() - ext.z;
    if span_x < 0.0 || span_y < 0.0 || span_z < 0.0 {
        return None;
    }

    let nx = (span_x / step_mm).floor() as u64;
    let ny = (span_y / step_mm).floor() as u64;
    let nz = (span_z / step_mm).floor() as u64;

    for iz in 0..=nz {
        let z = bounds.min().z + iz as f64 * step_mm;
        for iy in 0..=ny {
            let y = bounds.min().y + iy as f64 * step_mm;
            for ix in 0..=nx {
                let x = bounds.min().x + ix as f64 * step_mm;
                let candidate = Aabb::from_corner(x, y, z, ext.x, ext.y, ext.z);
                if !placed.iter().any(|p| p.intersects(&candidate)) {
                    return Some(Vector3::new(x, y, z));
                }
            }
        }
    }

    None
}

/// Runs the exhaustive lattice-scan packer.
///
/// Fully deterministic for identical input. If the unrotated scan exhausts
/// without success and the item permits it, the scan repeats with x/y
/// swapped. Items with no feasible origin are reported in `unplaced`.
pub fn run_exhaustive_packing(items: &[Item], bounds: &CargoBounds, step_mm: f64) -> PackResult {
    let mut result = PackResult::new();
    let mut occupied: Vec<Aabb> = Vec::new();
    let mut placed_volume = 0.0;

    for item in placement_order(items) {
        let mut hit = scan_lattice(&occupied, bounds, &item.extents(Rotation::Deg0), step_mm)
            .map(|pos| (pos, Rotation::Deg0));

        if hit.is_none() && item.rotatable_xy {
            hit = scan_lattice(&occupied, bounds, &item.extents(Rotation::Deg90), step_mm)
                .map(|pos| (pos, Rotation::Deg90));
        }

        match hit {
            Some((pos, rotation)) => {
                let placement = PlacedItem::new(item.clone(), pos.x, pos.y, pos.z, rotation);
                occupied.push(placement.aabb());
                placed_volume += item.volume();
                result.placed.push(placement);
            }
            None => result.unplaced.push(item.clone()),
        }
    }

    result.utilization = placed_volume / bounds.volume();

    if !result.unplaced.is_empty() {
        log::debug!(
            "grid-exhaustive: {}/{} items unplaced",
            result.unplaced.len(),
            items.len()
        );
    }

    result
}

/// Boolean voxel occupancy grid at a fixed cell resolution.
///
/// Cell counts are floored so that every quantized placement stays inside
/// the cargo volume even when the extents are not cell multiples.
struct OccupancyGrid {
    nx: usize,
    ny: usize,
    nz: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    fn new(bounds: &CargoBounds, cell_mm: f64) -> Self {
        let nx = (bounds.width() / cell_mm).floor() as usize;
        let ny = (bounds.depth() / cell_mm).floor() as usize;
        let nz = (bounds.height() / cell_mm).floor() as usize;
        Self {
            nx,
            ny,
            nz,
            cells: vec![false; nx * ny * nz],
        }
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.ny + y) * self.nx + x
    }

    fn region_free(&self, gx: usize, gy: usize, gz: usize, w: usize, d: usize, h: usize) -> bool {
        for z in gz..gz + h {
            for y in gy..gy + d {
                for x in gx..gx + w {
                    if self.cells[self.index(x, y, z)] {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn mark_region(&mut self, gx: usize, gy: usize, gz: usize, w: usize, d: usize, h: usize) {
        for z in gz..gz + h {
            for y in gy..gy + d {
                for x in gx..gx + w {
                    let idx = self.index(x, y, z);
                    self.cells[idx] = true;
                }
            }
        }
    }
}

/// Runs the randomized gravity-drop packer.
///
/// Items are processed in a random order. Each item gets up to
/// `max_attempts` random (x, y) footprint origins; for each, z is scanned
/// from the floor upward and the first level whose cells are all free is
/// taken. Items exhausting their attempts are reported in `unplaced`.
///
/// The RNG is injected; passing a seeded generator replays a packing
/// deterministically.
pub fn run_random_packing<R: Rng + ?Sized>(
    items: &[Item],
    bounds: &CargoBounds,
    cell_mm: f64,
    max_attempts: usize,
    rng: &mut R,
) -> PackResult {
    let mut result = PackResult::new();
    let mut grid = OccupancyGrid::new(bounds, cell_mm);
    let mut placed_volume = 0.0;

    let mut shuffled: Vec<&Item> = items.iter().collect();
    shuffled.shuffle(rng);

    for item in shuffled {
        // Footprints are rounded up to whole cells; the item is covered by
        // at least its own extent.
        let w = (item.dims.x / cell_mm).ceil() as usize;
        let d = (item.dims.y / cell_mm).ceil() as usize;
        let h = (item.dims.z / cell_mm).ceil() as usize;

        if w > grid.nx || d > grid.ny || h > grid.nz {
            result.unplaced.push(item.clone());
            continue;
        }

        let mut landed = false;
        for _ in 0..max_attempts {
            let gx = rng.gen_range(0..=grid.nx - w);
            let gy = rng.gen_range(0..=grid.ny - d);

            // Gravity: take the lowest free level under this footprint.
            for gz in 0..=grid.nz - h {
                if grid.region_free(gx, gy, gz, w, d, h) {
                    grid.mark_region(gx, gy, gz, w, d, h);
                    placed_volume += item.volume();
                    result.placed.push(PlacedItem::new(
                        item.clone(),
                        bounds.min().x + gx as f64 * cell_mm,
                        bounds.min().y + gy as f64 * cell_mm,
                        bounds.min().z + gz as f64 * cell_mm,
                        Rotation::Deg0,
                    ));
                    landed = true;
                    break;
                }
            }

            if landed {
                break;
            }
        }

        if !landed {
            result.unplaced.push(item.clone());
        }
    }

    result.utilization = placed_volume / bounds.volume();

    if !result.unplaced.is_empty() {
        log::debug!(
            "grid-random: {}/{} items unplaced after {} attempts each",
            result.unplaced.len(),
            items.len(),
            max_attempts
        );
    }

    result
}
