//! Load/unload sequencing.
//!
//! Converts a spatial placement into a physically loadable order: bottom
//! layer first, and within a layer from the back of the vehicle toward the
//! entrance, left to right. Nothing may be loaded in front of or above an
//! item that is not yet in place.

use cargopack_core::PlacedItem;

/// Assigns a dense 1..=N load order to the placements.
///
/// Pure and stable: sorts by (z ascending, y descending, x ascending) and
/// numbers the result sequentially. Calling it twice yields the same
/// assignment.
pub fn assign_load_order(placed: &[PlacedItem]) -> Vec<PlacedItem> {
    let mut ordered: Vec<PlacedItem> = placed.to_vec();
    ordered.sort_by(|a, b| {
        a.pos
            .z
            .total_cmp(&b.pos.z)
            .then(b.pos.y.total_cmp(&a.pos.y))
            .then(a.pos.x.total_cmp(&b.pos.x))
    });

    for (i, p) in ordered.iter_mut().enumerate() {
        p.load_order = i as u32 + 1;
    }

    ordered
}

/// Returns the placements in delivery consumption order: ascending stop
/// sequence, and within a stop the most recently loaded (nearest the
/// entrance) first.
pub fn delivery_sequence(placed: &[PlacedItem]) -> Vec<PlacedItem> {
    let mut ordered: Vec<PlacedItem> = placed.to_vec();
    ordered.sort_by(|a, b| {
        a.item
            .delivery_order
            .cmp(&b.item.delivery_order)
            .then(b.load_order.cmp(&a.load_order))
    });
    ordered
}
