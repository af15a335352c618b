//! Synthetic item generation.
//!
//! Produces test/demo item sets that fill a target fraction of the cargo
//! volume, drawn from a fixed catalog of box archetypes. Weight is derived
//! from volume and a randomly sampled density, and the delivery order is
//! assigned fragile-last, heaviest-first so that the free-space packer's
//! inversion puts heavy items on the floor and fragile items on top.

use cargopack_core::{CargoBounds, Error, Item, Result};
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box archetype in the catalog.
///
/// Serialize-only under the `serde` feature: the `&'static` catalog code
/// rules out deserialization.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BoxType {
    /// Catalog code.
    pub id: &'static str,
    /// X extent in millimeters.
    pub x: f64,
    /// Y extent in millimeters.
    pub y: f64,
    /// Z extent in millimeters.
    pub z: f64,
}

impl BoxType {
    /// Returns the volume in mm³.
    pub fn volume(&self) -> f64 {
        self.x * self.y * self.z
    }
}

/// The standard box catalog, from thin mailers up to large parcels.
pub const BOX_CATALOG: [BoxType; 7] = [
    BoxType { id: "XM01", x: 286.0, y: 213.0, z: 24.0 },
    BoxType { id: "XM02", x: 232.0, y: 133.0, z: 22.0 },
    BoxType { id: "XY05", x: 250.0, y: 180.0, z: 120.0 },
    BoxType { id: "X08", x: 315.0, y: 245.0, z: 105.0 },
    BoxType { id: "XY13", x: 330.0, y: 255.0, z: 30.0 },
    BoxType { id: "X11", x: 405.0, y: 305.0, z: 255.0 },
    BoxType { id: "X12", x: 485.0, y: 325.0, z: 295.0 },
];

const PRODUCT_NAMES: [&str; 15] = [
    "Books",
    "Apparel",
    "Groceries",
    "Electronics",
    "Sundries",
    "Cosmetics",
    "Stationery",
    "Toys",
    "Pharmaceuticals",
    "Beverages",
    "Sporting goods",
    "Furniture",
    "Miscellaneous",
    "Pet supplies",
    "Tools",
];

const DESTINATIONS: [&str; 13] = [
    "Shibuya, Tokyo",
    "Shinjuku, Tokyo",
    "Minato, Tokyo",
    "Shinagawa, Tokyo",
    "Meguro, Tokyo",
    "Yokohama, Kanagawa",
    "Kawasaki, Kanagawa",
    "Chiba, Chiba",
    "Saitama, Saitama",
    "Osaka, Osaka",
    "Nagoya, Aichi",
    "Fukuoka, Fukuoka",
    "Sapporo, Hokkaido",
];

/// Configuration for synthetic item generation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Target fraction of the cargo volume to fill (0.0 - 1.0].
    pub target_load_rate: f64,

    /// Probability that an item is fragile.
    pub fragile_rate: f64,

    /// Probability that an item may *not* be rotated.
    pub no_rotate_rate: f64,

    /// Accumulated volume may exceed the target by at most this factor.
    pub overshoot: f64,

    /// Hard cap on the number of generated items.
    pub max_items: usize,

    /// Lower bound of the density band, kg/m³.
    pub density_min: f64,

    /// Upper bound of the density band, kg/m³.
    pub density_max: f64,

    /// Whether to sample product names and destinations.
    pub labels: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_load_rate: 0.8,
            fragile_rate: 0.15,
            no_rotate_rate: 0.2,
            overshoot: 1.1,
            max_items: 1000,
            density_min: 100.0,
            density_max: 400.0,
            labels: false,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo preset: tighter overshoot, larger item cap, a narrower density
    /// band, and labelled items.
    pub fn demo() -> Self {
        Self {
            overshoot: 1.05,
            max_items: 2000,
            density_min: 150.0,
            density_max: 350.0,
            labels: true,
            ..Self::default()
        }
    }

    /// Sets the target load rate.
    pub fn with_target_load_rate(mut self, rate: f64) -> Self {
        self.target_load_rate = rate;
        self
    }

    /// Sets the fragile probability.
    pub fn with_fragile_rate(mut self, rate: f64) -> Self {
        self.fragile_rate = rate;
        self
    }

    /// Sets the no-rotation probability.
    pub fn with_no_rotate_rate(mut self, rate: f64) -> Self {
        self.no_rotate_rate = rate;
        self
    }

    /// Sets the item cap.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Enables or disables label sampling.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.target_load_rate <= 0.0 || self.target_load_rate > 1.0 {
            return Err(Error::ConfigError(
                "target_load_rate must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fragile_rate) {
            return Err(Error::ConfigError(
                "fragile_rate must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.no_rotate_rate) {
            return Err(Error::ConfigError(
                "no_rotate_rate must be in [0, 1]".into(),
            ));
        }
        if self.overshoot < 1.0 {
            return Err(Error::ConfigError(
                "overshoot must be at least 1.0".into(),
            ));
        }
        if self.max_items == 0 {
            return Err(Error::ConfigError(
                "max_items must be at least 1".into(),
            ));
        }
        if self.density_min <= 0.0 || self.density_max < self.density_min {
            return Err(Error::ConfigError(
                "density band must be positive and ordered".into(),
            ));
        }
        Ok(())
    }
}

/// Weight from volume and a sampled density, rounded to 0.1 kg.
fn sample_weight<R: Rng + ?Sized>(box_type: &BoxType, config: &GeneratorConfig, rng: &mut R) -> f64 {
    let volume_m3 = (box_type.x / 1000.0) * (box_type.y / 1000.0) * (box_type.z / 1000.0);
    // A collapsed band fixes the density instead of feeding gen_range an
    // empty range.
    let density = if config.density_max > config.density_min {
        rng.gen_range(config.density_min..config.density_max)
    } else {
        config.density_min
    };
    (volume_m3 * density * 10.0).round() / 10.0
}

fn build_item<R: Rng + ?Sized>(
    box_type: &BoxType,
    index: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Item {
    let mut item = Item::new(
        format!("{}-{:03}", box_type.id, index),
        box_type.x,
        box_type.y,
        box_type.z,
    )
    .with_weight(sample_weight(box_type, config, rng))
    .with_fragile(rng.gen::<f64>() < config.fragile_rate)
    .with_rotatable(rng.gen::<f64>() >= config.no_rotate_rate);

    if config.labels {
        item = item
            .with_name(*PRODUCT_NAMES.choose(rng).unwrap_or(&PRODUCT_NAMES[0]))
            .with_destination(*DESTINATIONS.choose(rng).unwrap_or(&DESTINATIONS[0]));
    }

    item
}

/// Assigns delivery stops: fragile items last, heavier items first within a
/// fragility class, numbered sequentially from 1. The free-space packer
/// inverts this order at placement time.
pub fn assign_delivery_order(items: &mut [Item]) {
    items.sort_by(|a, b| {
        a.fragile
            .cmp(&b.fragile)
            .then(b.weight_kg.total_cmp(&a.weight_kg))
    });
    for (i, item) in items.iter_mut().enumerate() {
        item.delivery_order = i as u32 + 1;
    }
}

/// Generates items until the accumulated volume reaches
/// `target_load_rate × cargo volume`.
///
/// If the next random draw would push past `overshoot × target`, a random
/// catalog box that still fits the remaining budget is substituted; if none
/// fits, generation stops. The item count is hard-capped at
/// `config.max_items`.
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    bounds: &CargoBounds,
    rng: &mut R,
) -> Vec<Item> {
    let target = bounds.volume() * config.target_load_rate;
    let budget = target * config.overshoot;

    let mut items = Vec::new();
    let mut accumulated = 0.0;
    let mut index = 1;

    while accumulated < target && items.len() < config.max_items {
        let draw = BOX_CATALOG[rng.gen_range(0..BOX_CATALOG.len())];

        let chosen = if accumulated + draw.volume() <= budget {
            draw
        } else {
            let fitting: Vec<BoxType> = BOX_CATALOG
                .iter()
                .copied()
                .filter(|b| b.volume() <= budget - accumulated)
                .collect();
            match fitting.choose(rng) {
                Some(b) => *b,
                None => break,
            }
        };

        items.push(build_item(&chosen, index, config, rng));
        accumulated += chosen.volume();
        index += 1;
    }

    assign_delivery_order(&mut items);

    log::debug!(
        "generated {} items, load rate {:.1}%",
        items.len(),
        accumulated / bounds.volume() * 100.0
    );

    items
}

/// Generates a fixed number of items per catalog code.
///
/// Unknown codes are skipped. Weights, fragility and rotation permission
/// are sampled as in [`generate`], and delivery stops are assigned the same
/// way.
pub fn generate_by_count<R: Rng + ?Sized>(
    counts: &[(&str, usize)],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Item> {
    let mut items = Vec::new();
    let mut index = 1;

    for (code, count) in counts {
        let Some(box_type) = BOX_CATALOG.iter().find(|b| b.id == *code) else {
            continue;
        };
        for _ in 0..*count {
            items.push(build_item(box_type, index, config, rng));
            index += 1;
        }
    }

    assign_delivery_order(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds() -> CargoBounds {
        CargoBounds::new(1700.0, 3100.0, 1800.0)
    }

    fn total_volume(items: &[Item]) -> f64 {
        items.iter().map(Item::volume).sum()
    }

    #[test]
    fn test_volume_reaches_target_within_overshoot() {
        let config = GeneratorConfig::default();
        let bounds = bounds();
        let mut rng = StdRng::seed_from_u64(11);
        let items = generate(&config, &bounds, &mut rng);

        let target = bounds.volume() * config.target_load_rate;
        let volume = total_volume(&items);
        assert!(volume >= target, "accumulated {volume} below target {target}");
        assert!(
            volume <= target * config.overshoot,
            "accumulated {volume} above clamp"
        );
    }

    #[test]
    fn test_item_count_tracks_catalog_granularity() {
        let config = GeneratorConfig::default().with_target_load_rate(0.5);
        let bounds = bounds();
        let mut rng = StdRng::seed_from_u64(2);
        let items = generate(&config, &bounds, &mut rng);

        let target = bounds.volume() * config.target_load_rate;
        let largest = BOX_CATALOG
            .iter()
            .map(|b| b.volume())
            .fold(0.0_f64, f64::max);
        let smallest = BOX_CATALOG
            .iter()
            .map(|b| b.volume())
            .fold(f64::INFINITY, f64::min);

        // Enough boxes to cover the target with the largest archetype, and
        // no more than the budget divided among the smallest.
        assert!(items.len() as f64 >= (target / largest).floor());
        assert!(items.len() as f64 <= (target * config.overshoot / smallest).ceil());
    }

    #[test]
    fn test_delivery_order_is_dense_and_fragile_last() {
        let config = GeneratorConfig::default().with_fragile_rate(0.3);
        let mut rng = StdRng::seed_from_u64(4);
        let items = generate(&config, &bounds(), &mut rng);

        let mut orders: Vec<u32> = items.iter().map(|i| i.delivery_order).collect();
        orders.sort_unstable();
        assert_eq!(orders, (1..=items.len() as u32).collect::<Vec<u32>>());

        // Once the fragile block starts, it runs to the end.
        let first_fragile = items.iter().position(|i| i.fragile);
        if let Some(idx) = first_fragile {
            assert!(items[idx..].iter().all(|i| i.fragile));
            // Within the non-fragile block, weights never increase.
            for pair in items[..idx].windows(2) {
                assert!(pair[0].weight_kg >= pair[1].weight_kg);
            }
        }
    }

    #[test]
    fn test_weight_in_density_band() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let items = generate(&config, &bounds(), &mut rng);

        for item in &items {
            let volume_m3 = item.volume() / 1e9;
            // 0.1kg rounding widens the band by half a step on each side.
            let lo = volume_m3 * config.density_min - 0.05;
            let hi = volume_m3 * config.density_max + 0.05;
            assert!(
                item.weight_kg >= lo && item.weight_kg <= hi,
                "{}: weight {} outside [{lo}, {hi}]",
                item.id,
                item.weight_kg
            );
        }
    }

    #[test]
    fn test_max_items_cap() {
        let config = GeneratorConfig::default().with_max_items(10);
        let mut rng = StdRng::seed_from_u64(1);
        let items = generate(&config, &bounds(), &mut rng);
        assert!(items.len() <= 10);
    }

    #[test]
    fn test_demo_preset_labels() {
        let config = GeneratorConfig::demo().with_target_load_rate(0.1);
        let mut rng = StdRng::seed_from_u64(6);
        let items = generate(&config, &bounds(), &mut rng);

        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i.name.is_some() && i.destination.is_some()));
    }

    #[test]
    fn test_generate_by_count() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let items = generate_by_count(&[("XM01", 3), ("X12", 2), ("NOPE", 5)], &config, &mut rng);

        assert_eq!(items.len(), 5);
        assert_eq!(items.iter().filter(|i| i.id.starts_with("XM01")).count(), 3);
        assert_eq!(items.iter().filter(|i| i.id.starts_with("X12")).count(), 2);
    }

    #[test]
    fn test_config_validation() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::demo().validate().is_ok());

        let mut inverted = GeneratorConfig::default();
        inverted.density_min = 500.0;
        assert!(inverted.validate().is_err());

        assert!(GeneratorConfig::default()
            .with_target_load_rate(0.0)
            .validate()
            .is_err());
        assert!(GeneratorConfig::default()
            .with_fragile_rate(1.5)
            .validate()
            .is_err());
        assert!(GeneratorConfig::default()
            .with_max_items(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_collapsed_density_band_yields_fixed_density() {
        let mut config = GeneratorConfig::default().with_target_load_rate(0.05);
        config.density_min = 200.0;
        config.density_max = 200.0;
        let mut rng = StdRng::seed_from_u64(3);
        let items = generate(&config, &bounds(), &mut rng);

        assert!(!items.is_empty());
        for item in &items {
            let volume_m3 = item.volume() / 1e9;
            let expected = (volume_m3 * 200.0 * 10.0).round() / 10.0;
            assert_relative_eq!(item.weight_kg, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_items() {
        let config = GeneratorConfig::demo();
        let bounds = bounds();

        let a = generate(&config, &bounds, &mut StdRng::seed_from_u64(99));
        let b = generate(&config, &bounds, &mut StdRng::seed_from_u64(99));

        assert_eq!(a.len(), b.len());
        for (ia, ib) in a.iter().zip(b.iter()) {
            assert_eq!(ia.id, ib.id);
            assert_eq!(ia.weight_kg, ib.weight_kg);
            assert_eq!(ia.fragile, ib.fragile);
            assert_eq!(ia.delivery_order, ib.delivery_order);
        }
    }
}
