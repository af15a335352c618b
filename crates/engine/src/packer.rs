//! Strategy dispatch and the engine entry point.

use crate::free_space::run_free_space_packing;
use crate::grid::{run_exhaustive_packing, run_random_packing};
use crate::sequencer::assign_load_order;
use cargopack_core::{CargoBounds, Config, Item, PackResult, Result, Strategy};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use std::time::Instant;

/// Cargo placement engine.
///
/// Validates its input once at this boundary, dispatches to the configured
/// strategy, and runs the sequencer so that every returned placement
/// carries a dense load order. Each call owns all of its working state;
/// concurrent packing requests should use independent `Packer` values.
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn validate(&self, items: &[Item], bounds: &CargoBounds) -> Result<()> {
        bounds.validate()?;
        self.config.validate()?;
        for item in items {
            item.validate()?;
        }
        Ok(())
    }

    fn dispatch(&self, items: &[Item], bounds: &CargoBounds) -> PackResult {
        match self.config.strategy {
            Strategy::FreeSpace => {
                run_free_space_packing(items, bounds).with_strategy("free-space")
            }
            Strategy::GridExhaustive => {
                run_exhaustive_packing(items, bounds, self.config.step_mm)
                    .with_strategy("grid-exhaustive")
            }
            Strategy::GridRandom => {
                let result = match self.config.seed {
                    Some(seed) => run_random_packing(
                        items,
                        bounds,
                        self.config.cell_mm,
                        self.config.max_attempts,
                        &mut StdRng::seed_from_u64(seed),
                    ),
                    None => run_random_packing(
                        items,
                        bounds,
                        self.config.cell_mm,
                        self.config.max_attempts,
                        &mut thread_rng(),
                    ),
                };
                result.with_strategy("grid-random")
            }
        }
    }

    /// Packs the items into the cargo volume.
    ///
    /// Input is validated up front; past this point an item that does not
    /// fit is a normal outcome reported in [`PackResult::unplaced`].
    pub fn pack(&self, items: &[Item], bounds: &CargoBounds) -> Result<PackResult> {
        self.validate(items, bounds)?;

        let start = Instant::now();
        let mut result = self.dispatch(items, bounds);
        result.placed = assign_load_order(&result.placed);
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "packed {}/{} items ({}, utilization {})",
            result.placed_count(),
            result.total_count(),
            result.strategy.as_deref().unwrap_or("unknown"),
            result.utilization_percent()
        );

        Ok(result)
    }

    /// Runs a caller-supplied primary placement (typically an adapter for a
    /// remote optimizer) and falls back to the exhaustive grid packer if it
    /// fails.
    ///
    /// The fallback never errors the whole request: a failing primary is
    /// logged and the deterministic local strategy takes over.
    pub fn pack_with_fallback<F>(
        &self,
        items: &[Item],
        bounds: &CargoBounds,
        primary: F,
    ) -> Result<PackResult>
    where
        F: FnOnce(&[Item], &CargoBounds) -> Result<PackResult>,
    {
        self.validate(items, bounds)?;

        let start = Instant::now();
        let mut result = match primary(items, bounds) {
            Ok(result) => result,
            Err(err) => {
                log::warn!("primary placement failed ({err}), falling back to exhaustive grid");
                run_exhaustive_packing(items, bounds, self.config.step_mm)
                    .with_strategy("grid-exhaustive (fallback)")
            }
        };

        result.placed = assign_load_order(&result.placed);
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cargopack_core::Error;

    fn bounds() -> CargoBounds {
        CargoBounds::new(1000.0, 1000.0, 1000.0)
    }

    fn items() -> Vec<Item> {
        (0..6)
            .map(|i| {
                Item::new(format!("B{i}"), 400.0, 400.0, 400.0)
                    .with_delivery_order(i as u32 + 1)
                    .with_weight(5.0)
            })
            .collect()
    }

    #[test]
    fn test_pack_assigns_load_order() {
        let packer = Packer::default_config();
        let result = packer.pack(&items(), &bounds()).unwrap();

        let mut orders: Vec<u32> = result.placed.iter().map(|p| p.load_order).collect();
        orders.sort_unstable();
        assert_eq!(orders, (1..=result.placed_count() as u32).collect::<Vec<u32>>());
        assert_eq!(result.strategy.as_deref(), Some("free-space"));
    }

    #[test]
    fn test_invalid_item_rejected_at_boundary() {
        let packer = Packer::default_config();
        let bad = vec![Item::new("bad", 0.0, 100.0, 100.0)];
        let err = packer.pack(&bad, &bounds()).unwrap_err();
        assert!(matches!(err, Error::InvalidItem(_)));
    }

    #[test]
    fn test_invalid_bounds_rejected_at_boundary() {
        let packer = Packer::default_config();
        let flat = CargoBounds::new(1000.0, 1000.0, 0.0);
        let err = packer.pack(&items(), &flat).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds(_)));
    }

    #[test]
    fn test_seeded_grid_random_is_reproducible() {
        let config = Config::new()
            .with_strategy(Strategy::GridRandom)
            .with_seed(1234);
        let packer = Packer::new(config);

        let a = packer.pack(&items(), &bounds()).unwrap();
        let b = packer.pack(&items(), &bounds()).unwrap();

        assert_eq!(a.placed_count(), b.placed_count());
        for (pa, pb) in a.placed.iter().zip(b.placed.iter()) {
            assert_eq!(pa.item.id, pb.item.id);
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.load_order, pb.load_order);
        }
    }

    #[test]
    fn test_fallback_on_primary_failure() {
        let packer = Packer::default_config();
        let result = packer
            .pack_with_fallback(&items(), &bounds(), |_, _| {
                Err(Error::Internal("optimizer unreachable".into()))
            })
            .unwrap();

        assert_eq!(result.strategy.as_deref(), Some("grid-exhaustive (fallback)"));
        assert_eq!(result.total_count(), 6);
    }

    #[test]
    fn test_fallback_passes_through_primary_success() {
        let packer = Packer::default_config();
        let result = packer
            .pack_with_fallback(&items(), &bounds(), |items, bounds| {
                Ok(run_exhaustive_packing(items, bounds, 50.0).with_strategy("primary"))
            })
            .unwrap();

        assert_eq!(result.strategy.as_deref(), Some("primary"));
    }
}
