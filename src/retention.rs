//! Eviction-set computation and eviction request issuance.

use crate::classify::classify_retained;
use crate::config::PurgeConfig;
use crate::core::CellPos;
use crate::interface::Grid;
use log::info;
use std::collections::HashSet;
use std::time::Instant;

/// Result of one retention pass: what was queued for eviction and how many
/// cells each anchor category retained.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EvictionPlan {
    /// Cells queued for eviction this pass. Disjoint from every retained
    /// category by construction.
    pub to_evict: HashSet<CellPos>,
    pub proximity_count: usize,
    pub keepalive_count: usize,
    pub origin_count: usize,
}

impl EvictionPlan {
    /// Number of cells queued for eviction.
    pub fn evicted_count(&self) -> usize {
        self.to_evict.len()
    }
}

/// One retention pass over a grid: snapshot the working set, classify the
/// anchored regions, and queue everything else for eviction.
pub struct RetentionPass<'a, G: Grid> {
    grid: &'a mut G,
    config: &'a PurgeConfig,
}

impl<'a, G: Grid> RetentionPass<'a, G> {
    pub fn new(grid: &'a mut G, config: &'a PurgeConfig) -> Self {
        Self { grid, config }
    }

    /// Compute the eviction set and issue one fire-and-forget eviction
    /// request per cell in it.
    ///
    /// Never fails: an empty loaded set or empty anchor sets simply yield an
    /// empty plan or evict everything, respectively.
    pub fn run(&mut self) -> EvictionPlan {
        let start = Instant::now();

        let mut snapshot = self.grid.snapshot_loaded_cells();
        if snapshot.is_empty() {
            return EvictionPlan::default();
        }

        let total_loaded = snapshot.len();
        let loaded: HashSet<CellPos> = snapshot.keys().copied().collect();
        let keepalive_cells = self.grid.keepalive_cells();
        let retained = classify_retained(&*self.grid, self.config, &loaded, &keepalive_cells);

        let to_evict: HashSet<CellPos> = loaded
            .into_iter()
            .filter(|cell| !retained.contains(cell))
            .collect();

        for cell in &to_evict {
            if let Some(handle) = snapshot.remove(cell) {
                self.grid.request_evict(handle);
            }
        }

        let plan = EvictionPlan {
            proximity_count: retained.proximity.len(),
            keepalive_count: retained.keepalive.len(),
            origin_count: retained.origin.len(),
            to_evict,
        };

        if self.config.debug && !plan.to_evict.is_empty() {
            info!(
                "Queued {} cells out of {} for eviction in {} in {} ms. ({} p, {} k, {} o)",
                plan.evicted_count(),
                total_loaded,
                self.grid.name(),
                start.elapsed().as_millis(),
                plan.proximity_count,
                plan.keepalive_count,
                plan.origin_count,
            );
        }

        plan
    }
}
