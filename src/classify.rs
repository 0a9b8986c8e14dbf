//! Anchor derivation and per-category retained-cell classification.

use crate::config::PurgeConfig;
use crate::core::{Anchor, CellPos};
use crate::interface::{GridMeta, ObserverRegistry};
use crate::region::find_region;
use std::collections::HashSet;

/// The cells each anchor category keeps resident this pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RetainedCells {
    /// Regions around active non-synthetic observers.
    pub proximity: HashSet<CellPos>,
    /// Regions around keep-alive (ticket) cells.
    pub keepalive: HashSet<CellPos>,
    /// Region around the grid origin, when origin retention is configured.
    pub origin: HashSet<CellPos>,
}

impl RetainedCells {
    /// Whether a cell is retained by any category.
    pub fn contains(&self, cell: &CellPos) -> bool {
        self.proximity.contains(cell) || self.keepalive.contains(cell) || self.origin.contains(cell)
    }
}

/// Classify the loaded set into per-category retained cells.
///
/// Each category is the union of [`find_region`] results over that
/// category's anchors. An empty loaded set short-circuits to empty without
/// running any fill.
pub fn classify_retained<G>(
    grid: &G,
    config: &PurgeConfig,
    loaded: &HashSet<CellPos>,
    keepalive_cells: &HashSet<CellPos>,
) -> RetainedCells
where
    G: GridMeta + ObserverRegistry,
{
    if loaded.is_empty() {
        return RetainedCells::default();
    }

    RetainedCells {
        proximity: fill_category(loaded, proximity_anchors(grid, config)),
        keepalive: fill_category(
            loaded,
            keepalive_cells
                .iter()
                .map(|&cell| Anchor::new(cell, config.keepalive_ignore_radius)),
        ),
        origin: fill_category(loaded, origin_anchor(grid, config)),
    }
}

fn fill_category(
    loaded: &HashSet<CellPos>,
    anchors: impl IntoIterator<Item = Anchor>,
) -> HashSet<CellPos> {
    let mut retained = HashSet::new();
    for anchor in anchors {
        retained.extend(find_region(loaded, anchor.cell, anchor.radius_limit));
    }
    retained
}

/// One anchor per active non-synthetic observer. The radius composes the
/// configured ignore radius with the host's live view distance.
fn proximity_anchors<G: ObserverRegistry>(grid: &G, config: &PurgeConfig) -> Vec<Anchor> {
    let radius = config.proximity_ignore_radius + grid.view_distance();
    grid.active_observers()
        .into_iter()
        .filter(|observer| !observer.synthetic)
        .map(|observer| Anchor::new(observer.cell, radius))
        .collect()
}

/// Zero or one anchor at the grid's designated origin cell.
fn origin_anchor<G: GridMeta>(grid: &G, config: &PurgeConfig) -> Option<Anchor> {
    grid.origin_cell()
        .map(|cell| Anchor::new(cell, config.origin_ignore_radius))
}
