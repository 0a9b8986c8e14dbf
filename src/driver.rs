//! Per-tick orchestration across monitored grid instances.

use crate::backup::BackupMonitor;
use crate::config::PurgeConfig;
use crate::core::GridId;
use crate::interface::{BackupStatus, Grid};
use crate::retention::{EvictionPlan, RetentionPass};
use crate::save_state::SaveStateController;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Tick state for one monitored grid, created lazily on first observation.
#[derive(Debug)]
struct GridTickState {
    last_tick: DateTime<Utc>,
    purge_timer: u32,
    save: SaveStateController,
}

impl GridTickState {
    fn new() -> Self {
        Self {
            last_tick: Utc::now(),
            purge_timer: 0,
            save: SaveStateController::new(),
        }
    }
}

/// Drives retention passes and the save-state controller for any number of
/// independent grid instances.
///
/// The host scheduler calls [`on_tick_start`] and [`on_tick_end`] once per
/// grid per tick. Per-grid state is keyed by [`GridId`] only — the driver
/// never holds the grid itself, so a tracked grid's lifetime is unaffected.
/// Hosts signal that an instance is gone with [`remove_grid`].
///
/// [`on_tick_start`]: PurgeDriver::on_tick_start
/// [`on_tick_end`]: PurgeDriver::on_tick_end
/// [`remove_grid`]: PurgeDriver::remove_grid
pub struct PurgeDriver {
    config: PurgeConfig,
    backup: BackupMonitor,
    grids: HashMap<GridId, GridTickState>,
}

impl PurgeDriver {
    pub fn new(config: PurgeConfig) -> Self {
        Self::with_backup_monitor(config, BackupMonitor::disabled())
    }

    /// Build a driver that consults a backup-status signal before touching
    /// save state.
    pub fn with_backup_signal(config: PurgeConfig, signal: Box<dyn BackupStatus>) -> Self {
        Self::with_backup_monitor(config, BackupMonitor::new(signal))
    }

    fn with_backup_monitor(config: PurgeConfig, backup: BackupMonitor) -> Self {
        Self {
            config,
            backup,
            grids: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PurgeConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PurgeConfig {
        &mut self.config
    }

    /// Start-of-tick phase: sample the eviction backlog for save-state
    /// purposes.
    pub fn on_tick_start<G: Grid>(&mut self, grid: &G) {
        let state = self
            .grids
            .entry(grid.id())
            .or_insert_with(GridTickState::new);
        state.save.observe_backlog(grid, &self.config);
    }

    /// End-of-tick phase: run a retention pass when one is due, then apply
    /// the save-state transition.
    ///
    /// Returns the eviction plan when a pass actually ran this tick.
    pub fn on_tick_end<G: Grid>(&mut self, grid: &mut G) -> Option<EvictionPlan> {
        let config = &self.config;
        let state = self
            .grids
            .entry(grid.id())
            .or_insert_with(GridTickState::new);
        state.last_tick = Utc::now();

        let plan = run_scheduled_purge(state, grid, config);

        let backup_running = self.backup.is_backup_running();
        state.save.update_save_state(grid, backup_running, config);

        plan
    }

    /// Drop all tick state for a grid the host no longer runs.
    ///
    /// Returns whether the grid was being tracked.
    pub fn remove_grid(&mut self, id: GridId) -> bool {
        self.grids.remove(&id).is_some()
    }

    /// When the given grid last finished a tick under this driver.
    pub fn last_tick_at(&self, id: GridId) -> Option<DateTime<Utc>> {
        self.grids.get(&id).map(|state| state.last_tick)
    }

    /// Identifiers of every grid currently holding tick state.
    pub fn tracked_grids(&self) -> Vec<GridId> {
        self.grids.keys().copied().collect()
    }
}

fn run_scheduled_purge<G: Grid>(
    state: &mut GridTickState,
    grid: &mut G,
    config: &PurgeConfig,
) -> Option<EvictionPlan> {
    if !config.auto_purge_enabled {
        state.purge_timer = 0;
        return None;
    }

    state.purge_timer += 1;
    if state.purge_timer < config.purge_interval_ticks {
        return None;
    }
    state.purge_timer = 0;

    // Nobody real is watching this grid, so nothing new is being kept
    // loaded; skip the pass.
    let any_real_observer = grid
        .active_observers()
        .iter()
        .any(|observer| !observer.synthetic);
    if !any_real_observer {
        return None;
    }

    Some(RetentionPass::new(grid, config).run())
}
