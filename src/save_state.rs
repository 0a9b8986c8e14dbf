//! Save-state hysteresis controller.
//!
//! Saving is disabled while the pending-eviction backlog is small and
//! re-enabled once it grows past a configured high-water mark. Two distinct
//! thresholds keep the flag from thrashing when the backlog oscillates near
//! a single boundary.

use crate::config::PurgeConfig;
use crate::interface::{GridMeta, GridStorage, PersistenceControl};
use log::info;

/// The grid storage releases at most this many queued cells per tick.
/// Disabling save while more than a batch is still queued would be
/// premature, so the disable latch only arms below this mark.
pub const EVICTION_BATCH_LOW_WATER: usize = 100;

/// Per-grid two-state machine over the grid's persistence flag.
///
/// Driven in two phases each tick: [`observe_backlog`] at tick start arms
/// the disable latch, [`update_save_state`] at tick end applies at most one
/// transition.
///
/// [`observe_backlog`]: SaveStateController::observe_backlog
/// [`update_save_state`]: SaveStateController::update_save_state
#[derive(Debug, Default)]
pub struct SaveStateController {
    should_disable: bool,
}

impl SaveStateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start-of-tick phase: sample the backlog and arm the disable latch.
    ///
    /// Skipped when auto-save handling is off or the grid is already
    /// save-disabled (possibly by an external party we must not fight).
    pub fn observe_backlog<G>(&mut self, grid: &G, config: &PurgeConfig)
    where
        G: GridStorage + PersistenceControl,
    {
        if !config.auto_save_handling || grid.is_saving_disabled() {
            return;
        }

        self.should_disable = grid.pending_eviction_backlog() < EVICTION_BATCH_LOW_WATER;
    }

    /// End-of-tick phase: apply at most one save-state transition.
    ///
    /// While a backup is in progress no transition happens at all, whatever
    /// the backlog looks like. Otherwise saving is disabled iff the latch
    /// armed at tick start, and re-enabled iff the backlog has reached the
    /// configured high-water mark.
    pub fn update_save_state<G>(&mut self, grid: &mut G, backup_running: bool, config: &PurgeConfig)
    where
        G: GridStorage + GridMeta + PersistenceControl,
    {
        if !config.auto_save_handling || backup_running {
            return;
        }

        if !grid.is_saving_disabled() && self.should_disable {
            grid.set_saving_disabled(true);
            if config.debug {
                info!("Disabled saving for {}", grid.name());
            }
        } else if grid.is_saving_disabled()
            && grid.pending_eviction_backlog() >= config.save_high_water_mark
        {
            grid.set_saving_disabled(false);
            if config.debug {
                info!("Enabled saving for {}", grid.name());
            }
        }
    }
}
