// ============================================================================
// gridpurge
// ============================================================================
//
//! Connectivity-aware working-set retention for spatially indexed grids.
//!
//! A host keeps loading cells (the source system calls them chunks) as
//! entities move around and keep-alive requests come in, but nothing releases
//! them again. `gridpurge` decides, once per configurable interval, exactly
//! which loaded cells are safe to evict: every cell that is *not* reachable
//! through loaded neighbours from any anchor — an observer's position, a
//! keep-alive cell, or the grid origin — within that anchor category's
//! radius. Evicting only isolated cells, never holes inside a live region,
//! keeps cross-cell machinery intact and avoids load spikes from reloading
//! neighbours.
//!
//! A second, independent controller toggles the grid's global save flag with
//! hysteresis based on the pending-eviction backlog, so bursts of queued
//! evictions do not thrash the persistence subsystem.
//!
//! The host supplies its grid through the traits in [`interface`]; the
//! [`PurgeDriver`] holds all per-grid tick state, keyed by [`GridId`].
//!
//! # Example
//!
//! ```
//! use gridpurge::{
//!     CellPos, GridId, GridMeta, GridStorage, KeepAliveRegistry, Observer,
//!     ObserverRegistry, PersistenceControl, PurgeConfig, PurgeDriver,
//! };
//! use std::collections::{HashMap, HashSet};
//!
//! struct World {
//!     loaded: HashMap<CellPos, u64>,
//!     evicted: Vec<u64>,
//!     observers: Vec<Observer>,
//!     saving_disabled: bool,
//! }
//!
//! impl GridStorage for World {
//!     type Handle = u64;
//!     fn snapshot_loaded_cells(&self) -> HashMap<CellPos, u64> {
//!         self.loaded.clone()
//!     }
//!     fn pending_eviction_backlog(&self) -> usize {
//!         self.evicted.len()
//!     }
//!     fn request_evict(&mut self, handle: u64) {
//!         self.evicted.push(handle);
//!     }
//! }
//!
//! impl GridMeta for World {
//!     fn id(&self) -> GridId {
//!         GridId(0)
//!     }
//!     fn origin_cell(&self) -> Option<CellPos> {
//!         None
//!     }
//! }
//!
//! impl ObserverRegistry for World {
//!     fn active_observers(&self) -> Vec<Observer> {
//!         self.observers.clone()
//!     }
//!     fn view_distance(&self) -> i32 {
//!         2
//!     }
//! }
//!
//! impl KeepAliveRegistry for World {
//!     fn keepalive_cells(&self) -> HashSet<CellPos> {
//!         HashSet::new()
//!     }
//! }
//!
//! impl PersistenceControl for World {
//!     fn is_saving_disabled(&self) -> bool {
//!         self.saving_disabled
//!     }
//!     fn set_saving_disabled(&mut self, disabled: bool) {
//!         self.saving_disabled = disabled;
//!     }
//! }
//!
//! let mut world = World {
//!     loaded: (0..4).map(|x| (CellPos::new(x, 0), x as u64)).collect(),
//!     evicted: Vec::new(),
//!     observers: vec![Observer::at(CellPos::new(0, 0))],
//!     saving_disabled: false,
//! };
//! // One cell far away from the observer's connected region.
//! world.loaded.insert(CellPos::new(100, 100), 999);
//!
//! let mut driver = PurgeDriver::new(PurgeConfig::new().purge_interval_ticks(1));
//!
//! driver.on_tick_start(&world);
//! let plan = driver.on_tick_end(&mut world).expect("pass is due this tick");
//!
//! // Only the isolated cell was queued for eviction.
//! assert_eq!(plan.evicted_count(), 1);
//! assert_eq!(world.evicted, vec![999]);
//! ```

pub mod backup;
pub mod classify;
pub mod config;
pub mod core;
pub mod driver;
pub mod interface;
pub mod region;
pub mod retention;
pub mod save_state;

// Re-export the main types for convenience
pub use crate::backup::BackupMonitor;
pub use crate::classify::{RetainedCells, classify_retained};
pub use crate::config::{PurgeConfig, Setting, SettingUpdate, apply_setting};
pub use crate::core::{Anchor, CellPos, GridId, Observer, PurgeError, Result};
pub use crate::driver::PurgeDriver;
pub use crate::interface::{
    BackupStatus, Grid, GridMeta, GridStorage, KeepAliveRegistry, ObserverRegistry,
    PersistenceControl,
};
pub use crate::region::find_region;
pub use crate::retention::{EvictionPlan, RetentionPass};
pub use crate::save_state::{EVICTION_BATCH_LOW_WATER, SaveStateController};
