use crate::core::{CellPos, GridId, Observer, Result};
use std::collections::{HashMap, HashSet};

/// Storage facet of a grid: the loaded-cell working set and the eviction
/// queue.
///
/// The core only ever reads snapshots and *requests* eviction; the storage
/// owns the working set and decides when a queued cell is physically
/// released.
pub trait GridStorage {
    /// Opaque handle to a resident cell, passed back on eviction.
    type Handle;

    /// Snapshot of every currently resident cell, keyed by coordinate.
    fn snapshot_loaded_cells(&self) -> HashMap<CellPos, Self::Handle>;

    /// Number of cells already queued for eviction but not yet released.
    fn pending_eviction_backlog(&self) -> usize;

    /// Queue one cell for eviction. Fire-and-forget: the storage decides
    /// timing and ordering of the actual unload.
    fn request_evict(&mut self, handle: Self::Handle);
}

/// Identity and static configuration of a grid instance.
pub trait GridMeta {
    /// Stable identifier for this instance; the driver keys tick state on it.
    fn id(&self) -> GridId;

    /// Human-readable label used in log lines.
    fn name(&self) -> String {
        format!("grid {}", self.id())
    }

    /// The grid's designated origin cell, if this grid is configured to keep
    /// its origin region resident. `None` disables the origin anchor.
    fn origin_cell(&self) -> Option<CellPos>;
}

/// Registry of observers currently attached to a grid.
pub trait ObserverRegistry {
    /// All active observers, synthetic ones included.
    fn active_observers(&self) -> Vec<Observer>;

    /// The host's configured view distance, in cells. Composed into the
    /// proximity anchor radius. Hosts without the concept return 0.
    fn view_distance(&self) -> i32;
}

/// Registry of externally requested persistent loads ("tickets").
pub trait KeepAliveRegistry {
    /// Coordinates with an active keep-alive request.
    fn keepalive_cells(&self) -> HashSet<CellPos>;
}

/// The grid's global persistence ("save") flag.
pub trait PersistenceControl {
    /// Whether saving is currently disabled, by this crate or externally.
    fn is_saving_disabled(&self) -> bool;

    /// Enable or disable saving.
    fn set_saving_disabled(&mut self, disabled: bool);
}

/// Best-effort signal that an external backup is in progress.
///
/// Queried through [`BackupMonitor`], which latches the first error and
/// treats the signal as permanently absent afterwards.
///
/// [`BackupMonitor`]: crate::backup::BackupMonitor
pub trait BackupStatus {
    fn is_backup_running(&self) -> Result<bool>;
}

/// Everything the purge driver needs from one grid instance.
///
/// Blanket-implemented for any type providing the individual facets, so a
/// host wraps its grid once and gets the whole surface.
pub trait Grid:
    GridStorage + GridMeta + ObserverRegistry + KeepAliveRegistry + PersistenceControl
{
}

impl<T> Grid for T where
    T: GridStorage + GridMeta + ObserverRegistry + KeepAliveRegistry + PersistenceControl
{
}
