#![allow(dead_code)]

use gridpurge::{
    CellPos, GridId, GridMeta, GridStorage, KeepAliveRegistry, Observer, ObserverRegistry,
    PersistenceControl,
};
use std::collections::{HashMap, HashSet};

/// In-memory grid standing in for the host's world storage.
///
/// The cell handle is the coordinate itself, which keeps eviction requests
/// easy to assert on.
pub struct TestGrid {
    pub id: GridId,
    pub loaded: HashMap<CellPos, CellPos>,
    pub backlog: usize,
    pub observers: Vec<Observer>,
    pub view_distance: i32,
    pub keepalive: HashSet<CellPos>,
    pub origin: Option<CellPos>,
    pub saving_disabled: bool,
    pub evicted: Vec<CellPos>,
}

impl TestGrid {
    pub fn new() -> Self {
        Self {
            id: GridId(1),
            loaded: HashMap::new(),
            backlog: 0,
            observers: Vec::new(),
            view_distance: 0,
            keepalive: HashSet::new(),
            origin: None,
            saving_disabled: false,
            evicted: Vec::new(),
        }
    }

    pub fn load(&mut self, cell: CellPos) {
        self.loaded.insert(cell, cell);
    }

    /// Load every cell in the inclusive rectangle between the two corners.
    pub fn load_rectangle(&mut self, corner1: CellPos, corner2: CellPos) {
        for x in corner1.x.min(corner2.x)..=corner1.x.max(corner2.x) {
            for z in corner1.z.min(corner2.z)..=corner1.z.max(corner2.z) {
                self.load(CellPos::new(x, z));
            }
        }
    }

    pub fn loaded_set(&self) -> HashSet<CellPos> {
        self.loaded.keys().copied().collect()
    }

    pub fn evicted_set(&self) -> HashSet<CellPos> {
        self.evicted.iter().copied().collect()
    }
}

impl Default for TestGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GridStorage for TestGrid {
    type Handle = CellPos;

    fn snapshot_loaded_cells(&self) -> HashMap<CellPos, CellPos> {
        self.loaded.clone()
    }

    fn pending_eviction_backlog(&self) -> usize {
        self.backlog
    }

    fn request_evict(&mut self, handle: CellPos) {
        self.evicted.push(handle);
    }
}

impl GridMeta for TestGrid {
    fn id(&self) -> GridId {
        self.id
    }

    fn origin_cell(&self) -> Option<CellPos> {
        self.origin
    }
}

impl ObserverRegistry for TestGrid {
    fn active_observers(&self) -> Vec<Observer> {
        self.observers.clone()
    }

    fn view_distance(&self) -> i32 {
        self.view_distance
    }
}

impl KeepAliveRegistry for TestGrid {
    fn keepalive_cells(&self) -> HashSet<CellPos> {
        self.keepalive.clone()
    }
}

impl PersistenceControl for TestGrid {
    fn is_saving_disabled(&self) -> bool {
        self.saving_disabled
    }

    fn set_saving_disabled(&mut self, disabled: bool) {
        self.saving_disabled = disabled;
    }
}
