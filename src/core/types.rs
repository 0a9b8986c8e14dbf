use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate of a single grid cell.
///
/// Identity is by value: two `CellPos` with the same `x` and `z` refer to the
/// same cell. The vertical axis does not exist at this granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub z: i32,
}

impl CellPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell one step north (z + 1).
    pub const fn north(self) -> Self {
        Self::new(self.x, self.z + 1)
    }

    /// Cell one step south (z - 1).
    pub const fn south(self) -> Self {
        Self::new(self.x, self.z - 1)
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Stable identifier for a monitored grid instance, supplied by the host.
///
/// The driver keys its per-grid tick state on this and never holds a
/// reference to the grid itself, so tracking a grid can never extend its
/// lifetime. Hosts must call [`PurgeDriver::remove_grid`] when the instance
/// goes away.
///
/// [`PurgeDriver::remove_grid`]: crate::driver::PurgeDriver::remove_grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridId(pub u64);

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An active observer of a grid, as reported by the host's observer registry.
///
/// Synthetic observers (headless or automation actors) are tracked by the
/// host like any other, but they never anchor cells against eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observer {
    pub cell: CellPos,
    pub synthetic: bool,
}

impl Observer {
    /// A real, anchor-generating observer at the given cell.
    pub const fn at(cell: CellPos) -> Self {
        Self {
            cell,
            synthetic: false,
        }
    }

    /// A synthetic observer; present in the registry but never anchors cells.
    pub const fn synthetic(cell: CellPos) -> Self {
        Self {
            cell,
            synthetic: true,
        }
    }
}

/// A coordinate that justifies keeping a connected region of cells loaded,
/// together with the radius limit of that region.
///
/// A `radius_limit <= 0` means the region is bounded only by the loaded-set
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub cell: CellPos,
    pub radius_limit: i32,
}

impl Anchor {
    pub const fn new(cell: CellPos, radius_limit: i32) -> Self {
        Self { cell, radius_limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cellpos_neighbours() {
        let pos = CellPos::new(3, -2);
        assert_eq!(pos.north(), CellPos::new(3, -1));
        assert_eq!(pos.south(), CellPos::new(3, -3));
    }

    #[test]
    fn test_cellpos_identity_by_value() {
        assert_eq!(CellPos::new(1, 2), CellPos::new(1, 2));
        assert_ne!(CellPos::new(1, 2), CellPos::new(2, 1));
    }

    #[test]
    fn test_observer_constructors() {
        assert!(!Observer::at(CellPos::new(0, 0)).synthetic);
        assert!(Observer::synthetic(CellPos::new(0, 0)).synthetic);
    }
}
