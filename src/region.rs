//! Bounded flood fill over loaded cell coordinates.

use crate::core::CellPos;
use std::collections::{HashSet, VecDeque};

/// Scan-line flood fill: the set of loaded cells reachable from `seed`
/// through orthogonally adjacent loaded cells, without leaving the
/// per-axis radius around the seed.
///
/// Returns the empty set when `seed` is not loaded. A `radius_limit <= 0`
/// disables the radius check entirely, leaving only the loaded-set boundary
/// to stop the fill. Otherwise a cell is admitted only while
/// `|x - seed.x| <= radius_limit` and `|z - seed.z| <= radius_limit`, always
/// measured from the original seed. Cells touching only at a corner do not
/// connect.
///
/// Pure function over its three inputs; terminates because the region only
/// grows, coordinates already in the region are never reprocessed, and the
/// loaded set is finite.
pub fn find_region(loaded: &HashSet<CellPos>, seed: CellPos, radius_limit: i32) -> HashSet<CellPos> {
    let mut region = HashSet::new();

    if !loaded.contains(&seed) {
        return region;
    }

    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(cell) = queue.pop_front() {
        if region.contains(&cell) {
            continue;
        }

        // Extend the horizontal span as far as loaded cells within the
        // x-radius allow.
        let mut west = cell.x;
        while loaded.contains(&CellPos::new(west - 1, cell.z))
            && within_radius(west - 1, seed.x, radius_limit)
        {
            west -= 1;
        }

        let mut east = cell.x;
        while loaded.contains(&CellPos::new(east + 1, cell.z))
            && within_radius(east + 1, seed.x, radius_limit)
        {
            east += 1;
        }

        for x in west..=east {
            let span_cell = CellPos::new(x, cell.z);
            region.insert(span_cell);

            let north = span_cell.north();
            if loaded.contains(&north) && within_radius(north.z, seed.z, radius_limit) {
                queue.push_back(north);
            }

            let south = span_cell.south();
            if loaded.contains(&south) && within_radius(south.z, seed.z, radius_limit) {
                queue.push_back(south);
            }
        }
    }

    region
}

fn within_radius(candidate: i32, seed: i32, radius_limit: i32) -> bool {
    radius_limit <= 0 || (candidate - seed).abs() <= radius_limit
}
