//! Flood propagation: which cells are underwater at a given water height.
//!
//! Water spreads from the fixed sources through 4-connected cells whose
//! elevation is at or below the query height. Sources themselves flood
//! unconditionally: a source emits water even when it sits above the current
//! water line, so at extreme low heights the mask degenerates to just the
//! source cells.

use std::collections::VecDeque;

use crate::grid::Gridmap;
use crate::terrain::Terrain;

/// Compute the submersion mask at `water_height`, where flooded cells are
/// true.
///
/// Breadth-first spread from all sources at once: a cell floods iff it is
/// in-bounds, not yet flooded, and its elevation is <= `water_height`.
/// Diagonal neighbors do not propagate water. The result is the unique
/// fixed point of that rule, so it does not depend on traversal order, and
/// the mask is rebuilt from scratch on every call.
pub fn submersion_mask(terrain: &Terrain, water_height: f64) -> Gridmap<bool> {
    let mut mask = Gridmap::new_with(terrain.rows(), terrain.cols(), false);
    let mut queue = VecDeque::new();

    for &source in terrain.sources() {
        if !*mask.get(source.row, source.col) {
            mask.set(source.row, source.col, true);
            queue.push_back(source);
        }
    }

    // Each cell is enqueued at most once, so this terminates
    while let Some(cell) = queue.pop_front() {
        for next in mask.neighbors4(cell.row, cell.col) {
            if !*mask.get(next.row, next.col) && terrain.height_at(next) <= water_height {
                mask.set(next.row, next.col, true);
                queue.push_back(next);
            }
        }
    }

    mask
}
