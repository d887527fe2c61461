//! Derived read-only terrain queries.
//!
//! Everything here is a single scan over the heights or over a fresh
//! submersion mask. Outputs are plain numbers with documented sign
//! conventions; turning them into "above"/"below" or "gain"/"lose" wording
//! is the caller's job.

use crate::flood::submersion_mask;
use crate::grid::{GridLocation, Gridmap};
use crate::terrain::Terrain;

/// Lowest and highest elevation on the terrain, as (min, max).
pub fn elevation_extrema(terrain: &Terrain) -> (f64, f64) {
    let mut min = terrain.height_at(GridLocation::new(0, 0));
    let mut max = min;

    for (_, _, &height) in terrain.heights().iter() {
        if height > max {
            max = height;
        } else if height < min {
            min = height;
        }
    }

    (min, max)
}

/// Whether `cell` is underwater at `water_height`.
pub fn is_flooded(terrain: &Terrain, water_height: f64, cell: GridLocation) -> bool {
    *submersion_mask(terrain, water_height).get(cell.row, cell.col)
}

/// How far `cell` sits above the water line. Negative means the cell is
/// below it.
pub fn height_above_water(terrain: &Terrain, water_height: f64, cell: GridLocation) -> f64 {
    terrain.height_at(cell) - water_height
}

/// Number of dry cells in a submersion mask.
pub fn dry_cells(mask: &Gridmap<bool>) -> usize {
    mask.iter().filter(|(_, _, &flooded)| !flooded).count()
}

/// Number of cells still above water at `water_height`.
pub fn total_visible_land(terrain: &Terrain, water_height: f64) -> usize {
    dry_cells(&submersion_mask(terrain, water_height))
}

/// Change in visible land when the water moves from `water_height` to
/// `new_height`. Positive means land will be lost.
pub fn land_delta(terrain: &Terrain, water_height: f64, new_height: f64) -> i64 {
    total_visible_land(terrain, water_height) as i64
        - total_visible_land(terrain, new_height) as i64
}
