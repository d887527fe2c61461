//! Island counting over the flooded terrain.
//!
//! An island is a maximal 8-connected group of dry cells: two land masses
//! touching only at a corner still count as one island, unlike the flood
//! spread in [`crate::flood`], which is strictly 4-directional.

use crate::flood::submersion_mask;
use crate::terrain::Terrain;

/// Array-backed disjoint-set with path compression and union by size.
///
/// Built fresh for each connectivity query over the dense
/// `row * cols + col` index space and discarded afterwards.
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            size: vec![1; count],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let a_root = self.find(a);
        let b_root = self.find(b);
        if a_root == b_root {
            return;
        }
        // Smaller tree hangs under the larger one
        if self.size[a_root] < self.size[b_root] {
            self.parent[a_root] = b_root;
            self.size[b_root] += self.size[a_root];
        } else {
            self.parent[b_root] = a_root;
            self.size[a_root] += self.size[b_root];
        }
    }
}

/// Count the islands left dry at `water_height`.
///
/// Floods the terrain, unions every dry cell with each of its dry
/// 8-neighbors, then counts distinct roots among dry cells. Flooded cells
/// contribute nothing; a fully submerged grid has zero islands. The choice
/// of root within a set depends on union order, but the number of sets does
/// not, so the count is iteration-order invariant.
pub fn island_count(terrain: &Terrain, water_height: f64) -> usize {
    let mask = submersion_mask(terrain, water_height);
    let (rows, cols) = (terrain.rows(), terrain.cols());
    let mut sets = UnionFind::new(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            if *mask.get(row, col) {
                continue;
            }
            for neighbor in mask.neighbors8(row, col) {
                if !*mask.get(neighbor.row, neighbor.col) {
                    sets.union(row * cols + col, neighbor.row * cols + neighbor.col);
                }
            }
        }
    }

    let mut seen = vec![false; rows * cols];
    let mut count = 0;
    for row in 0..rows {
        for col in 0..cols {
            if *mask.get(row, col) {
                continue;
            }
            let root = sets.find(row * cols + col);
            if !seen[root] {
                seen[root] = true;
                count += 1;
            }
        }
    }
    count
}
