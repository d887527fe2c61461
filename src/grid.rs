/// A (row, column) coordinate identifying one grid cell.
///
/// Locations compare, hash, and order by value: two locations with the same
/// coordinates are the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct GridLocation {
    pub row: usize,
    pub col: usize,
}

impl GridLocation {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular 2D grid stored row-major.
///
/// Unlike a wrapping world map, this grid is a bounded rectangle: neighbor
/// helpers return only in-bounds cells and indexing outside the rectangle
/// panics.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gridmap<T> {
    pub rows: usize,
    pub cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Gridmap<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Clone> Gridmap<T> {
    pub fn new_with(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Build a grid from nested rows. Returns None if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != col_count) {
            return None;
        }
        Some(Self {
            rows: row_count,
            cols: col_count,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Get the index into the data array. Out-of-bounds coordinates are a
    /// caller error.
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.index(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.index(row, col);
        &mut self.data[idx]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Fill the entire grid with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the 4-connected neighbors (up, down, left, right).
    /// Returns up to 4 in-bounds cells; edges and corners get fewer.
    pub fn neighbors4(&self, row: usize, col: usize) -> Vec<GridLocation> {
        let mut result = Vec::with_capacity(4);

        if row > 0 {
            result.push(GridLocation::new(row - 1, col));
        }
        if row + 1 < self.rows {
            result.push(GridLocation::new(row + 1, col));
        }
        if col > 0 {
            result.push(GridLocation::new(row, col - 1));
        }
        if col + 1 < self.cols {
            result.push(GridLocation::new(row, col + 1));
        }

        result
    }

    /// Get the 8-connected neighbors (orthogonal + diagonal).
    /// Returns up to 8 in-bounds cells.
    pub fn neighbors8(&self, row: usize, col: usize) -> Vec<GridLocation> {
        let mut result = Vec::with_capacity(8);

        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                // Skip self
                if dr == 0 && dc == 0 {
                    continue;
                }

                let nr = row as i64 + dr;
                let nc = col as i64 + dc;
                if nr >= 0 && nr < self.rows as i64 && nc >= 0 && nc < self.cols as i64 {
                    result.push(GridLocation::new(nr as usize, nc as usize));
                }
            }
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let row = idx / self.cols;
            let col = idx % self.cols;
            (row, col, val)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_location_value_semantics() {
        let a = GridLocation::new(2, 3);
        let b = GridLocation::new(2, 3);
        assert_eq!(a, b);

        let mut seen = HashSet::new();
        seen.insert(a);
        assert!(seen.contains(&b));
        assert!(!seen.contains(&GridLocation::new(3, 2)));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Gridmap::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_none());

        let grid = Gridmap::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.cols, 2);
        assert_eq!(*grid.get(1, 0), 3.0);
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Gridmap::new_with(3, 3, 0u8);

        // Center cell sees everything
        assert_eq!(grid.neighbors4(1, 1).len(), 4);
        assert_eq!(grid.neighbors8(1, 1).len(), 8);

        // Corner is clipped
        assert_eq!(grid.neighbors4(0, 0).len(), 2);
        assert_eq!(grid.neighbors8(0, 0).len(), 3);

        // Edge midpoint
        assert_eq!(grid.neighbors4(0, 1).len(), 3);
        assert_eq!(grid.neighbors8(0, 1).len(), 5);
    }

    #[test]
    fn test_neighbors4_excludes_diagonals() {
        let grid = Gridmap::new_with(3, 3, 0u8);
        let neighbors = grid.neighbors4(1, 1);
        assert!(!neighbors.contains(&GridLocation::new(0, 0)));
        assert!(neighbors.contains(&GridLocation::new(0, 1)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_get_panics() {
        let grid = Gridmap::new_with(2, 2, 0u8);
        grid.get(2, 0);
    }

    #[test]
    fn test_iter_covers_all_cells_in_order() {
        let grid = Gridmap::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let cells: Vec<_> = grid.iter().map(|(r, c, &v)| (r, c, v)).collect();
        assert_eq!(cells, vec![(0, 0, 1), (0, 1, 2), (1, 0, 3), (1, 1, 4)]);
    }
}
