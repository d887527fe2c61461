//! Terrain model: an immutable elevation grid plus fixed water sources.
//!
//! A `Terrain` is validated once at construction and read-only afterwards.
//! Every downstream query (flooding, island counting, metrics) assumes a
//! rectangular grid with at least one cell and at least one in-bounds
//! source, so malformed input is rejected here rather than checked again in
//! the algorithms.

use crate::grid::{GridLocation, Gridmap};

/// Errors rejected at terrain construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainError {
    /// The height grid has no cells
    EmptyGrid,
    /// A row's length differs from the first row's
    RaggedRows { row: usize, expected: usize, found: usize },
    /// The source list is empty
    NoSources,
    /// A source lies outside the grid
    SourceOutOfBounds(GridLocation),
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::EmptyGrid => write!(f, "terrain grid has no cells"),
            TerrainError::RaggedRows { row, expected, found } => write!(
                f,
                "terrain row {} has {} cells, expected {}",
                row, found, expected
            ),
            TerrainError::NoSources => write!(f, "terrain has no water sources"),
            TerrainError::SourceOutOfBounds(loc) => write!(
                f,
                "water source at ({}, {}) is outside the grid",
                loc.row, loc.col
            ),
        }
    }
}

impl std::error::Error for TerrainError {}

/// An elevation grid with a fixed set of water-source cells.
///
/// Heights and sources never change after construction; all queries are pure
/// functions of this data plus a water height supplied per call.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Terrain {
    heights: Gridmap<f64>,
    sources: Vec<GridLocation>,
}

impl Terrain {
    /// Create a terrain from an already-dense height grid.
    pub fn new(heights: Gridmap<f64>, sources: Vec<GridLocation>) -> Result<Self, TerrainError> {
        if heights.rows == 0 || heights.cols == 0 {
            return Err(TerrainError::EmptyGrid);
        }
        if sources.is_empty() {
            return Err(TerrainError::NoSources);
        }
        for &source in &sources {
            if !heights.in_bounds(source.row, source.col) {
                return Err(TerrainError::SourceOutOfBounds(source));
            }
        }
        Ok(Self { heights, sources })
    }

    /// Create a terrain from caller-shaped nested rows, validating
    /// rectangularity along the way.
    pub fn from_rows(
        rows: Vec<Vec<f64>>,
        sources: Vec<GridLocation>,
    ) -> Result<Self, TerrainError> {
        let expected = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(TerrainError::RaggedRows {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
        }
        // Rows are rectangular here, so from_rows cannot fail
        let heights = Gridmap::from_rows(rows).ok_or(TerrainError::EmptyGrid)?;
        Self::new(heights, sources)
    }

    pub fn rows(&self) -> usize {
        self.heights.rows
    }

    pub fn cols(&self) -> usize {
        self.heights.cols
    }

    /// Elevation of a cell. Out-of-bounds cells are a caller error and panic.
    pub fn height_at(&self, cell: GridLocation) -> f64 {
        *self.heights.get(cell.row, cell.col)
    }

    pub fn heights(&self) -> &Gridmap<f64> {
        &self.heights
    }

    pub fn sources(&self) -> &[GridLocation] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terrain() {
        let terrain = Terrain::from_rows(
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            vec![GridLocation::new(0, 0)],
        )
        .unwrap();

        assert_eq!(terrain.rows(), 2);
        assert_eq!(terrain.cols(), 3);
        assert_eq!(terrain.height_at(GridLocation::new(1, 2)), 6.0);
        assert_eq!(terrain.sources(), &[GridLocation::new(0, 0)]);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Terrain::from_rows(
            vec![vec![1.0, 2.0], vec![3.0]],
            vec![GridLocation::new(0, 0)],
        )
        .unwrap_err();

        assert_eq!(
            err,
            TerrainError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = Terrain::from_rows(vec![], vec![GridLocation::new(0, 0)]).unwrap_err();
        assert_eq!(err, TerrainError::EmptyGrid);

        let err = Terrain::from_rows(vec![vec![]], vec![GridLocation::new(0, 0)]).unwrap_err();
        assert_eq!(err, TerrainError::EmptyGrid);
    }

    #[test]
    fn test_rejects_missing_or_stray_sources() {
        let rows = vec![vec![0.0, 0.0], vec![0.0, 0.0]];

        let err = Terrain::from_rows(rows.clone(), vec![]).unwrap_err();
        assert_eq!(err, TerrainError::NoSources);

        let stray = GridLocation::new(2, 0);
        let err = Terrain::from_rows(rows, vec![GridLocation::new(0, 0), stray]).unwrap_err();
        assert_eq!(err, TerrainError::SourceOutOfBounds(stray));
    }
}
