use serde::{Deserialize, Serialize};

/// Row-major generating matrix of one coordinate, as dumped in the side file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratingMatrix {
    rows: Vec<Vec<u64>>,
}

impl GeneratingMatrix {
    /// Creates a matrix from its rows.
    pub fn new(rows: Vec<Vec<u64>>) -> Self {
        Self { rows }
    }

    /// Matrix rows in order.
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Number of rows; the width of the point set for square matrices.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn num_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns `true` when every row is as long as the matrix is tall.
    pub fn is_square(&self) -> bool {
        let side = self.rows.len();
        self.rows.iter().all(|row| row.len() == side)
    }
}

impl From<Vec<Vec<u64>>> for GeneratingMatrix {
    fn from(rows: Vec<Vec<u64>>) -> Self {
        Self::new(rows)
    }
}
