//! Generating matrices dumped by the executable into its side file.
//!
//! A block starts at a line containing `//dim`. Each following line is one
//! row of space-separated integers ending in a separator token that is
//! dropped. A blank line after at least one row closes the block. Rows that
//! fail to parse are skipped and reported in [`MatrixScan::skipped`].

use lnb_core::GeneratingMatrix;
use tracing::debug;

/// Marker opening a matrix block.
pub const BLOCK_MARKER: &str = "//dim";

/// Outcome of reading one row line inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// A parsed matrix row.
    Row(Vec<u64>),
    /// The line was not a row and is left out of the matrix.
    Skipped(String),
}

/// Row line that was left out of its matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// One-based line number in the side file.
    pub line_number: usize,
    /// Raw text of the line.
    pub text: String,
    /// Why the line was not a row.
    pub reason: String,
}

/// Matrices extracted from a side file together with the skipped rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixScan {
    /// Closed matrix blocks in file order.
    pub matrices: Vec<GeneratingMatrix>,
    /// Rows skipped while reading blocks.
    pub skipped: Vec<SkippedRow>,
    /// Rows of a block still open at the end of the file.
    pub unterminated_rows: usize,
}

/// Parses a row line: fields split on single spaces, last field dropped.
pub fn parse_row(line: &str) -> RowOutcome {
    let mut fields: Vec<&str> = line.split(' ').collect();
    fields.pop();
    if fields.is_empty() {
        return RowOutcome::Skipped("no fields before the trailing separator".to_string());
    }
    let mut row = Vec::with_capacity(fields.len());
    for field in fields {
        match field.trim().parse::<u64>() {
            Ok(value) => row.push(value),
            Err(err) => return RowOutcome::Skipped(format!("field `{field}`: {err}")),
        }
    }
    RowOutcome::Row(row)
}

fn is_blank(line: &str) -> bool {
    line.trim_end_matches('\r').is_empty()
}

/// Scans a side file for matrix blocks.
pub fn scan_matrices(text: &str) -> MatrixScan {
    let mut scan = MatrixScan::default();
    let mut open: Option<Vec<Vec<u64>>> = None;

    for (idx, line) in text.split('\n').enumerate() {
        if line.contains(BLOCK_MARKER) {
            if let Some(rows) = open.take().filter(|rows| !rows.is_empty()) {
                debug!(rows = rows.len(), line = idx + 1, "matrix block replaced before it was closed");
            }
            open = Some(Vec::new());
            continue;
        }
        let Some(rows) = open.as_mut() else {
            continue;
        };
        if is_blank(line) {
            if !rows.is_empty() {
                scan.matrices.push(GeneratingMatrix::new(std::mem::take(rows)));
                open = None;
            }
            continue;
        }
        match parse_row(line) {
            RowOutcome::Row(row) => rows.push(row),
            RowOutcome::Skipped(reason) => {
                debug!(line = idx + 1, %reason, "skipping matrix row");
                scan.skipped.push(SkippedRow {
                    line_number: idx + 1,
                    text: line.to_string(),
                    reason,
                });
            }
        }
    }

    scan.unterminated_rows = open.map(|rows| rows.len()).unwrap_or(0);
    if scan.unterminated_rows > 0 {
        debug!(rows = scan.unterminated_rows, "side file ends inside a matrix block");
    }
    scan
}

/// Closed matrix blocks of a side file, indexed by coordinate.
pub fn extract_matrices(text: &str) -> Vec<GeneratingMatrix> {
    scan_matrices(text).matrices
}
