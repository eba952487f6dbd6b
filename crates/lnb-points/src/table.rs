use lnb_core::{LnbError, SearchResult};

use crate::points::coordinate_points;

/// Every point of the result as a row, one column per coordinate.
pub fn point_table(result: &SearchResult, level: Option<u32>) -> Result<Vec<Vec<f64>>, LnbError> {
    let columns = (0..result.dimension())
        .map(|coord| coordinate_points(result, coord, level))
        .collect::<Result<Vec<_>, _>>()?;
    let nb_points = columns.first().map_or(0, Vec::len);
    Ok((0..nb_points)
        .map(|index| columns.iter().map(|column| column[index]).collect())
        .collect())
}
