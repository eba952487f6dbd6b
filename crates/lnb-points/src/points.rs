use lnb_core::{ErrorInfo, GeneratingMatrix, LnbError, SearchFamily, SearchResult};
use tracing::trace;

fn points_at_level(level: u32) -> Result<u64, LnbError> {
    1u64.checked_shl(level).ok_or_else(|| {
        LnbError::Dimension(
            ErrorInfo::new("level-out-of-range", "level exceeds the 64-bit index space")
                .with_context("level", level.to_string()),
        )
    })
}

/// Points of coordinate `coord`, optionally truncated to the first `2^level`
/// points of an embedded point set.
pub fn coordinate_points(
    result: &SearchResult,
    coord: usize,
    level: Option<u32>,
) -> Result<Vec<f64>, LnbError> {
    result.check_coordinate(coord)?;
    let nb_points = match level {
        Some(level) => points_at_level(level)?,
        None => result.size().nb_points(),
    };
    trace!(coord, nb_points, ?level, family = %result.family, "reconstructing points");

    match result.family {
        SearchFamily::Ordinary => {
            let gen = result
                .latnet
                .gen
                .as_ref()
                .and_then(|gen| gen.as_ordinary())
                .ok_or_else(|| {
                    LnbError::Dimension(ErrorInfo::new(
                        "generator-shape",
                        "ordinary lattice without an integer generating vector",
                    ))
                })?;
            Ok(lattice_points(gen[coord], nb_points))
        }
        _ => digital_points(result.matrix(coord)?, nb_points, level),
    }
}

/// Rank-1 lattice points `(gen * i / nb_points) mod 1` for `i < nb_points`.
pub fn lattice_points(gen: u64, nb_points: u64) -> Vec<f64> {
    let modulus = u128::from(nb_points);
    let step = u128::from(gen) % modulus.max(1);
    (0..nb_points)
        .map(|i| ((step * u128::from(i)) % modulus) as f64 / nb_points as f64)
        .collect()
}

/// Digital net points of one coordinate.
///
/// Index `i` is expanded into `width` bits (least significant first), mapped
/// through `matrix` over GF(2), and output bit `j < level` contributes
/// `1 << (level - 1 - j)` before division by `nb_points`.
pub fn digital_points(
    matrix: &GeneratingMatrix,
    nb_points: u64,
    level: Option<u32>,
) -> Result<Vec<f64>, LnbError> {
    let width = matrix.num_rows();
    if !matrix.is_square() {
        return Err(LnbError::Dimension(
            ErrorInfo::new("matrix-shape", "generating matrix is not square")
                .with_context("rows", width.to_string())
                .with_context("cols", matrix.num_cols().to_string()),
        ));
    }
    if width >= u64::BITS as usize {
        return Err(LnbError::Dimension(
            ErrorInfo::new("matrix-width", "generating matrix wider than 63 bits")
                .with_context("width", width.to_string()),
        ));
    }
    let level = level.map_or(width, |level| level as usize);
    if level > width {
        return Err(LnbError::Dimension(
            ErrorInfo::new("level-out-of-range", "level exceeds the matrix width")
                .with_context("level", level.to_string())
                .with_context("width", width.to_string()),
        ));
    }

    // Row r as a bit mask over input bits: bit j set when entry (r, j) is odd.
    let masks: Vec<u64> = matrix
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .fold(0u64, |mask, (j, entry)| mask | ((entry & 1) << j))
        })
        .collect();

    let scale = nb_points as f64;
    Ok((0..nb_points)
        .map(|index| {
            let value = masks
                .iter()
                .take(level)
                .enumerate()
                .fold(0u64, |value, (j, mask)| {
                    let bit = u64::from((mask & index).count_ones() & 1);
                    value | (bit << (level - 1 - j))
                });
            value as f64 / scale
        })
        .collect())
}
