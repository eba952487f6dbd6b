//! Grammars of the three digital net families.

use lnb_core::{
    ConstructionKind, ErrorInfo, GenParam, GeneratingMatrix, LatNet, LnbError, SearchFamily,
    SearchResult, SizeParam,
};
use tracing::debug;

use crate::matrices::{extract_matrices, BLOCK_MARKER};
use crate::scan::{
    elapsed_seconds, last_line_index, last_merit, line_after, parse_integer_row,
};

/// Marker preceding the Sobol direction numbers.
pub const DIRECTION_NUMBERS_MARKER: &str = "Direction numbers";
/// Marker preceding the modulus of a polynomial net.
pub const MODULUS_MARKER: &str = "Modulus";
/// Marker preceding the generating vector of a polynomial net.
pub const GENERATING_VECTOR_MARKER: &str = "GeneratingVector";

fn first_matrix_rows(matrices: &[GeneratingMatrix]) -> Result<u32, LnbError> {
    let first = matrices
        .first()
        .ok_or_else(|| LnbError::missing_marker(BLOCK_MARKER))?;
    u32::try_from(first.num_rows()).map_err(|_| {
        LnbError::Dimension(
            ErrorInfo::new("matrix-rows", "generating matrix has too many rows")
                .with_context("rows", first.num_rows().to_string()),
        )
    })
}

fn net_result(
    size: SizeParam,
    gen: Option<GenParam>,
    matrices: Vec<GeneratingMatrix>,
    console: &str,
    family: SearchFamily,
) -> Result<SearchResult, LnbError> {
    Ok(SearchResult {
        latnet: LatNet::new(size, ConstructionKind::Net, gen),
        matrices,
        merit: last_merit(console)?,
        seconds: elapsed_seconds(console)?,
        family,
    })
}

/// Sobol nets: direction numbers from the transcript, size `2^rows` of the
/// first generating matrix written as a plain point count.
pub(crate) fn parse_sobol(console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
    let family = SearchFamily::DigitalSobol;
    let matrices = extract_matrices(side_file.unwrap_or_default());
    let lines: Vec<&str> = console.split('\n').collect();

    let start = last_line_index(&lines, |line| line.contains(DIRECTION_NUMBERS_MARKER))
        .ok_or_else(|| LnbError::missing_marker(DIRECTION_NUMBERS_MARKER))?;
    let mut direction_numbers = Vec::new();
    let mut closed = false;
    for line in &lines[start + 1..] {
        if line.contains(')') {
            closed = true;
            break;
        }
        direction_numbers.push(parse_integer_row(line)?);
    }
    if !closed {
        return Err(LnbError::missing_marker(")"));
    }
    debug!(rows = direction_numbers.len(), "read direction numbers");

    let rows = first_matrix_rows(&matrices)?;
    let nb_points = 2u64.checked_pow(rows).ok_or_else(|| {
        LnbError::token("size-overflow", "point count overflows u64", &format!("2^{rows}"))
    })?;
    let size = SizeParam::parse(&nb_points.to_string(), family)?;
    net_result(
        size,
        Some(GenParam::from_rows(direction_numbers)),
        matrices,
        console,
        family,
    )
}

/// Polynomial nets: modulus line and one generator row per matrix.
pub(crate) fn parse_polynomial_net(
    console: &str,
    side_file: Option<&str>,
) -> Result<SearchResult, LnbError> {
    let family = SearchFamily::DigitalPolynomial;
    let matrices = extract_matrices(side_file.unwrap_or_default());
    let lines: Vec<&str> = console.split('\n').collect();

    let modulus_at = last_line_index(&lines, |line| line.contains(MODULUS_MARKER))
        .ok_or_else(|| LnbError::missing_marker(MODULUS_MARKER))?;
    let size_token = line_after(&lines, modulus_at, MODULUS_MARKER)?;
    let size = SizeParam::parse(size_token.trim_matches(' '), family)?;

    let vector_at = last_line_index(&lines, |line| {
        line.contains(GENERATING_VECTOR_MARKER) && !line.contains(MODULUS_MARKER)
    })
    .ok_or_else(|| LnbError::missing_marker(GENERATING_VECTOR_MARKER))?;
    let mut gen = Vec::with_capacity(matrices.len());
    for offset in 0..matrices.len() {
        let line = line_after(&lines, vector_at + offset, GENERATING_VECTOR_MARKER)?;
        gen.push(parse_integer_row(line)?);
    }

    net_result(size, Some(GenParam::from_rows(gen)), matrices, console, family)
}

/// Explicit nets: no generator, size token `2^<rows of the first matrix>`.
pub(crate) fn parse_explicit(console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
    let family = SearchFamily::DigitalExplicit;
    let matrices = extract_matrices(side_file.unwrap_or_default());
    let rows = first_matrix_rows(&matrices)?;
    let size = SizeParam::parse(&format!("2^{rows}"), family)?;
    net_result(size, None, matrices, console, family)
}
