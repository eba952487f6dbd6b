use std::sync::OnceLock;

use lnb_core::{
    ConstructionKind, GenParam, LatNet, LnbError, SearchFamily, SearchResult, SizeParam,
};
use regex::Regex;
use tracing::debug;

use crate::matrices::extract_matrices;
use crate::scan::{cached, elapsed_seconds, parse_float};

const ORDINARY_PATTERN: &str =
    r"^BEST LATTICE:\s*lattice\((?P<size>[^,]*),\s*\[(?P<gen>[^\]]*)\]\s*\)\s*:\s*(?P<merit>.*)";
const POLYNOMIAL_PATTERN: &str = r"^BEST LATTICE:\s*PolynomialLattice\((?P<size>[^,]*),\s*\[(?P<gen>[^\)]*)\]\s*\)\s*:\s*(?P<merit>.*)";

/// Marker of the line announcing the best lattice.
pub const BEST_LATTICE_MARKER: &str = "BEST LATTICE";

/// Parses an ordinary or polynomial lattice transcript.
///
/// Every `BEST LATTICE` line must parse; the last one is kept. Polynomial
/// lattices also read their generating matrices from the side file.
pub(crate) fn parse_lattice(
    console: &str,
    side_file: Option<&str>,
    family: SearchFamily,
) -> Result<SearchResult, LnbError> {
    static ORDINARY: OnceLock<Regex> = OnceLock::new();
    static POLYNOMIAL: OnceLock<Regex> = OnceLock::new();
    let pattern = match family {
        SearchFamily::Polynomial => cached(&POLYNOMIAL, POLYNOMIAL_PATTERN)?,
        _ => cached(&ORDINARY, ORDINARY_PATTERN)?,
    };
    let seconds = elapsed_seconds(console)?;

    let mut best = None;
    for (idx, line) in console.split('\n').enumerate() {
        let Some(caps) = pattern.captures(line) else {
            continue;
        };
        let size = SizeParam::parse(&caps["size"], family)?;
        let gen = GenParam::parse(&caps["gen"], family)?;
        let merit = parse_float(&caps["merit"], "merit", line)?;
        debug!(line = idx + 1, %size, merit, "best lattice candidate");
        best = Some((LatNet::new(size, ConstructionKind::Lattice, Some(gen)), merit));
    }
    let (latnet, merit) = best.ok_or_else(|| LnbError::missing_marker(BEST_LATTICE_MARKER))?;

    let matrices = if family.reads_side_file() {
        extract_matrices(side_file.unwrap_or_default())
    } else {
        Vec::new()
    };

    Ok(SearchResult {
        latnet,
        matrices,
        merit,
        seconds,
        family,
    })
}
