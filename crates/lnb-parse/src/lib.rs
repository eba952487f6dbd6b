#![deny(missing_docs)]
#![doc = "Interpretation of LatNet Builder console transcripts and generating-matrix side files into search results."]

mod digital;
mod lattice;
pub mod matrices;
pub mod progress;
pub mod scan;

use lnb_core::{LnbError, SearchFamily, SearchResult};
use tracing::info;

pub use digital::{DIRECTION_NUMBERS_MARKER, GENERATING_VECTOR_MARKER, MODULUS_MARKER};
pub use lattice::BEST_LATTICE_MARKER;
pub use matrices::{extract_matrices, parse_row, scan_matrices, MatrixScan, RowOutcome, SkippedRow};
pub use progress::{latest_progress, parse_progress, Progress};
pub use scan::{elapsed_seconds, last_merit, MERIT_MARKER};

/// Output layout of one search family.
pub trait OutputGrammar: Send + Sync {
    /// Family whose transcripts this grammar reads.
    fn family(&self) -> SearchFamily;

    /// Interprets a complete transcript and optional side file.
    fn parse(&self, console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError>;
}

/// `BEST LATTICE: lattice(...)` transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinaryLatticeGrammar;

/// `BEST LATTICE: PolynomialLattice(...)` transcripts plus matrices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialLatticeGrammar;

/// Sobol net transcripts with direction numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SobolNetGrammar;

/// Explicit net transcripts; everything but the merit lives in the side file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitNetGrammar;

/// Polynomial net transcripts with modulus and generating vector blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialNetGrammar;

impl OutputGrammar for OrdinaryLatticeGrammar {
    fn family(&self) -> SearchFamily {
        SearchFamily::Ordinary
    }

    fn parse(&self, console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
        lattice::parse_lattice(console, side_file, self.family())
    }
}

impl OutputGrammar for PolynomialLatticeGrammar {
    fn family(&self) -> SearchFamily {
        SearchFamily::Polynomial
    }

    fn parse(&self, console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
        lattice::parse_lattice(console, side_file, self.family())
    }
}

impl OutputGrammar for SobolNetGrammar {
    fn family(&self) -> SearchFamily {
        SearchFamily::DigitalSobol
    }

    fn parse(&self, console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
        digital::parse_sobol(console, side_file)
    }
}

impl OutputGrammar for ExplicitNetGrammar {
    fn family(&self) -> SearchFamily {
        SearchFamily::DigitalExplicit
    }

    fn parse(&self, console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
        digital::parse_explicit(console, side_file)
    }
}

impl OutputGrammar for PolynomialNetGrammar {
    fn family(&self) -> SearchFamily {
        SearchFamily::DigitalPolynomial
    }

    fn parse(&self, console: &str, side_file: Option<&str>) -> Result<SearchResult, LnbError> {
        digital::parse_polynomial_net(console, side_file)
    }
}

/// Grammar used for transcripts of `family`.
pub fn grammar_for(family: SearchFamily) -> &'static dyn OutputGrammar {
    match family {
        SearchFamily::Ordinary => &OrdinaryLatticeGrammar,
        SearchFamily::Polynomial => &PolynomialLatticeGrammar,
        SearchFamily::DigitalSobol => &SobolNetGrammar,
        SearchFamily::DigitalExplicit => &ExplicitNetGrammar,
        SearchFamily::DigitalPolynomial => &PolynomialNetGrammar,
    }
}

/// Interprets the output of one search.
///
/// The side file is only read by families that write generating matrices;
/// a missing side file reads as empty. Any error means the output could not
/// be interpreted and no partial result is returned.
pub fn parse_output(
    console: &str,
    side_file: Option<&str>,
    family: SearchFamily,
) -> Result<SearchResult, LnbError> {
    let result = grammar_for(family).parse(console, side_file)?;
    info!(
        %family,
        size = %result.latnet.size,
        dimension = result.dimension(),
        matrices = result.matrices.len(),
        merit = result.merit,
        seconds = result.seconds,
        "interpreted search output"
    );
    Ok(result)
}
