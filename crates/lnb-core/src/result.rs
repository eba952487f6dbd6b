//! Aggregated outcome of one search.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LnbError};
use crate::family::{ConstructionKind, SearchFamily};
use crate::generator::GenParam;
use crate::matrix::GeneratingMatrix;
use crate::size::SizeParam;

/// Construction description: a size, the kind of point set and, when the
/// executable prints one, its generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatNet {
    /// Size of the point set.
    pub size: SizeParam,
    /// Lattice or net.
    pub kind: ConstructionKind,
    /// Generating vector or rows, absent for explicit nets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gen: Option<GenParam>,
}

impl LatNet {
    /// Creates a construction description.
    pub fn new(size: SizeParam, kind: ConstructionKind, gen: Option<GenParam>) -> Self {
        Self { size, kind, gen }
    }
}

impl Display for LatNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.gen {
            Some(gen) => write!(f, "{}({}, [{}])", self.kind, self.size, gen),
            None => write!(f, "{}({})", self.kind, self.size),
        }
    }
}

/// One fully interpreted search outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Construction found by the search.
    pub latnet: LatNet,
    /// Generating matrices indexed by coordinate (empty for ordinary lattices).
    #[serde(default)]
    pub matrices: Vec<GeneratingMatrix>,
    /// Figure-of-merit value of the construction.
    pub merit: f64,
    /// Elapsed CPU time reported by the executable.
    pub seconds: f64,
    /// Search family that produced the transcript.
    pub family: SearchFamily,
}

impl SearchResult {
    /// Number of coordinates: generator length when present, else matrix count.
    pub fn dimension(&self) -> usize {
        match &self.latnet.gen {
            Some(gen) => gen.dimension(),
            None => self.matrices.len(),
        }
    }

    /// Largest level of the embedded hierarchy, `floor(log2(nb_points))`.
    pub fn max_level(&self) -> u32 {
        self.latnet.size.nb_points().checked_ilog2().unwrap_or(0)
    }

    /// Size of the point set.
    pub fn size(&self) -> &SizeParam {
        &self.latnet.size
    }

    /// Generating matrix of `coord`.
    pub fn matrix(&self, coord: usize) -> Result<&GeneratingMatrix, LnbError> {
        self.matrices.get(coord).ok_or_else(|| {
            LnbError::Dimension(
                ErrorInfo::new("matrix-missing", "no generating matrix for coordinate")
                    .with_context("coord", coord.to_string())
                    .with_context("matrices", self.matrices.len().to_string()),
            )
        })
    }

    /// Fails unless `coord` is below [`SearchResult::dimension`].
    pub fn check_coordinate(&self, coord: usize) -> Result<(), LnbError> {
        let dimension = self.dimension();
        if coord < dimension {
            Ok(())
        } else {
            Err(LnbError::Dimension(
                ErrorInfo::new("coord-out-of-range", "coordinate outside the point set")
                    .with_context("coord", coord.to_string())
                    .with_context("dimension", dimension.to_string()),
            ))
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {} ({} s)", self.latnet, self.merit, self.seconds)
    }
}
