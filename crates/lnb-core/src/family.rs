//! Search family tags selecting the output grammar of the executable.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LnbError};

/// The five kinds of search the executable can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchFamily {
    /// Ordinary rank-1 lattice rules.
    Ordinary,
    /// Polynomial lattice rules.
    Polynomial,
    /// Digital nets built from Sobol direction numbers.
    DigitalSobol,
    /// Digital nets given by explicit generating matrices.
    DigitalExplicit,
    /// Digital nets built from a polynomial lattice construction.
    DigitalPolynomial,
}

/// Whether a result describes a lattice or a digital net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionKind {
    /// Lattice rule (ordinary or polynomial).
    Lattice,
    /// Digital net.
    Net,
}

impl SearchFamily {
    /// All families in declaration order.
    pub const ALL: [SearchFamily; 5] = [
        SearchFamily::Ordinary,
        SearchFamily::Polynomial,
        SearchFamily::DigitalSobol,
        SearchFamily::DigitalExplicit,
        SearchFamily::DigitalPolynomial,
    ];

    /// Returns the tag used on the command line and in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFamily::Ordinary => "ordinary",
            SearchFamily::Polynomial => "polynomial",
            SearchFamily::DigitalSobol => "digital-sobol",
            SearchFamily::DigitalExplicit => "digital-explicit",
            SearchFamily::DigitalPolynomial => "digital-polynomial",
        }
    }

    /// Size tokens of these families are polynomial moduli.
    pub fn uses_polynomial_size(&self) -> bool {
        matches!(
            self,
            SearchFamily::Polynomial | SearchFamily::DigitalPolynomial
        )
    }

    /// Returns `true` when the executable writes generating matrices to a side file.
    pub fn reads_side_file(&self) -> bool {
        !matches!(self, SearchFamily::Ordinary)
    }

    /// Returns `true` for the three digital net families.
    pub fn is_digital(&self) -> bool {
        matches!(
            self,
            SearchFamily::DigitalSobol
                | SearchFamily::DigitalExplicit
                | SearchFamily::DigitalPolynomial
        )
    }

    /// Kind of construction reported for results of this family.
    pub fn construction_kind(&self) -> ConstructionKind {
        if self.is_digital() {
            ConstructionKind::Net
        } else {
            ConstructionKind::Lattice
        }
    }
}

impl Display for SearchFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchFamily {
    type Err = LnbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s.trim())
            .ok_or_else(|| {
                LnbError::Config(
                    ErrorInfo::new("unknown-family", "unrecognised search family")
                        .with_context("family", s)
                        .with_hint(
                            "expected one of ordinary, polynomial, digital-sobol, \
                             digital-explicit, digital-polynomial",
                        ),
                )
            })
    }
}

impl Display for ConstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionKind::Lattice => f.write_str("lattice"),
            ConstructionKind::Net => f.write_str("net"),
        }
    }
}
