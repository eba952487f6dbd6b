//! Generating data of a construction: lattice generating vectors and
//! per-coordinate rows for digital nets.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LnbError};
use crate::family::SearchFamily;

/// Shape of a generating vector, one entry per coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "values", rename_all = "kebab-case")]
pub enum GenParam {
    /// One integer per coordinate (ordinary lattices).
    Ordinary(Vec<u64>),
    /// One polynomial coefficient list per coordinate (polynomial lattices).
    Polynomial(Vec<Vec<u64>>),
    /// Structured rows passed through from the transcript (digital nets).
    Digital(Vec<Vec<u64>>),
}

impl GenParam {
    /// Parses the generator token printed inside `BEST LATTICE` lines.
    ///
    /// Digital families carry already structured rows and must use
    /// [`GenParam::from_rows`].
    pub fn parse(token: &str, family: SearchFamily) -> Result<Self, LnbError> {
        match family {
            SearchFamily::Ordinary => token
                .split(',')
                .map(|field| parse_coefficient(field, token))
                .collect::<Result<Vec<_>, _>>()
                .map(GenParam::Ordinary),
            SearchFamily::Polynomial => token
                .split(',')
                .map(|group| {
                    let coefficients = group
                        .trim_matches(|c| matches!(c, '[' | ']' | ' ' | ','))
                        .split_whitespace()
                        .map(|field| parse_coefficient(field, token))
                        .collect::<Result<Vec<_>, _>>()?;
                    if coefficients.is_empty() {
                        return Err(empty_group(group, token));
                    }
                    Ok(coefficients)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(GenParam::Polynomial),
            digital => Err(LnbError::Token(
                ErrorInfo::new(
                    "generator-family",
                    "digital generators are not parsed from a single token",
                )
                .with_context("family", digital.as_str())
                .with_hint("build the generator with GenParam::from_rows"),
            )),
        }
    }

    /// Wraps structured rows for a digital construction.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Self {
        GenParam::Digital(rows)
    }

    /// Number of coordinates described by the generator.
    pub fn dimension(&self) -> usize {
        match self {
            GenParam::Ordinary(values) => values.len(),
            GenParam::Polynomial(rows) | GenParam::Digital(rows) => rows.len(),
        }
    }

    /// Integer generating vector of an ordinary lattice.
    pub fn as_ordinary(&self) -> Option<&[u64]> {
        match self {
            GenParam::Ordinary(values) => Some(values),
            _ => None,
        }
    }
}

impl Display for GenParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenParam::Ordinary(values) => {
                let joined = values
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                f.write_str(&joined)
            }
            GenParam::Polynomial(rows) | GenParam::Digital(rows) => {
                for (idx, row) in rows.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    let joined = row
                        .iter()
                        .map(u64::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    write!(f, "[{joined}]")?;
                }
                Ok(())
            }
        }
    }
}

fn parse_coefficient(field: &str, token: &str) -> Result<u64, LnbError> {
    field.trim().parse().map_err(|_| {
        LnbError::Token(
            ErrorInfo::new("generator-field", "non-numeric field in generator token")
                .with_context("token", token)
                .with_context("field", field.trim()),
        )
    })
}

fn empty_group(group: &str, token: &str) -> LnbError {
    LnbError::Token(
        ErrorInfo::new("generator-field", "polynomial generator has an empty coefficient group")
            .with_context("token", token)
            .with_context("field", group.trim()),
    )
}
