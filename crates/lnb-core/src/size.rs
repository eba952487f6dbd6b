//! Point-set sizes parsed from the compact size tokens printed by the executable.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LnbError};
use crate::family::SearchFamily;

/// Base of a size: an integer for lattices and Sobol/explicit nets, or the
/// coefficient list of a polynomial modulus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeBase {
    /// Integer base (equal to the point count for simple sizes).
    Integer(u64),
    /// Polynomial modulus coefficients, lowest degree first as printed.
    Polynomial(Vec<u64>),
}

/// Cardinality and nesting structure of a point set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeParam {
    nb_points: u64,
    base: SizeBase,
    power: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
}

impl SizeParam {
    /// Parses a size token using the grammar selected by `family`.
    pub fn parse(token: &str, family: SearchFamily) -> Result<Self, LnbError> {
        if family.uses_polynomial_size() {
            parse_polynomial(token)
        } else {
            parse_integer(token)
        }
    }

    /// A plain point count: `base == nb_points`, `power == 1`.
    pub fn simple(nb_points: u64) -> Result<Self, LnbError> {
        if nb_points == 0 {
            return Err(LnbError::token(
                "size-zero",
                "point count must be positive",
                "0",
            ));
        }
        Ok(Self {
            nb_points,
            base: SizeBase::Integer(nb_points),
            power: 1,
            width: None,
        })
    }

    /// An embedded size `base^power`.
    pub fn embedded(base: u64, power: u32) -> Result<Self, LnbError> {
        let token = format!("{base}^{power}");
        if base == 0 || power == 0 {
            return Err(LnbError::token(
                "size-zero",
                "embedded base and power must be positive",
                &token,
            ));
        }
        let nb_points = base
            .checked_pow(power)
            .ok_or_else(|| LnbError::token("size-overflow", "point count overflows u64", &token))?;
        Ok(Self {
            nb_points,
            base: SizeBase::Integer(base),
            power,
            width: None,
        })
    }

    /// A polynomial size with modulus `coefficients` raised to `power`.
    pub fn polynomial(coefficients: Vec<u64>, power: u32) -> Result<Self, LnbError> {
        let token = format_polynomial(&coefficients, power);
        if coefficients.is_empty() || power == 0 {
            return Err(LnbError::token(
                "size-empty-modulus",
                "polynomial modulus needs at least one coefficient and a positive power",
                &token,
            ));
        }
        let width = u32::try_from(coefficients.len() - 1)
            .ok()
            .and_then(|degree| degree.checked_mul(power))
            .filter(|width| *width < u64::BITS)
            .ok_or_else(|| LnbError::token("size-overflow", "point count overflows u64", &token))?;
        Ok(Self {
            nb_points: 1u64 << width,
            base: SizeBase::Polynomial(coefficients),
            power,
            width: Some(width),
        })
    }

    /// Total number of points in the index space.
    pub fn nb_points(&self) -> u64 {
        self.nb_points
    }

    /// Integer base or modulus coefficients.
    pub fn base(&self) -> &SizeBase {
        &self.base
    }

    /// Exponent of the embedded structure; 1 for simple sizes.
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Bit width of the index space, only set for polynomial sizes.
    pub fn width(&self) -> Option<u32> {
        self.width
    }
}

impl Display for SizeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.base {
            SizeBase::Integer(_) if self.power == 1 => write!(f, "{}", self.nb_points),
            SizeBase::Integer(base) => write!(f, "{base}^{}", self.power),
            SizeBase::Polynomial(coefficients) => {
                f.write_str(&format_polynomial(coefficients, self.power))
            }
        }
    }
}

fn format_polynomial(coefficients: &[u64], power: u32) -> String {
    let joined = coefficients
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    if power == 1 {
        format!("[{joined}]")
    } else {
        format!("[{joined}]^{power}")
    }
}

fn parse_integer(token: &str) -> Result<SizeParam, LnbError> {
    let trimmed = token.trim();
    let parts: Vec<&str> = trimmed.split('^').collect();
    match parts.as_slice() {
        [base, power] => SizeParam::embedded(parse_field(base, token)?, parse_field(power, token)?),
        [count] => SizeParam::simple(parse_field(count, token)?),
        _ => Err(LnbError::token(
            "size-syntax",
            "expected `N` or `B^P`",
            token,
        )),
    }
}

fn parse_polynomial(token: &str) -> Result<SizeParam, LnbError> {
    let trimmed = token.trim();
    let parts: Vec<&str> = trimmed.split('^').collect();
    let (modulus, power) = match parts.as_slice() {
        [modulus, power] => (*modulus, parse_field(power, token)?),
        [modulus] => (*modulus, 1),
        _ => {
            return Err(LnbError::token(
                "size-syntax",
                "expected `[c0 ... ck]` or `[c0 ... ck]^P`",
                token,
            ))
        }
    };
    let modulus = modulus.trim();
    let opens = modulus.starts_with('[');
    let closes = modulus.ends_with(']');
    if opens != closes {
        return Err(LnbError::token(
            "size-bracket",
            "unbalanced brackets around polynomial modulus",
            token,
        ));
    }
    let inner = if opens {
        &modulus[1..modulus.len() - 1]
    } else {
        modulus
    };
    let coefficients = inner
        .split_whitespace()
        .map(|field| parse_field(field, token))
        .collect::<Result<Vec<u64>, _>>()?;
    SizeParam::polynomial(coefficients, power)
}

fn parse_field<T: std::str::FromStr>(field: &str, token: &str) -> Result<T, LnbError> {
    field.trim().parse().map_err(|_| {
        LnbError::Token(
            ErrorInfo::new("size-field", "non-numeric field in size token")
                .with_context("token", token)
                .with_context("field", field.trim()),
        )
    })
}
