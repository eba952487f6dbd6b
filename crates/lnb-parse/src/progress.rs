//! Progress lines printed while a search is running.
//!
//! Single searches print `... <current>/<total>`; searches over increasing
//! dimensions print `... <dim>/<total dims> - ... <current>/<total>`.

use lnb_core::{ErrorInfo, LnbError};
use serde::{Deserialize, Serialize};

/// Completed fractions of a running search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Fraction of dimensions completed (0 when not reported).
    pub dimension: f64,
    /// Fraction of candidate nets examined in the current dimension.
    pub nets: f64,
}

fn malformed(line: &str) -> LnbError {
    LnbError::Token(
        ErrorInfo::new("progress-syntax", "not a progress line").with_context("line", line.trim_end()),
    )
}

fn fraction(part: &str, line: &str) -> Result<f64, LnbError> {
    let mut pieces = part.split('/');
    let head = pieces.next().ok_or_else(|| malformed(line))?;
    let tail = pieces.next().ok_or_else(|| malformed(line))?;
    let current: u64 = head
        .split(' ')
        .last()
        .and_then(|field| field.trim().parse().ok())
        .ok_or_else(|| malformed(line))?;
    let total: u64 = tail.trim().parse().map_err(|_| malformed(line))?;
    if total == 0 {
        return Err(malformed(line));
    }
    Ok(current as f64 / total as f64)
}

/// Parses one progress line.
pub fn parse_progress(line: &str) -> Result<Progress, LnbError> {
    let parts: Vec<&str> = line.split('-').collect();
    match parts.as_slice() {
        [nets] => Ok(Progress {
            dimension: 0.0,
            nets: fraction(nets, line)?,
        }),
        [dimension, nets] => Ok(Progress {
            dimension: fraction(dimension, line)?,
            nets: fraction(nets, line)?,
        }),
        _ => Err(malformed(line)),
    }
}

/// Progress reported by the last non-empty line of a partial transcript.
pub fn latest_progress(transcript: &str) -> Result<Progress, LnbError> {
    let line = transcript
        .split('\n')
        .rev()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| LnbError::missing_marker("progress line"))?;
    parse_progress(line)
}
