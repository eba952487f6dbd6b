//! Line scans shared by every family grammar.

use std::sync::OnceLock;

use lnb_core::{ErrorInfo, LnbError};
use regex::Regex;

const ELAPSED_PATTERN: &str = r"^ELAPSED CPU TIME:\s*(?P<seconds>\S*)\s*seconds";

/// Marker preceding the figure-of-merit value on digital net transcripts.
pub const MERIT_MARKER: &str = "merit:";

/// Compiled `pattern`, built on first use and shared afterwards.
pub(crate) fn cached(cell: &'static OnceLock<Regex>, pattern: &str) -> Result<&'static Regex, LnbError> {
    if let Some(regex) = cell.get() {
        return Ok(regex);
    }
    let regex = Regex::new(pattern).map_err(|err| {
        LnbError::Config(ErrorInfo::new("pattern", err.to_string()).with_context("pattern", pattern))
    })?;
    Ok(cell.get_or_init(|| regex))
}

/// Finite float field; `inf` and `nan` are rejected along with non-numbers.
pub(crate) fn parse_float(value: &str, what: &str, line: &str) -> Result<f64, LnbError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| {
            LnbError::Token(
                ErrorInfo::new("float-field", format!("{what} is not a finite number"))
                    .with_context("field", value.trim())
                    .with_context("line", line.trim_end()),
            )
        })
}

/// Elapsed CPU time; the last `ELAPSED CPU TIME` line wins.
pub fn elapsed_seconds(console: &str) -> Result<f64, LnbError> {
    static ELAPSED: OnceLock<Regex> = OnceLock::new();
    let pattern = cached(&ELAPSED, ELAPSED_PATTERN)?;
    let mut seconds = None;
    for line in console.split('\n') {
        if let Some(caps) = pattern.captures(line) {
            seconds = Some(parse_float(&caps["seconds"], "elapsed time", line)?);
        }
    }
    seconds.ok_or_else(|| LnbError::missing_marker("ELAPSED CPU TIME"))
}

/// Merit of the last line containing `merit:`, found by scanning backward.
///
/// The value is the text between the first and second colon of that line.
pub fn last_merit(console: &str) -> Result<f64, LnbError> {
    let line = console
        .split('\n')
        .rev()
        .find(|line| line.contains(MERIT_MARKER))
        .ok_or_else(|| LnbError::missing_marker(MERIT_MARKER))?;
    let value = line.split(':').nth(1).unwrap_or_default();
    parse_float(value, "merit", line)
}

/// Whitespace-separated integer row printed on the console.
pub(crate) fn parse_integer_row(line: &str) -> Result<Vec<u64>, LnbError> {
    let row = line
        .split_whitespace()
        .map(|field| {
            field.parse().map_err(|_| {
                LnbError::Token(
                    ErrorInfo::new("row-field", "non-numeric field in generator row")
                        .with_context("field", field)
                        .with_context("line", line.trim_end()),
                )
            })
        })
        .collect::<Result<Vec<u64>, _>>()?;
    if row.is_empty() {
        return Err(LnbError::Token(ErrorInfo::new(
            "row-empty",
            "expected a generator row, found an empty line",
        )));
    }
    Ok(row)
}

/// Index of the last line satisfying `predicate`.
pub(crate) fn last_line_index(lines: &[&str], predicate: impl Fn(&str) -> bool) -> Option<usize> {
    lines.iter().rposition(|line| predicate(line))
}

/// The line following a marker, failing when the transcript ends first.
pub(crate) fn line_after<'a>(lines: &[&'a str], index: usize, marker: &str) -> Result<&'a str, LnbError> {
    lines.get(index + 1).copied().ok_or_else(|| {
        LnbError::MissingMarker(
            ErrorInfo::new("truncated-block", "transcript ends right after a marker")
                .with_context("marker", marker),
        )
    })
}
