use lnb_core::LnbError;
use lnb_parse::{latest_progress, parse_progress, Progress};

#[test]
fn single_search_reports_net_fraction() {
    let progress = parse_progress("Net 25/100").unwrap();
    assert_eq!(
        progress,
        Progress {
            dimension: 0.0,
            nets: 0.25
        }
    );
}

#[test]
fn dimension_search_reports_both_fractions() {
    let progress = parse_progress("Dimension 2/4 - Net 30/40").unwrap();
    assert_eq!(progress.dimension, 0.5);
    assert_eq!(progress.nets, 0.75);
}

#[test]
fn latest_progress_uses_last_non_empty_line() {
    let transcript = "Net 1/10\nNet 2/10\nNet 5/10\n\n";
    assert_eq!(latest_progress(transcript).unwrap().nets, 0.5);
}

#[test]
fn malformed_progress_lines_fail() {
    for line in ["BEST LATTICE", "Net x/10", "Net 1/0", "a 1/2 - b 1/2 - c 1/2"] {
        let err = parse_progress(line).unwrap_err();
        assert!(matches!(err, LnbError::Token(_)), "{line}");
    }
    assert!(matches!(
        latest_progress("\n\n").unwrap_err(),
        LnbError::MissingMarker(_)
    ));
}
