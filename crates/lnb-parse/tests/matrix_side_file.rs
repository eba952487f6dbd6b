use lnb_core::GeneratingMatrix;
use lnb_parse::{extract_matrices, parse_row, scan_matrices, RowOutcome};

#[test]
fn single_block_with_trailing_token() {
    let matrices = extract_matrices("//dim\n1 0 9\n0 1 9\n\n");
    assert_eq!(matrices, vec![GeneratingMatrix::new(vec![vec![1, 0], vec![0, 1]])]);
    assert!(matrices[0].is_square());
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let scan = scan_matrices("//dim\n1 0 9\nx y 9\n0 1 9\n\n");
    assert_eq!(scan.matrices.len(), 1);
    assert_eq!(scan.matrices[0].rows(), &[vec![1, 0], vec![0, 1]]);
    assert_eq!(scan.skipped.len(), 1);
    assert_eq!(scan.skipped[0].line_number, 3);
    assert_eq!(scan.skipped[0].text, "x y 9");
}

#[test]
fn block_needs_a_row_before_blank_line_closes_it() {
    let matrices = extract_matrices("//dim\n\n1 1 9\n\n");
    assert_eq!(matrices, vec![GeneratingMatrix::new(vec![vec![1, 1]])]);
}

#[test]
fn unterminated_block_is_dropped() {
    let scan = scan_matrices("//dim\n1 0 9\n0 1 9");
    assert!(scan.matrices.is_empty());
    assert_eq!(scan.unterminated_rows, 2);
}

#[test]
fn lines_outside_blocks_are_ignored() {
    let text = "header line\n1 2 3\n//dim 0\n1 9\n\ntrailer\n//dim 1\n0 9\n\n";
    let matrices = extract_matrices(text);
    assert_eq!(matrices.len(), 2);
    assert_eq!(matrices[1].rows(), &[vec![0]]);
}

#[test]
fn row_outcomes() {
    assert_eq!(parse_row("1 0 1 "), RowOutcome::Row(vec![1, 0, 1]));
    assert_eq!(parse_row("1 0 1 ;"), RowOutcome::Row(vec![1, 0, 1]));
    assert!(matches!(parse_row("7"), RowOutcome::Skipped(_)));
    assert!(matches!(parse_row("1  0 9"), RowOutcome::Skipped(_)));
    assert!(matches!(parse_row("1 -1 9"), RowOutcome::Skipped(_)));
}

#[test]
fn crlf_side_files_close_blocks() {
    let matrices = extract_matrices("//dim\r\n1 0 \r\n0 1 \r\n\r\n");
    assert_eq!(matrices, vec![GeneratingMatrix::new(vec![vec![1, 0], vec![0, 1]])]);
}
