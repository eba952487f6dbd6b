use lnb_core::{ConstructionKind, GenParam, LnbError, SearchFamily, SizeBase};
use lnb_parse::parse_output;

const ORDINARY: &str = "\
Lattice type: ordinary
Dimension: 3
BEST LATTICE: lattice(2^10, [1, 5, 7]) : 0.5
BEST LATTICE: lattice(2^10, [1, 363, 469]) : 0.0314

ELAPSED CPU TIME: 0.021 seconds
";

const POLYNOMIAL: &str = "\
BEST LATTICE: PolynomialLattice([1 1 1], [[1], [1 1]]) : 1.25

ELAPSED CPU TIME: 0.004 seconds
";

const POLYNOMIAL_SIDE_FILE: &str = "\
//dim 0
1 0 
0 1 

//dim 1
1 1 
0 1 

";

#[test]
fn ordinary_keeps_last_best_lattice() {
    let result = parse_output(ORDINARY, None, SearchFamily::Ordinary).unwrap();
    assert_eq!(result.family, SearchFamily::Ordinary);
    assert_eq!(result.latnet.kind, ConstructionKind::Lattice);
    assert_eq!(result.latnet.size.nb_points(), 1024);
    assert_eq!(result.latnet.size.base(), &SizeBase::Integer(2));
    assert_eq!(result.latnet.size.power(), 10);
    assert_eq!(
        result.latnet.gen,
        Some(GenParam::Ordinary(vec![1, 363, 469]))
    );
    assert_eq!(result.merit, 0.0314);
    assert_eq!(result.seconds, 0.021);
    assert!(result.matrices.is_empty());
    assert_eq!(result.dimension(), 3);
    assert_eq!(
        result.to_string(),
        "lattice(2^10, [1, 363, 469]) : 0.0314 (0.021 s)"
    );
}

#[test]
fn ordinary_ignores_side_file() {
    let result =
        parse_output(ORDINARY, Some(POLYNOMIAL_SIDE_FILE), SearchFamily::Ordinary).unwrap();
    assert!(result.matrices.is_empty());
}

#[test]
fn polynomial_reads_generator_and_matrices() {
    let result = parse_output(
        POLYNOMIAL,
        Some(POLYNOMIAL_SIDE_FILE),
        SearchFamily::Polynomial,
    )
    .unwrap();
    assert_eq!(result.latnet.size.width(), Some(2));
    assert_eq!(result.latnet.size.nb_points(), 4);
    assert_eq!(
        result.latnet.gen,
        Some(GenParam::Polynomial(vec![vec![1], vec![1, 1]]))
    );
    assert_eq!(result.merit, 1.25);
    assert_eq!(result.matrices.len(), 2);
    assert_eq!(result.matrices[1].rows(), &[vec![1, 1], vec![0, 1]]);
}

#[test]
fn polynomial_without_side_file_has_no_matrices() {
    let result = parse_output(POLYNOMIAL, None, SearchFamily::Polynomial).unwrap();
    assert!(result.matrices.is_empty());
    assert_eq!(result.dimension(), 2);
}

#[test]
fn last_elapsed_time_wins() {
    let console = format!("ELAPSED CPU TIME: 9.5 seconds\n{ORDINARY}");
    let result = parse_output(&console, None, SearchFamily::Ordinary).unwrap();
    assert_eq!(result.seconds, 0.021);

    let console = format!("{ORDINARY}ELAPSED CPU TIME: 3.75 seconds\n");
    let result = parse_output(&console, None, SearchFamily::Ordinary).unwrap();
    assert_eq!(result.seconds, 3.75);
}

#[test]
fn missing_best_lattice_is_reported() {
    let console = "ELAPSED CPU TIME: 0.1 seconds\n";
    let err = parse_output(console, None, SearchFamily::Ordinary).unwrap_err();
    assert!(matches!(err, LnbError::MissingMarker(_)));
    assert_eq!(
        err.info().context.get("marker").map(String::as_str),
        Some("BEST LATTICE")
    );
}

#[test]
fn missing_elapsed_time_is_reported() {
    let console = "BEST LATTICE: lattice(8, [1, 3]) : 0.5\n";
    let err = parse_output(console, None, SearchFamily::Ordinary).unwrap_err();
    assert_eq!(
        err.info().context.get("marker").map(String::as_str),
        Some("ELAPSED CPU TIME")
    );
}

#[test]
fn malformed_generator_fails_the_parse() {
    let console = "BEST LATTICE: lattice(8, [1, a]) : 0.5\nELAPSED CPU TIME: 0.1 seconds\n";
    let err = parse_output(console, None, SearchFamily::Ordinary).unwrap_err();
    assert!(matches!(err, LnbError::Token(_)));
}

#[test]
fn polynomial_pattern_does_not_match_ordinary_lines() {
    let err = parse_output(ORDINARY, None, SearchFamily::Polynomial).unwrap_err();
    assert!(matches!(err, LnbError::MissingMarker(_)));
}
