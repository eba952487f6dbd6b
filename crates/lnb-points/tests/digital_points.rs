use lnb_core::{
    ConstructionKind, GeneratingMatrix, LatNet, LnbError, SearchFamily, SearchResult, SizeParam,
};
use lnb_points::{coordinate_points, digital_points, point_table};
use proptest::prelude::*;

fn identity(width: usize) -> GeneratingMatrix {
    GeneratingMatrix::new(
        (0..width)
            .map(|r| (0..width).map(|c| u64::from(r == c)).collect())
            .collect(),
    )
}

fn explicit(matrices: Vec<GeneratingMatrix>) -> SearchResult {
    let rows = matrices[0].num_rows();
    SearchResult {
        latnet: LatNet::new(
            SizeParam::parse(&format!("2^{rows}"), SearchFamily::DigitalExplicit).unwrap(),
            ConstructionKind::Net,
            None,
        ),
        matrices,
        merit: 0.0,
        seconds: 0.0,
        family: SearchFamily::DigitalExplicit,
    }
}

#[test]
fn identity_matrix_gives_van_der_corput() {
    let points = digital_points(&identity(2), 4, None).unwrap();
    assert_eq!(points, vec![0.0, 0.5, 0.25, 0.75]);

    let points = digital_points(&identity(3), 8, None).unwrap();
    assert_eq!(
        points,
        vec![0.0, 0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875]
    );
}

#[test]
fn entries_are_reduced_modulo_two() {
    // Upper triangular ones: the second Sobol coordinate.
    let matrix = GeneratingMatrix::new(vec![vec![1, 1], vec![0, 1]]);
    assert_eq!(
        digital_points(&matrix, 4, None).unwrap(),
        vec![0.0, 0.5, 0.75, 0.25]
    );
    let odd = GeneratingMatrix::new(vec![vec![3, 5], vec![2, 7]]);
    assert_eq!(
        digital_points(&odd, 4, None).unwrap(),
        digital_points(&matrix, 4, None).unwrap()
    );
}

#[test]
fn level_truncates_output_bits() {
    let result = explicit(vec![identity(3)]);
    assert_eq!(
        coordinate_points(&result, 0, Some(2)).unwrap(),
        vec![0.0, 0.5, 0.25, 0.75]
    );
    let err = coordinate_points(&result, 0, Some(4)).unwrap_err();
    assert_eq!(err.info().code, "level-out-of-range");
}

#[test]
fn non_square_matrix_is_rejected() {
    let matrix = GeneratingMatrix::new(vec![vec![1, 0, 0], vec![0, 1, 0]]);
    let err = digital_points(&matrix, 4, None).unwrap_err();
    assert!(matches!(err, LnbError::Dimension(_)));
    assert_eq!(err.info().code, "matrix-shape");
}

#[test]
fn coordinate_beyond_matrices_fails() {
    let result = explicit(vec![identity(2), identity(2)]);
    assert!(coordinate_points(&result, 1, None).is_ok());
    let err = coordinate_points(&result, 2, None).unwrap_err();
    assert_eq!(err.info().code, "coord-out-of-range");
}

#[test]
fn parsed_explicit_net_reconstructs_table() {
    let side_file = "//dim\n1 0 9\n0 1 9\n\n//dim\n1 1 9\n0 1 9\n\n";
    let console = "merit: 0.5\nELAPSED CPU TIME: 0.01 seconds\n";
    let result =
        lnb_parse::parse_output(console, Some(side_file), SearchFamily::DigitalExplicit).unwrap();
    let table = point_table(&result, None).unwrap();
    assert_eq!(
        table,
        vec![
            vec![0.0, 0.0],
            vec![0.5, 0.5],
            vec![0.25, 0.75],
            vec![0.75, 0.25],
        ]
    );
}

proptest! {
    #[test]
    fn identity_points_are_a_permutation_of_the_grid(width in 1usize..10) {
        let nb_points = 1u64 << width;
        let mut points = digital_points(&identity(width), nb_points, None).unwrap();
        points.sort_by(f64::total_cmp);
        for (index, point) in points.into_iter().enumerate() {
            prop_assert_eq!(point, index as f64 / nb_points as f64);
        }
    }

    #[test]
    fn random_matrices_stay_in_unit_interval(
        bits in proptest::collection::vec(0u64..2, 16),
    ) {
        let matrix = GeneratingMatrix::new(bits.chunks(4).map(<[u64]>::to_vec).collect());
        for point in digital_points(&matrix, 16, None).unwrap() {
            prop_assert!((0.0..1.0).contains(&point));
        }
    }
}
