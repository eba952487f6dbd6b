use lnb_core::{GenParam, LnbError, SearchFamily};
use proptest::prelude::*;

#[test]
fn ordinary_generator_splits_on_commas() {
    let gen = GenParam::parse("1, 182667, 469891", SearchFamily::Ordinary).unwrap();
    assert_eq!(gen, GenParam::Ordinary(vec![1, 182667, 469891]));
    assert_eq!(gen.dimension(), 3);
    assert_eq!(gen.as_ordinary(), Some(&[1, 182667, 469891][..]));
}

#[test]
fn polynomial_generator_strips_brackets() {
    let gen = GenParam::parse("[1], [1 0 1], [1 1]", SearchFamily::Polynomial).unwrap();
    assert_eq!(
        gen,
        GenParam::Polynomial(vec![vec![1], vec![1, 0, 1], vec![1, 1]])
    );
    assert_eq!(gen.to_string(), "[1], [1 0 1], [1 1]");
}

#[test]
fn digital_generators_are_passed_through() {
    let rows = vec![vec![1], vec![1, 3], vec![1, 3, 1]];
    let gen = GenParam::from_rows(rows.clone());
    assert_eq!(gen, GenParam::Digital(rows));
    assert_eq!(gen.dimension(), 3);

    let err = GenParam::parse("1 3", SearchFamily::DigitalSobol).unwrap_err();
    assert_eq!(err.info().code, "generator-family");
}

#[test]
fn non_numeric_fields_fail() {
    let err = GenParam::parse("1, x, 3", SearchFamily::Ordinary).unwrap_err();
    assert!(matches!(err, LnbError::Token(_)));
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("x"));

    for token in ["[1 1], []", "1,,2", "[1], , [1 1]", ""] {
        let err = GenParam::parse(token, SearchFamily::Polynomial).unwrap_err();
        assert!(matches!(err, LnbError::Token(_)), "{token:?}");
        assert_eq!(err.info().code, "generator-field", "{token:?}");
    }
    let err = GenParam::parse("1,,2", SearchFamily::Ordinary).unwrap_err();
    assert_eq!(err.info().code, "generator-field");
}

proptest! {
    #[test]
    fn display_reparses_to_equal_generator(
        ordinary in proptest::collection::vec(0u64..1_000_000, 1..10),
        polynomial in proptest::collection::vec(proptest::collection::vec(0u64..2, 1..6), 1..6),
    ) {
        let gen = GenParam::Ordinary(ordinary);
        prop_assert_eq!(GenParam::parse(&gen.to_string(), SearchFamily::Ordinary).unwrap(), gen);

        let gen = GenParam::Polynomial(polynomial);
        prop_assert_eq!(GenParam::parse(&gen.to_string(), SearchFamily::Polynomial).unwrap(), gen);
    }
}
