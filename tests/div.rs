use decimalfp::{Decimal, RoundingMode};

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    let a = Decimal::from_i64(1);
    let b = Decimal::ZERO;
    assert!(a.checked_div(&b, None).is_err());
}

#[test]
fn exact_division_uses_the_natural_terminating_precision() {
    let a = Decimal::from_i64(1);
    let b = Decimal::from_i64(4);
    let q = a.checked_div(&b, None).unwrap();
    assert_eq!(q.to_string(), "0.25");
}

#[test]
fn non_terminating_division_rounds_at_the_precision_limit() {
    let a = Decimal::from_i64(2);
    let b = Decimal::from_i64(3);
    let q = a.checked_div(&b, Some(RoundingMode::Down)).unwrap();
    assert_eq!(q.precision(), decimalfp::limit_prec());
    assert!(q.to_string().starts_with("0.666666"));
}

#[test]
fn floor_div_and_rem_satisfy_the_division_identity() {
    let a = Decimal::from_i64(-7);
    let b = Decimal::from_i64(2);
    let (q, r) = a.checked_divmod(&b).unwrap();
    assert_eq!(q.to_string(), "-4");
    assert_eq!(r.to_string(), "1");
    assert_eq!((&(&q * &b) + &r).to_string(), a.to_string());
}
