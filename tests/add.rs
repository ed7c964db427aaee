use decimalfp::Decimal;

#[test]
fn addition_aligns_to_the_finer_precision() {
    let a: Decimal = "1.5".parse().unwrap();
    let b: Decimal = "2.25".parse().unwrap();
    let sum = &a + &b;
    assert_eq!(sum.to_string(), "3.75");
    assert_eq!(sum.precision(), 2);
}

#[test]
fn subtraction_of_equal_values_is_exact_zero() {
    let a = Decimal::parse("5.0").unwrap();
    let b = Decimal::parse("5.00").unwrap();
    let diff = &a - &b;
    assert!(diff.is_zero());
    assert_eq!(diff.precision(), 2);
}

#[test]
fn multiplication_sums_precisions() {
    let price = Decimal::parse("19.99").unwrap();
    let qty = Decimal::from_i64(3);
    let total = &price * &qty;
    assert_eq!(total.to_string(), "59.97");
}

#[test]
fn pow_with_positive_exponent_multiplies_precision() {
    let x = Decimal::parse("1.1").unwrap();
    let y = x.checked_pow(2, None).unwrap();
    assert_eq!(y.precision(), 2);
    assert_eq!(y.to_string(), "1.21");
}
