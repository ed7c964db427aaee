use decimalfp::Decimal;

#[test]
fn parses_a_plain_decimal_literal() {
    let d: Decimal = "17.800".parse().unwrap();
    assert_eq!(d.precision(), 3);
    assert_eq!(d.to_string(), "17.800");
}

#[test]
fn parses_signed_exponent_notation() {
    let d = Decimal::parse("-12345678901234567890.1234567890E-10").unwrap();
    assert_eq!(d.precision(), 20);
    assert!(d.is_negative());
}

#[test]
fn rejects_malformed_input() {
    assert!(Decimal::parse("").is_err());
    assert!(Decimal::parse(".").is_err());
    assert!(Decimal::parse("12.3.4").is_err());
    assert!(Decimal::parse("abc").is_err());
}

#[test]
fn parse_with_precision_applies_rounding() {
    use decimalfp::RoundingMode;
    let d = Decimal::parse_with_precision("17.849", 1, Some(RoundingMode::HalfUp)).unwrap();
    assert_eq!(d.to_string(), "17.8");
}
