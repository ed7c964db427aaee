use decimalfp::{Decimal, RoundingMode};

#[test]
fn adjusted_strips_trailing_zeros_with_no_target_precision() {
    let d = Decimal::parse("17.800").unwrap();
    let stripped = d.adjusted(None, None).unwrap();
    assert_eq!(stripped.to_string(), "17.8");
}

#[test]
fn adjusted_rounds_half_even_by_default() {
    let d = Decimal::parse("2.5").unwrap();
    let rounded = d.adjusted(Some(0), None).unwrap();
    assert_eq!(rounded.to_string(), "2");

    let d = Decimal::parse("3.5").unwrap();
    let rounded = d.adjusted(Some(0), None).unwrap();
    assert_eq!(rounded.to_string(), "4");
}

#[test]
fn quantize_snaps_to_an_arbitrary_step() {
    let price = Decimal::parse("2.48").unwrap();
    let step = Decimal::parse("0.25").unwrap();
    let snapped = price.quantize(&step, None).unwrap();
    assert_eq!(snapped.to_string(), "2.50");
}

#[test]
fn floor_ceil_trunc_disagree_on_negative_values() {
    let d = Decimal::parse("-1.5").unwrap();
    assert_eq!(d.floor().to_string(), "-2");
    assert_eq!(d.ceil().to_string(), "-1");
    assert_eq!(d.trunc().to_string(), "-1");
}

#[test]
fn rounding_mode_can_be_overridden_per_call() {
    let d = Decimal::parse("17.849").unwrap();
    let up = d.round(1, Some(RoundingMode::HalfUp)).unwrap();
    assert_eq!(up.to_string(), "17.8");
}
