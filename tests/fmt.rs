use decimalfp::Decimal;

#[test]
fn default_display_shows_the_stored_precision() {
    let d = Decimal::parse("3.140").unwrap();
    assert_eq!(d.to_string(), "3.140");
}

#[test]
fn format_groups_thousands_and_rounds_to_a_fixed_precision() {
    let d = Decimal::parse("1234567890.12345678901234567890").unwrap();
    assert_eq!(d.format(",.4f").unwrap(), "1,234,567,890.1235");
}

#[test]
fn format_percent_type_scales_and_appends_suffix() {
    let d = Decimal::parse("0.5").unwrap();
    assert_eq!(d.format(".0%").unwrap(), "50%");
}

#[test]
fn format_rejects_alternate_form_and_scientific_types() {
    let d = Decimal::from_i64(1);
    assert!(d.format("#").is_err());
    assert!(d.format(".2e").is_err());
    assert!(d.format(".2g").is_err());
}

#[test]
fn format_honors_width_fill_and_alignment() {
    let d = Decimal::parse("42").unwrap();
    assert_eq!(d.format("*^8").unwrap(), "***42***");
}
