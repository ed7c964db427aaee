use decimalfp::Decimal;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

#[test]
fn zero_compares_equal_regardless_of_precision() {
    let a = Decimal::with_precision(0);
    let b = Decimal::with_precision(6);
    assert_eq!(a, b);
}

#[test]
fn decimal_equals_an_equal_valued_float() {
    let d = Decimal::parse("17.800").unwrap();
    assert_eq!(d, 17.8f64);
    assert!(d < 18.0f64);
    assert!(d > 17.0f64);
}

#[test]
fn decimal_equals_an_equal_valued_integer() {
    let d = Decimal::parse("10.00").unwrap();
    assert_eq!(d, 10i64);
    assert_eq!(d, 10u32);
}

#[test]
fn decimal_orders_against_a_rational_tuple() {
    let d = Decimal::parse("0.5").unwrap();
    assert_eq!(d, (1i64, 2i64));
    assert!(d < (3i64, 5i64));
}

#[test]
fn equal_decimals_hash_equal_to_each_other() {
    let a = Decimal::parse("17.8").unwrap();
    let b = Decimal::parse("17.800").unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn nan_is_never_ordered() {
    let d = Decimal::from_i64(1);
    assert_eq!(d.partial_cmp(&f64::NAN), None);
}
