use lsp_demo::{apply_discount, calculate_average, chain_operations, validate_number, Number};

#[test]
fn average_of_sample() {
    assert_eq!(calculate_average(&[1, 2, 3, 4, 5]), 3.0);
    assert_eq!(calculate_average(&[1, 2]), 1.5);
    assert_eq!(calculate_average(&[Number::Float(0.5), Number::Int(-1)]), -0.25);
}

#[test]
fn average_of_nothing_is_zero() {
    let empty: [i64; 0] = [];
    assert_eq!(calculate_average(&empty), 0.0);
}

#[test]
fn discount() {
    assert_eq!(apply_discount(100.0, 10.0), Number::Float(90.0));
    assert_eq!(apply_discount(100.0, 10.0).to_string(), "90.0");
    assert_eq!(apply_discount(50, 20).to_string(), "40.0");
}

#[test]
fn zero_discount_keeps_price() {
    for p in [0.0, 19.99, -5.0, 1e9] {
        assert_eq!(apply_discount(p, 0), Number::Float(p), "price {p}");
    }
    assert_eq!(apply_discount(42, 0), Number::Int(42));
}

#[test]
fn discount_is_not_clamped() {
    assert_eq!(apply_discount(100, 150), Number::Float(-50.0));
    assert_eq!(apply_discount(100, -50), Number::Float(150.0));
}

#[test]
fn chain() {
    assert_eq!(chain_operations(5), Number::Int(35));
    assert!(chain_operations(5).is_int());
    assert_eq!(chain_operations(0), Number::Int(25));
    assert_eq!(chain_operations(-10), Number::Int(5));
    assert_eq!(chain_operations(0.5), Number::Float(26.0));
}

#[test]
fn validation() {
    assert!(!validate_number("abc"));
    assert!(validate_number("3.14"));
    assert!(validate_number(" 42 "));
    assert!(validate_number("-1e-3"));
    assert!(validate_number("Infinity"));
    assert!(validate_number("nan"));
    assert!(!validate_number(""));
    assert!(!validate_number("3.14.15"));
    assert!(!validate_number("12abc"));
    assert!(validate_number("1_000"));
    assert!(validate_number("3.141_592"));
    assert!(!validate_number("_1"));
    assert!(!validate_number("1__0"));
    assert!(!validate_number("1_"));
}
