//! Utilities composed from the calculator primitives.

use tracing::debug;

use crate::core::calculator::{add, calculate_total, multiply};
use crate::core::number::{parse_number, Number};

/// Check if a value can be coerced to a number.
pub fn validate_number(value: &str) -> bool {
    parse_number(value).is_ok()
}

/// Calculate the average of a list of numbers, `0.0` for an empty list.
pub fn calculate_average<T: Copy + Into<Number>>(numbers: &[T]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let total = calculate_total(numbers);
    total.as_f64() / numbers.len() as f64
}

/// Apply a percentage discount to a price.
///
/// The percentage is not clamped: `150` yields a negative price and a
/// negative percentage raises it.
pub fn apply_discount(
    original_price: impl Into<Number>,
    discount_percent: impl Into<Number>,
) -> Number {
    let price = original_price.into();
    let rate = Number::Float(discount_percent.into().as_f64() / 100.0);
    let discount_amount = multiply(price, rate);
    debug!(%price, %discount_amount, "apply_discount");
    add(price, -discount_amount)
}

/// `((value + 10) * 2) + 5`, one primitive call per step.
pub fn chain_operations(value: impl Into<Number>) -> Number {
    let step1 = add(value, 10);
    let step2 = multiply(step1, 2);
    add(step2, 5)
}
