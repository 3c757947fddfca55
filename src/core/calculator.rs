//! Arithmetic primitives and the aggregators built on them.

use tracing::trace;

use crate::core::number::Number;

/// Add two numbers together.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    a.into() + b.into()
}

/// Multiply two numbers.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    a.into() * b.into()
}

/// Calculate the total of a list of values. Empty input totals `0`.
pub fn calculate_total<T: Copy + Into<Number>>(values: &[T]) -> Number {
    let mut result = Number::ZERO;
    for &value in values {
        result = add(result, value);
    }
    trace!(count = values.len(), %result, "calculate_total");
    result
}

/// Calculate the product of a list of values. Empty input multiplies to `1`.
pub fn calculate_product<T: Copy + Into<Number>>(values: &[T]) -> Number {
    let mut result = Number::ONE;
    for &value in values {
        result = multiply(result, value);
    }
    trace!(count = values.len(), %result, "calculate_product");
    result
}
