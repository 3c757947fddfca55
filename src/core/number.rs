//! Integer-or-float values and the arithmetic the calculator runs on.
//!
//! Integers stay integers until a float shows up or an `i64` operation would
//! overflow; either way the result continues in floating point.

use std::fmt;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

use serde::Deserialize;

use crate::core::error::NumberError;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub const ZERO: Number = Number::Int(0);
    pub const ONE: Number = Number::Int(1);

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }
}

/// Parse text the way the validation helper coerces it: surrounding
/// whitespace is ignored, integer literals stay integral, anything else must
/// be a float literal (including `inf`, `infinity` and `nan` in any case).
/// A single `_` between two digits is a separator (`1_000`); leading,
/// trailing or doubled underscores are rejected.
pub fn parse_number(text: &str) -> Result<Number, NumberError> {
    text.parse()
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = strip_digit_separators(s.trim()).ok_or_else(|| NumberError::invalid(s))?;
        if let Ok(i) = text.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        text.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| NumberError::invalid(s))
    }
}

fn strip_digit_separators(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let prev = text[..i].chars().next_back();
        let next = text[i + 1..].chars().next();
        match (prev, next) {
            (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(i64::from(v))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Number::Float(a as f64 + b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map_or_else(|| Number::Float(a as f64 * b as f64), Number::Int),
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(i) => i
                .checked_neg()
                .map_or_else(|| Number::Float(-(i as f64)), Number::Int),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

// Numeric, not structural: Int(5) == Float(5.0).
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => f.write_str(&format_float(x)),
        }
    }
}

/// Render a float the way the demo output expects: `3.0` rather than `3`,
/// shortest round-trip digits otherwise, and `inf`/`-inf`/`nan` for the rest.
///
/// Never switches to exponent notation: `0.00001` and `1e16` print in plain
/// digits (`0.00001`, `10000000000000000`) where Python's repr would give
/// `1e-05` and `1e+16`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}
