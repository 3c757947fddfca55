use std::io::{self, Write};

use crate::core::utils::validate_number;

/// Prints one verdict per value. Returns `Ok(false)` if any value is invalid.
pub fn main_with_opts(values: &[String]) -> anyhow::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let all_valid = report(values, &mut out)?;
    out.flush()?;
    Ok(all_valid)
}

pub fn report<W: Write>(values: &[String], out: &mut W) -> io::Result<bool> {
    let mut all_valid = true;
    for value in values {
        let verdict = if validate_number(value) {
            "valid"
        } else {
            all_valid = false;
            "invalid"
        };
        writeln!(out, "{value}: {verdict}")?;
    }
    Ok(all_valid)
}
