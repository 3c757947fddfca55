//! The labelled results of one demo run.

use std::io::{self, Write};

use crate::core::number::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoResults {
    pub total: Number,
    pub product: Number,
    pub average: f64,
    pub final_price: Number,
    pub chain_result: Number,
}

impl DemoResults {
    /// Label/value pairs in print order.
    pub fn entries(&self) -> [(&'static str, Number); 5] {
        [
            ("total", self.total),
            ("product", self.product),
            ("average", Number::Float(self.average)),
            ("final_price", self.final_price),
            ("chain_result", self.chain_result),
        ]
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Final results:")?;
        for (key, value) in self.entries() {
            writeln!(out, "  {key}: {value}")?;
        }
        Ok(())
    }
}
