use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::core::calculator::{calculate_product, calculate_total};
use crate::core::number::{format_float, Number};
use crate::core::report::DemoResults;
use crate::core::utils::{apply_discount, calculate_average, chain_operations};

/// Command-line overrides layered on top of the config file.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub numbers: Vec<Number>,
    pub price: Option<Number>,
    pub discount: Option<Number>,
    pub seed: Option<Number>,
}

impl RunOptions {
    pub fn resolve_config(self) -> anyhow::Result<DemoConfig> {
        let mut cfg = DemoConfig::resolve(self.config.as_deref())?;
        if !self.numbers.is_empty() {
            cfg.numbers = self.numbers;
        }
        if let Some(p) = self.price {
            cfg.price = p;
        }
        if let Some(d) = self.discount {
            cfg.discount = d;
        }
        if let Some(s) = self.seed {
            cfg.seed = s;
        }
        Ok(cfg)
    }
}

pub fn main_with_opts(opts: RunOptions) -> anyhow::Result<()> {
    let cfg = opts.resolve_config()?;
    debug!(?cfg, "resolved demo config");
    info!(count = cfg.numbers.len(), "running demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&cfg, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Compute every demo result, printing each as it is produced, then the
/// labelled summary.
pub fn run_demo<W: Write>(cfg: &DemoConfig, out: &mut W) -> io::Result<DemoResults> {
    let total = calculate_total(&cfg.numbers);
    writeln!(out, "Total: {total}")?;

    let product = calculate_product(&cfg.numbers);
    writeln!(out, "Product: {product}")?;

    let average = calculate_average(&cfg.numbers);
    writeln!(out, "Average: {}", format_float(average))?;

    let final_price = apply_discount(cfg.price, cfg.discount);
    writeln!(out, "Price after {}% discount: ${final_price}", cfg.discount)?;

    let chain_result = chain_operations(cfg.seed);
    writeln!(out, "Chain result: {chain_result}")?;

    let results = DemoResults {
        total,
        product,
        average,
        final_price,
        chain_result,
    };
    results.write_summary(out)?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");
        std::fs::write(&path, "price = 80\nseed = 1\n").unwrap();

        let cfg = RunOptions {
            config: Some(path),
            numbers: vec![Number::Int(9)],
            seed: Some(Number::Int(2)),
            ..RunOptions::default()
        }
        .resolve_config()
        .unwrap();

        assert_eq!(cfg.numbers, vec![Number::Int(9)]);
        assert_eq!(cfg.price, Number::Int(80));
        assert_eq!(cfg.seed, Number::Int(2));
        assert_eq!(cfg.discount, Number::Float(10.0));
    }

    #[test]
    fn empty_numbers_still_report() {
        let cfg = DemoConfig {
            numbers: Vec::new(),
            ..DemoConfig::default()
        };
        let mut buf = Vec::new();
        let results = run_demo(&cfg, &mut buf).unwrap();
        assert_eq!(results.total, Number::Int(0));
        assert_eq!(results.product, Number::Int(1));
        assert_eq!(results.average, 0.0);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Total: 0\nProduct: 1\nAverage: 0.0\n"), "{text}");
    }
}
