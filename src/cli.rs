use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::number::{parse_number, Number};

#[derive(Debug, Parser)]
#[command(
    name = "lsp-demo",
    about = "Toy calculator library driver for exercising editor tooling",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct DemoCli {
    /// Global: path to config (TOML); default: ~/.lsp-demo/demo.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the demo and print its results (default)
    ///
    /// Examples:
    ///   lsp-demo run
    ///   lsp-demo run 2 4 6 --price 50 --discount 20
    Run {
        /// Numbers to aggregate instead of the sample data
        #[arg(value_name = "NUMBERS", value_parser = parse_number, allow_negative_numbers = true)]
        numbers: Vec<Number>,

        #[arg(long = "price", value_name = "PRICE", value_parser = parse_number, allow_negative_numbers = true)]
        price: Option<Number>,

        /// Discount percentage (not clamped)
        #[arg(long = "discount", value_name = "PCT", value_parser = parse_number, allow_negative_numbers = true)]
        discount: Option<Number>,

        /// Starting value for the chained operations
        #[arg(long = "seed", value_name = "VALUE", value_parser = parse_number, allow_negative_numbers = true)]
        seed: Option<Number>,
    },

    /// Report whether each value can be coerced to a number
    Validate {
        #[arg(value_name = "VALUES", required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        DemoCli::command().debug_assert();
    }

    #[test]
    fn run_parses_overrides() {
        let cli = DemoCli::try_parse_from(["lsp-demo", "run", "1", "-2.5", "--discount", "-5"]).unwrap();
        match cli.cmd {
            Some(Command::Run { numbers, discount, price, .. }) => {
                assert_eq!(numbers, vec![Number::Int(1), Number::Float(-2.5)]);
                assert_eq!(discount, Some(Number::Int(-5)));
                assert_eq!(price, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_rejects_non_numbers() {
        assert!(DemoCli::try_parse_from(["lsp-demo", "run", "abc"]).is_err());
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = DemoCli::try_parse_from(["lsp-demo"]).unwrap();
        assert!(cli.cmd.is_none());
        assert!(cli.config.is_none());
    }
}
