//! lsp-demo main: runs the calculator demo by default.
use clap::Parser; // trait import enables DemoCli::parse()
use colored::Colorize;
use std::process::ExitCode;

use lsp_demo::cli::{Command, DemoCli};
use lsp_demo::commands::{self, run::RunOptions};
use lsp_demo::core::debug;
use lsp_demo::core::diagnostics::{self, Span};
use lsp_demo::core::error::ConfigError;

fn main() -> ExitCode {
    debug::init();
    let args = DemoCli::parse();

    match dispatch(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(args: DemoCli) -> anyhow::Result<bool> {
    match args.cmd {
        None => {
            commands::run::main_with_opts(RunOptions {
                config: args.config,
                ..RunOptions::default()
            })?;
            Ok(true)
        }
        Some(Command::Run {
            numbers,
            price,
            discount,
            seed,
        }) => {
            commands::run::main_with_opts(RunOptions {
                config: args.config,
                numbers,
                price,
                discount,
                seed,
            })?;
            Ok(true)
        }
        Some(Command::Validate { values }) => commands::validate::main_with_opts(&values),
    }
}

fn report_error(err: &anyhow::Error) {
    if let Some(ConfigError::Parse {
        path,
        message,
        text,
        span: Some(range),
    }) = err.downcast_ref::<ConfigError>()
    {
        let span = Span::from_byte_range(text, range.clone());
        diagnostics::print_error(&path.display().to_string(), text, message, span);
        return;
    }
    eprintln!("{} {err:#}", "error:".bright_red().bold());
}
