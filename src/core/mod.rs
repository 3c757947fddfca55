//! Core module tree: the number model, the calculator library and the
//! pieces the binary reports through.

pub mod calculator;
pub mod diagnostics;
pub mod error;
pub mod number;
pub mod report;
pub mod utils;
pub mod debug; // tracing subscriber setup (LSP_DEMO_LOG)
