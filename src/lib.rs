//! Toy calculator library used as a playground for editor tooling: jump to
//! `calculate_total`, find references to `chain_operations`, rename
//! `calculate_product`, hover `apply_discount`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use crate::core::calculator::{add, calculate_product, calculate_total, multiply};
pub use crate::core::number::{parse_number, Number};
pub use crate::core::utils::{apply_discount, calculate_average, chain_operations, validate_number};
