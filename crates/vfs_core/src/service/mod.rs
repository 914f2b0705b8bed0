//! Shell-facing services.
//!
//! # Responsibility
//! - Turn raw input lines into store calls and display text.
//! - Keep REPL/binary layers free of store and formatting details.

pub mod shell_service;
pub mod tokenizer;
pub mod usage;
