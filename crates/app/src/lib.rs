//! # papersync Application
//!
//! Command-line layer: argument parsing, wiring and one command per mode.
//!
//! This crate contains:
//! - The `papersync` CLI definition
//! - Application context (dependency injection)
//! - Mode commands (`add`, `remove`, `stats`, `archive`)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires adapters into the core services

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::Cli;
pub use commands::run;
pub use context::AppContext;
