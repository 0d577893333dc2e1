//! Configuration loading
//!
//! Settings come from the process environment (after `.env` has been
//! applied) or from a `papersync.toml` / `papersync.json` file.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
