//! Admin credential bootstrap for the WebUI.
//!
//! Ensures an administrative password exists at startup, is not a known
//! default, and is persisted to a flat key=value file so later restarts
//! reuse it.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Business logic (generator, store, manager)
//! - `models` — Data structures

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
