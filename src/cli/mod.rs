//! # CLI Module
//!
//! Command-line front end for the route synthesizer.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Synthesize and print every route of a model document:
//!
//! ```bash
//! restgen routes --model resources.yaml
//! restgen routes --model resources.yaml --format json --handlers
//! ```
//!
//! Options:
//! - `--model <FILE>` - Path to the model document (required)
//! - `--format <table|json|yaml>` - Output format (default: table)
//! - `--workers <N>` - Synthesis threads, overrides `RESTGEN_WORKERS`
//! - `--handlers` - Include provenance and handler names
//!
//! Exits non-zero when an instantiation failed, unless
//! `RESTGEN_FAIL_ON_DIAGNOSTICS=false`.
//!
//! ### `lint`
//!
//! ```bash
//! restgen lint --model resources.yaml --fail-on-error
//! ```
//!
//! ### `watch`
//!
//! Re-synthesize on every save and print a summary:
//!
//! ```bash
//! restgen watch --model resources.yaml
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, render_routes, run_cli, Cli, Commands, OutputFormat};
