//! # CLI Behavior
//!
//! This is **one possible UI client** for aidreq, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`aidreq`].
//!
//! ## Output Modes
//!
//! - Default: colored tables for humans, one line per request.
//! - `--json`: the same payloads the library returns, serialized as JSON on stdout.
//!   Failures print an error envelope (`{"error": "...", "message": "..."}`) on stdout
//!   in addition to the `Error:` line on stderr.
//!
//! Logs always go to stderr, so `--json` output stays machine-readable.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
