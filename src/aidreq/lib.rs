//! # Aidreq Architecture
//!
//! Aidreq tracks **item requests**: somebody asks for an item, a reviewer approves or
//! rejects it, and eventually it is marked completed. It is a UI-agnostic library that
//! happens to ship a CLI client; the same core could sit behind an HTTP handler.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates raw payloads (validation.rs)                   │
//! │  - Dispatches to commands, logs outcomes                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create, list (paginated), update status, view            │
//! │  - Operates on validated Rust types only                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns plain Rust types.
//! It never writes to stdout/stderr and never exits the process. Failures carry an
//! [`error::ErrorKind`] that a transport maps to a response through [`envelope`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: thorough unit tests against `InMemoryStore`.
//! 2. **API**: validation and dispatch, again in memory.
//! 3. **CLI**: end-to-end runs of the binary in `tests/`, with an isolated data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `ItemRequest` entity
//! - [`status`]: The review workflow states
//! - [`validation`]: Raw payloads and their checks
//! - [`pagination`]: Page arithmetic and the result envelope
//! - [`envelope`]: Response types and error bodies
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod status;
pub mod store;
pub mod validation;
