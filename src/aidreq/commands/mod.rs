//! # Command Layer
//!
//! This module holds the request lifecycle logic. Each operation lives in its own
//! submodule as a plain function generic over [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! - Take *validated* inputs (validation happens in the API facade, before any store access)
//! - Apply status workflow rules and stamp timestamps
//! - Delegate page arithmetic to the [`Paginator`](crate::pagination::Paginator)
//! - Return domain types (`ItemRequest`, `PaginatedResult`)
//!
//! Commands never print, never exit, and never retry. A store error is returned as-is.
//!
//! ## Testing Strategy
//!
//! This is where most tests live. They run against `InMemoryStore`, seeded through
//! `StoreFixture` where useful.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a new request (always `pending`)
//! - [`list`]: Filtered, paginated listing
//! - [`update`]: Change a request's status
//! - [`view`]: Fetch one request by id

use crate::error::{AidreqError, Result};
use uuid::Uuid;

pub mod create;
pub mod list;
pub mod update;
pub mod view;

/// Ids are opaque strings at the edge. One that is not a well-formed UUID cannot
/// match any stored record, so it is reported the same way as an absent one.
pub(crate) fn parse_request_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AidreqError::NotFound(id.to_string()))
}
