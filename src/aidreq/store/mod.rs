//! # Storage Layer
//!
//! The [`DataStore`] trait is the document-collection contract the rest of the crate
//! is written against. It is intentionally small, shaped after what a document
//! database offers:
//!
//! - insert one record
//! - look one record up by id
//! - atomically update one record's status
//! - count matching records
//! - fetch a sorted, skipped, limited slice of matching records
//!
//! There is no delete. Request history is append-and-mutate only.
//!
//! ## Store vs Backend
//!
//! [`request_store::RequestStore`] implements the collection semantics (filtering,
//! ordering, single-record updates) on top of a [`backend::StorageBackend`], which only
//! knows how to load and save the raw index:
//!
//! - [`fs_backend::FsBackend`]: a `requests.json` file, written atomically.
//! - [`mem_backend::MemBackend`]: a `RefCell`'d map, for tests.
//!
//! [`fs::FileStore`] and [`memory::InMemoryStore`] are the two assembled stores.
//!
//! ## Storage Layout
//!
//! ```text
//! $AIDREQ_HOME/
//! ├── requests.json    # HashMap<Uuid, ItemRequest>
//! ├── requests.lock    # advisory lock held by writers
//! └── config.json      # AidreqConfig
//! ```
//!
//! ## Consistency
//!
//! Each write replaces the whole index in one rename, so a failed write leaves the
//! previous state intact. Writers take an exclusive lock around their
//! load-modify-save cycle (see [`backend::StorageBackend::with_exclusive`]), so two
//! processes sharing a data dir never drop each other's changes. Reads take no lock:
//! counts and slices are separate reads and may observe different snapshots while a
//! writer is active, so listings are advisory.

use crate::error::Result;
use crate::model::ItemRequest;
use crate::status::RequestStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod request_store;

/// Equality filter applied to listings and counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
}

impl RequestFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: RequestStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn matches(&self, request: &ItemRequest) -> bool {
        match self.status {
            Some(status) => request.status == status,
            None => true,
        }
    }
}

/// Abstract interface for the item request collection.
pub trait DataStore {
    /// Persist a newly constructed request.
    fn insert(&mut self, request: &ItemRequest) -> Result<()>;

    /// Look a request up by id. `Ok(None)` when absent.
    fn find_by_id(&self, id: &Uuid) -> Result<Option<ItemRequest>>;

    /// Set status and edit time on one record in a single write.
    /// Returns the updated record, or `Ok(None)` if no record has this id.
    fn update_status(
        &mut self,
        id: &Uuid,
        status: RequestStatus,
        edited_at: DateTime<Utc>,
    ) -> Result<Option<ItemRequest>>;

    /// Number of records matching `filter`.
    fn count(&self, filter: &RequestFilter) -> Result<usize>;

    /// Matching records, newest first, after skipping `skip` and keeping at most `limit`.
    fn find(&self, filter: &RequestFilter, skip: usize, limit: usize)
        -> Result<Vec<ItemRequest>>;
}
