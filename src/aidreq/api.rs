//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every request operation, whatever the client (CLI, HTTP handler, tests).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates** raw payloads before anything touches the store (fail fast, no side effects)
//! - **Dispatches** to the appropriate command function
//! - **Logs** outcomes: rejected input at `warn`, persistence failures at `error`
//! - **Returns structured types** (`Result<ItemRequest>`, `Result<PaginatedResult<_>>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Presentation**: No stdout, no formatting, no exit codes
//! - **Retries**: A persistence failure is reported once and handed back
//!
//! ## Generic Over DataStore
//!
//! `RequestApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RequestApi<FileStore>`
//! - Testing: `RequestApi<InMemoryStore>`
//!
//! The page size is injected through the [`Paginator`] at construction and cannot be
//! changed per call.

use crate::commands;
use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use crate::pagination::{PaginatedResult, Paginator};
use crate::status::RequestStatus;
use crate::store::DataStore;
use crate::validation::{
    is_valid_status, parse_status_filter, validate_create, validate_edit_status, validate_page,
    EditStatusRequest, RawCreateRequest, RawEditStatusRequest,
};
use tracing::{debug, error, info, warn};

/// The main API facade for item request operations.
pub struct RequestApi<S: DataStore> {
    store: S,
    paginator: Paginator,
}

impl<S: DataStore> RequestApi<S> {
    pub fn new(store: S, paginator: Paginator) -> Self {
        Self { store, paginator }
    }

    pub fn create_request(&mut self, raw: &RawCreateRequest) -> Result<ItemRequest> {
        let input = validate_create(raw).map_err(|e| report("create", e.into()))?;
        let created =
            commands::create::run(&mut self.store, input).map_err(|e| report("create", e))?;

        info!(id = %created.id, item = %created.item_requested, "item request created");
        Ok(created)
    }

    /// Create a request and immediately approve it.
    ///
    /// These are two separate writes. If the approval fails the request still
    /// exists as `pending`.
    pub fn create_approved(&mut self, raw: &RawCreateRequest) -> Result<ItemRequest> {
        let created = self.create_request(raw)?;
        let edit = EditStatusRequest {
            id: created.id.to_string(),
            status: RequestStatus::Approved,
        };
        self.apply_edit(edit)
    }

    /// The query surface. An unrecognized `status` lists everything; `page < 1` is
    /// rejected.
    pub fn list_requests(
        &self,
        status: Option<&str>,
        page: i64,
    ) -> Result<PaginatedResult<ItemRequest>> {
        let page = validate_page(page).map_err(|e| report("list", e.into()))?;
        if let Some(raw) = status.filter(|s| !is_valid_status(s)) {
            debug!(status = raw, "unrecognized status filter, listing all");
        }
        let filter = parse_status_filter(status);

        let result = commands::list::run(&self.store, &self.paginator, filter, page)
            .map_err(|e| report("list", e))?;

        debug!(
            page,
            total_records = result.total_records,
            total_pages = result.total_pages,
            returned = result.data.len(),
            "listed item requests"
        );
        Ok(result)
    }

    pub fn edit_request_status(&mut self, raw: &RawEditStatusRequest) -> Result<ItemRequest> {
        let edit = validate_edit_status(raw).map_err(|e| report("edit", e.into()))?;
        self.apply_edit(edit)
    }

    pub fn get_request(&self, id: &str) -> Result<ItemRequest> {
        commands::view::run(&self.store, id).map_err(|e| report("view", e))
    }

    fn apply_edit(&mut self, edit: EditStatusRequest) -> Result<ItemRequest> {
        let status = edit.status;
        let updated =
            commands::update::run(&mut self.store, edit).map_err(|e| report("edit", e))?;

        info!(id = %updated.id, %status, "item request status changed");
        Ok(updated)
    }
}

/// Log a failed operation at a level matching its cause, then hand the error back.
fn report(operation: &str, err: AidreqError) -> AidreqError {
    if err.is_client_error() {
        warn!(operation, error = %err, "request rejected");
    } else {
        error!(operation, error = %err, "request failed");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    fn api() -> RequestApi<InMemoryStore> {
        RequestApi::new(InMemoryStore::new(), Paginator::new(6).unwrap())
    }

    #[test]
    fn create_validates_then_persists() {
        let mut api = api();
        let created = api
            .create_request(&RawCreateRequest::new("  Ana Silva ", " water filter "))
            .unwrap();
        assert_eq!(created.requestor_name, "Ana Silva");
        assert_eq!(created.item_requested, "water filter");
        assert_eq!(created.status, RequestStatus::Pending);
        assert_eq!(created.last_edited_date, Some(created.request_created_date));
    }

    #[test]
    fn invalid_create_never_reaches_store() {
        let mut api = api();
        let err = api
            .create_request(&RawCreateRequest::new("Al", "water"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(api.list_requests(None, 1).unwrap().total_records, 0);
    }

    #[test]
    fn create_approved_ends_up_approved() {
        let mut api = api();
        let approved = api
            .create_approved(&RawCreateRequest::new("Field Team", "radios"))
            .unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);

        let listed = api.list_requests(Some("approved"), 1).unwrap();
        assert_eq!(listed.data[0].id, approved.id);
    }

    #[test]
    fn list_rejects_non_positive_pages() {
        let api = api();
        assert_eq!(
            api.list_requests(None, 0).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            api.list_requests(Some("pending"), -1).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn far_past_the_end_is_an_empty_page() {
        let mut api = api();
        api.create_request(&RawCreateRequest::new("Alice", "water"))
            .unwrap();

        let result = api.list_requests(None, 5_000_000_000).unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.total_records, 1);
        assert_eq!(result.current_page, 5_000_000_000);
    }

    #[test]
    fn unknown_filter_lists_everything() {
        let mut api = api();
        api.create_request(&RawCreateRequest::new("Alice", "water"))
            .unwrap();
        api.create_approved(&RawCreateRequest::new("Bobby", "bread"))
            .unwrap();

        let result = api.list_requests(Some("archived"), 1).unwrap();
        assert_eq!(result.total_records, 2);
    }

    #[test]
    fn edit_validates_status() {
        let mut api = api();
        let created = api
            .create_request(&RawCreateRequest::new("Alice", "water"))
            .unwrap();

        let err = api
            .edit_request_status(&RawEditStatusRequest::new(
                created.id.to_string(),
                "done",
            ))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            api.get_request(&created.id.to_string()).unwrap().status,
            RequestStatus::Pending
        );
    }

    #[test]
    fn edit_unknown_id_is_not_found() {
        let mut api = api();
        let err = api
            .edit_request_status(&RawEditStatusRequest::new(
                Uuid::new_v4().to_string(),
                "approved",
            ))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn edit_round_trip() {
        let mut api = api();
        let created = api
            .create_request(&RawCreateRequest::new("Alice", "water"))
            .unwrap();
        let updated = api
            .edit_request_status(&RawEditStatusRequest::new(
                format!("  {}  ", created.id),
                "rejected",
            ))
            .unwrap();
        assert_eq!(updated.status, RequestStatus::Rejected);
        assert_eq!(api.get_request(&created.id.to_string()).unwrap(), updated);
    }
}
