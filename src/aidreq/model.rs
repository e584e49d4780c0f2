//! # Domain Model
//!
//! [`ItemRequest`] is the only entity: one requested item plus where it sits in the
//! review workflow.
//!
//! ## Lifecycle
//!
//! - **Created** only through [`ItemRequest::new`], which takes a [`CreateRequest`]
//!   (i.e. input that already passed validation). Status is forced to `pending` and
//!   both timestamps are set to the same instant.
//! - **Mutated** only through [`ItemRequest::set_status`], which changes the status and
//!   refreshes `last_edited_date`. Every other field is immutable after creation.
//! - **Never deleted.**
//!
//! Construction and mutation each have a single entry point, which is where the field
//! bounds and the `last_edited_date >= request_created_date` ordering are established.
//! Records read back from disk bypass both, so the file backend re-checks them with
//! [`ItemRequest::check_invariants`].

use crate::status::RequestStatus;
use crate::validation::{validate_create, CreateRequest, RawCreateRequest, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub id: Uuid,
    pub requestor_name: String,
    pub item_requested: String,
    pub request_created_date: DateTime<Utc>,
    #[serde(default)]
    pub last_edited_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: RequestStatus,
}

impl ItemRequest {
    pub fn new(input: CreateRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            requestor_name: input.requestor_name().to_string(),
            item_requested: input.item_requested().to_string(),
            request_created_date: now,
            last_edited_date: Some(now),
            status: RequestStatus::initial(),
        }
    }

    /// Moves the request to `status` and stamps the edit time.
    ///
    /// The edit time never goes behind creation, even if the caller's clock does.
    pub fn set_status(&mut self, status: RequestStatus, now: DateTime<Utc>) {
        self.status = status;
        self.last_edited_date = Some(now.max(self.request_created_date));
    }

    /// Re-check the bounds and timestamp ordering that `new`/`set_status` guarantee.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        let raw = RawCreateRequest::new(&self.requestor_name, &self.item_requested);
        let checked = validate_create(&raw)?;
        if checked.requestor_name() != self.requestor_name
            || checked.item_requested() != self.item_requested
        {
            return Err(ValidationError::Malformed(
                "text fields carry surrounding whitespace".to_string(),
            ));
        }
        if matches!(self.last_edited_date, Some(edited) if edited < self.request_created_date) {
            return Err(ValidationError::Malformed(
                "lastEditedDate precedes requestCreatedDate".to_string(),
            ));
        }
        Ok(())
    }

    /// Most recent activity on the request.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_edited_date.unwrap_or(self.request_created_date)
    }
}
