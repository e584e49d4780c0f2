//! # Validation Layer
//!
//! Payloads arrive loosely typed (JSON from a form, or CLI arguments). Nothing reaches
//! the store until it has passed through one of the validators here, which either
//! return the normalized payload or the constraint that was violated.
//!
//! ## Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `requestorName` | present, trimmed, 3..=30 chars |
//! | `itemRequested` | present, trimmed, 2..=100 chars |
//! | `id` (edit) | present, non-blank, trimmed |
//! | `status` (edit) | exact member of [`RequestStatus`] |
//! | `page` (query) | `>= 1` |
//!
//! Lengths are counted in chars after trimming, so surrounding whitespace never
//! counts towards (or against) a bound.
//!
//! The query surface is the one lenient spot: an unrecognized status filter is
//! not an error, it simply means "no filter" (see [`parse_status_filter`]).

use crate::status::RequestStatus;
use serde::Deserialize;
use thiserror::Error;

pub const REQUESTOR_NAME_MIN: usize = 3;
pub const REQUESTOR_NAME_MAX: usize = 30;
pub const ITEM_REQUESTED_MIN: usize = 2;
pub const ITEM_REQUESTED_MAX: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{0}")]
    UnknownStatus(#[from] crate::status::UnknownStatus),

    #[error("cannot move request from {from} to {to}")]
    IllegalTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("page number must be 1 or greater (got {0})")]
    PageOutOfRange(i64),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Creation payload as received, before any checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCreateRequest {
    #[serde(default)]
    pub requestor_name: Option<String>,
    #[serde(default)]
    pub item_requested: Option<String>,
}

impl RawCreateRequest {
    pub fn new(requestor_name: impl Into<String>, item_requested: impl Into<String>) -> Self {
        Self {
            requestor_name: Some(requestor_name.into()),
            item_requested: Some(item_requested.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

/// Status-edit payload as received, before any checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEditStatusRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RawEditStatusRequest {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            status: Some(status.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

/// A creation payload that passed validation.
///
/// Fields are private: the only way to get one is [`validate_create`], which is
/// what lets [`crate::model::ItemRequest::new`] trust the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    requestor_name: String,
    item_requested: String,
}

impl CreateRequest {
    pub fn requestor_name(&self) -> &str {
        &self.requestor_name
    }

    pub fn item_requested(&self) -> &str {
        &self.item_requested
    }
}

/// A status-edit payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStatusRequest {
    pub id: String,
    pub status: RequestStatus,
}

pub fn validate_create(input: &RawCreateRequest) -> Result<CreateRequest, ValidationError> {
    let requestor_name = bounded_text(
        "requestorName",
        input.requestor_name.as_deref(),
        REQUESTOR_NAME_MIN,
        REQUESTOR_NAME_MAX,
    )?;
    let item_requested = bounded_text(
        "itemRequested",
        input.item_requested.as_deref(),
        ITEM_REQUESTED_MIN,
        ITEM_REQUESTED_MAX,
    )?;

    Ok(CreateRequest {
        requestor_name,
        item_requested,
    })
}

pub fn validate_edit_status(
    input: &RawEditStatusRequest,
) -> Result<EditStatusRequest, ValidationError> {
    let id = input
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingField("id"))?;

    let status = match input.status.as_deref() {
        None | Some("") => return Err(ValidationError::MissingField("status")),
        Some(raw) => raw.parse::<RequestStatus>()?,
    };

    Ok(EditStatusRequest {
        id: id.to_string(),
        status,
    })
}

/// Exact membership test against the closed status set.
pub fn is_valid_status(value: &str) -> bool {
    value.parse::<RequestStatus>().is_ok()
}

/// Query-side status parsing: anything unrecognized means "all statuses".
pub fn parse_status_filter(value: Option<&str>) -> Option<RequestStatus> {
    value.and_then(|v| v.parse().ok())
}

/// Pages are 1-indexed. Zero and negatives are rejected, never clamped.
pub fn validate_page(page: i64) -> Result<u64, ValidationError> {
    if page < 1 {
        return Err(ValidationError::PageOutOfRange(page));
    }
    Ok(page.unsigned_abs())
}

fn bounded_text(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ValidationError::MissingField(field))?;

    let actual = trimmed.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { field, min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(trimmed.to_string())
}
