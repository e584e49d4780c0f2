use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use crate::store::DataStore;
use crate::validation::EditStatusRequest;
use chrono::Utc;

use super::parse_request_id;

/// Moves one request to a new status.
///
/// Any status may follow any other; see [`crate::status`]. The write is a single
/// per-record update, so a missing id leaves the collection untouched.
pub fn run<S: DataStore>(store: &mut S, edit: EditStatusRequest) -> Result<ItemRequest> {
    let id = parse_request_id(&edit.id)?;

    store
        .update_status(&id, edit.status, Utc::now())?
        .ok_or(AidreqError::NotFound(edit.id))
}
