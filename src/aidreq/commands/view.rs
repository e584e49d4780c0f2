use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use crate::store::DataStore;

use super::parse_request_id;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<ItemRequest> {
    let id = id.trim();
    let uuid = parse_request_id(id)?;
    store
        .find_by_id(&uuid)?
        .ok_or_else(|| AidreqError::NotFound(id.to_string()))
}
