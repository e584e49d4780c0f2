use crate::error::Result;
use crate::model::ItemRequest;
use crate::store::DataStore;
use crate::validation::CreateRequest;
use chrono::Utc;

pub fn run<S: DataStore>(store: &mut S, input: CreateRequest) -> Result<ItemRequest> {
    let request = ItemRequest::new(input, Utc::now());
    store.insert(&request)?;
    Ok(request)
}
