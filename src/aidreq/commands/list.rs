use crate::error::Result;
use crate::model::ItemRequest;
use crate::pagination::{PaginatedResult, Paginator};
use crate::status::RequestStatus;
use crate::store::{DataStore, RequestFilter};

/// One page of requests, optionally restricted to a single status.
///
/// `page` must already be validated (>= 1). Pages past the end of a non-empty
/// collection come back empty without touching the slice query.
pub fn run<S: DataStore>(
    store: &S,
    paginator: &Paginator,
    status: Option<RequestStatus>,
    page: u64,
) -> Result<PaginatedResult<ItemRequest>> {
    let filter = match status {
        Some(status) => RequestFilter::with_status(status),
        None => RequestFilter::all(),
    };

    let total_records = store.count(&filter)?;
    let window = paginator.window(page, total_records);

    if window.is_past_end() {
        return Ok(paginator.envelope(Vec::new(), &window));
    }

    let data = store.find(&filter, window.skip, window.limit)?;
    Ok(paginator.envelope(data, &window))
}
