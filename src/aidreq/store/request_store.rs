use super::backend::StorageBackend;
use super::{DataStore, RequestFilter};
use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use crate::pagination::newest_first;
use crate::status::RequestStatus;
use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct RequestStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RequestStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    fn matching(&self, filter: &RequestFilter) -> Result<Vec<ItemRequest>> {
        let index = self.backend.load_index()?;
        Ok(index.into_values().filter(|r| filter.matches(r)).collect())
    }
}

impl<B: StorageBackend> DataStore for RequestStore<B> {
    fn insert(&mut self, request: &ItemRequest) -> Result<()> {
        self.backend.with_exclusive(|| {
            let mut index = self.backend.load_index()?;
            if index.contains_key(&request.id) {
                return Err(AidreqError::Store(format!(
                    "duplicate request id {}",
                    request.id
                )));
            }
            index.insert(request.id, request.clone());
            self.backend.save_index(&index)
        })
    }

    fn find_by_id(&self, id: &Uuid) -> Result<Option<ItemRequest>> {
        let mut index = self.backend.load_index()?;
        Ok(index.remove(id))
    }

    fn update_status(
        &mut self,
        id: &Uuid,
        status: RequestStatus,
        edited_at: DateTime<Utc>,
    ) -> Result<Option<ItemRequest>> {
        self.backend.with_exclusive(|| {
            let mut index = self.backend.load_index()?;
            let Some(request) = index.get_mut(id) else {
                return Ok(None);
            };
            if !request.status.can_transition(status) {
                return Err(AidreqError::from(ValidationError::IllegalTransition {
                    from: request.status,
                    to: status,
                }));
            }
            request.set_status(status, edited_at);
            let updated = request.clone();

            self.backend.save_index(&index)?;
            Ok(Some(updated))
        })
    }

    fn count(&self, filter: &RequestFilter) -> Result<usize> {
        Ok(self.matching(filter)?.len())
    }

    fn find(
        &self,
        filter: &RequestFilter,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<ItemRequest>> {
        let mut requests = self.matching(filter)?;
        requests.sort_by(newest_first);
        Ok(requests.into_iter().skip(skip).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::validation::{validate_create, RawCreateRequest};
    use chrono::Duration;

    fn make_store() -> RequestStore<MemBackend> {
        RequestStore::with_backend(MemBackend::new())
    }

    fn request_at(name: &str, created: DateTime<Utc>) -> ItemRequest {
        let input = validate_create(&RawCreateRequest::new(name, "canned food")).unwrap();
        ItemRequest::new(input, created)
    }

    // --- Insert / Lookup ---

    #[test]
    fn test_insert_and_find_by_id() {
        let mut store = make_store();
        let req = request_at("Alice", Utc::now());
        store.insert(&req).unwrap();

        let found = store.find_by_id(&req.id).unwrap().unwrap();
        assert_eq!(found, req);
    }

    #[test]
    fn test_find_missing_is_none() {
        let store = make_store();
        assert!(store.find_by_id(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = make_store();
        let req = request_at("Alice", Utc::now());
        store.insert(&req).unwrap();
        assert!(matches!(store.insert(&req), Err(AidreqError::Store(_))));
        assert_eq!(store.count(&RequestFilter::all()).unwrap(), 1);
    }

    // --- Updates ---

    #[test]
    fn test_update_status_changes_only_status_and_edit_time() {
        let mut store = make_store();
        let created = Utc::now();
        let req = request_at("Alice", created);
        store.insert(&req).unwrap();

        let edited_at = created + Duration::minutes(1);
        let updated = store
            .update_status(&req.id, RequestStatus::Completed, edited_at)
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, RequestStatus::Completed);
        assert_eq!(updated.last_edited_date, Some(edited_at));
        assert_eq!(updated.requestor_name, req.requestor_name);
        assert_eq!(updated.item_requested, req.item_requested);
        assert_eq!(updated.request_created_date, req.request_created_date);

        let stored = store.find_by_id(&req.id).unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[test]
    fn test_update_missing_leaves_store_unchanged() {
        let mut store = make_store();
        let req = request_at("Alice", Utc::now());
        store.insert(&req).unwrap();
        let before = store.backend.load_index().unwrap();

        let result = store
            .update_status(&Uuid::new_v4(), RequestStatus::Approved, Utc::now())
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.backend.load_index().unwrap(), before);
    }

    // --- Queries ---

    #[test]
    fn test_find_sorts_newest_first_and_slices() {
        let mut store = make_store();
        let base = Utc::now();
        for i in 0..5 {
            let req = request_at(&format!("Person {}", i), base + Duration::seconds(i));
            store.insert(&req).unwrap();
        }

        let page = store.find(&RequestFilter::all(), 1, 2).unwrap();
        let names: Vec<_> = page.iter().map(|r| r.requestor_name.as_str()).collect();
        assert_eq!(names, vec!["Person 3", "Person 2"]);
    }

    #[test]
    fn test_filter_applies_to_count_and_find() {
        let mut store = make_store();
        let a = request_at("Alice", Utc::now());
        let b = request_at("Bob B", Utc::now());
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();
        store
            .update_status(&b.id, RequestStatus::Rejected, Utc::now())
            .unwrap();

        let rejected = RequestFilter::with_status(RequestStatus::Rejected);
        assert_eq!(store.count(&rejected).unwrap(), 1);
        assert_eq!(store.find(&rejected, 0, 10).unwrap()[0].id, b.id);

        let pending = RequestFilter::with_status(RequestStatus::Pending);
        assert_eq!(store.count(&pending).unwrap(), 1);
        assert_eq!(store.count(&RequestFilter::all()).unwrap(), 2);
    }

    #[test]
    fn test_skip_past_end_is_empty() {
        let mut store = make_store();
        store.insert(&request_at("Alice", Utc::now())).unwrap();
        assert!(store.find(&RequestFilter::all(), 6, 6).unwrap().is_empty());
    }

    // --- Error Handling ---

    #[test]
    fn test_insert_fails_on_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut store = RequestStore::with_backend(backend);

        let result = store.insert(&request_at("Alice", Utc::now()));
        assert!(matches!(result, Err(AidreqError::Store(_))));
    }

    #[test]
    fn test_failed_update_keeps_previous_state() {
        let mut store = make_store();
        let req = request_at("Alice", Utc::now());
        store.insert(&req).unwrap();

        store.backend.set_simulate_write_error(true);
        assert!(store
            .update_status(&req.id, RequestStatus::Approved, Utc::now())
            .is_err());

        store.backend.set_simulate_write_error(false);
        let stored = store.find_by_id(&req.id).unwrap().unwrap();
        assert_eq!(stored.status, RequestStatus::Pending);
    }
}
