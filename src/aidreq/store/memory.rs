use super::mem_backend::MemBackend;
use super::request_store::RequestStore;

pub type InMemoryStore = RequestStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        RequestStore::with_backend(MemBackend::new())
    }

    /// Make every subsequent write fail, to exercise persistence error paths.
    pub fn fail_writes(&self, fail: bool) {
        self.backend.set_simulate_write_error(fail);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ItemRequest;
    use crate::status::RequestStatus;
    use crate::store::DataStore;
    use crate::validation::{validate_create, RawCreateRequest};
    use chrono::{DateTime, Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        clock: DateTime<Utc>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                clock: Utc::now() - Duration::days(1),
            }
        }

        /// Each seeded request is one second newer than the previous one.
        fn next_request(&mut self, name: &str, item: &str) -> ItemRequest {
            self.clock += Duration::seconds(1);
            let input = validate_create(&RawCreateRequest::new(name, item)).unwrap();
            ItemRequest::new(input, self.clock)
        }

        pub fn with_requests(mut self, count: usize) -> Self {
            for i in 0..count {
                let req = self.next_request(&format!("Requestor {}", i + 1), "water");
                self.store.insert(&req).unwrap();
            }
            self
        }

        pub fn with_request(mut self, name: &str, item: &str) -> Self {
            let req = self.next_request(name, item);
            self.store.insert(&req).unwrap();
            self
        }

        pub fn with_status(mut self, name: &str, status: RequestStatus) -> Self {
            let req = self.next_request(name, "blankets");
            self.store.insert(&req).unwrap();
            self.store
                .update_status(&req.id, status, self.clock)
                .unwrap();
            self
        }
    }
}
