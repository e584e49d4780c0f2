use super::backend::StorageBackend;
use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since every operation runs to
/// completion on one thread. The `StorageBackend` trait takes `&self` for all
/// methods, as the filesystem backend needs no mutable state of its own.
#[derive(Default)]
pub struct MemBackend {
    index: RefCell<HashMap<Uuid, ItemRequest>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_index(&self) -> Result<HashMap<Uuid, ItemRequest>> {
        Ok(self.index.borrow().clone())
    }

    fn save_index(&self, new_index: &HashMap<Uuid, ItemRequest>) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(AidreqError::Store("Simulated write error".to_string()));
        }
        *self.index.borrow_mut() = new_index.clone();
        Ok(())
    }

    fn with_exclusive<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        // Not Sync, so there is never a second writer.
        f()
    }
}
