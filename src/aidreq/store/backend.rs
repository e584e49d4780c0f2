use crate::error::Result;
use crate::model::ItemRequest;
use std::collections::HashMap;
use uuid::Uuid;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RequestStore handles the "what" (filtering, ordering, updates).
pub trait StorageBackend {
    /// Load the whole request index. A store that was never written is empty.
    fn load_index(&self) -> Result<HashMap<Uuid, ItemRequest>>;

    /// Replace the whole request index.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_index(&self, index: &HashMap<Uuid, ItemRequest>) -> Result<()>;

    /// Run `f` while holding exclusive write access to the index.
    ///
    /// Every load-modify-save cycle goes through here, so concurrent writers on the
    /// same storage serialize instead of overwriting each other's changes.
    fn with_exclusive<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T>;
}
