use super::fs_backend::FsBackend;
use super::request_store::RequestStore;
use std::path::{Path, PathBuf};

/// Production store: the request index lives in a JSON file under `root`.
pub type FileStore = RequestStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        RequestStore::with_backend(FsBackend::new(root))
    }

    pub fn root(&self) -> &Path {
        self.backend.root()
    }
}
