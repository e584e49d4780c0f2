use super::backend::StorageBackend;
use crate::error::{AidreqError, Result};
use crate::model::ItemRequest;
use fs4::fs_std::FileExt;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDEX_FILENAME: &str = "requests.json";
const LOCK_FILENAME: &str = "requests.lock";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILENAME)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(LOCK_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AidreqError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_index(&self) -> Result<HashMap<Uuid, ItemRequest>> {
        let data_file = self.index_path();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(AidreqError::Io)?;
        let index: HashMap<Uuid, ItemRequest> =
            serde_json::from_str(&content).map_err(AidreqError::Serialization)?;

        for (key, request) in &index {
            if *key != request.id {
                return Err(AidreqError::Store(format!(
                    "record keyed {} carries id {}",
                    key, request.id
                )));
            }
            request.check_invariants().map_err(|e| {
                AidreqError::Store(format!("corrupt record {}: {}", request.id, e))
            })?;
        }
        Ok(index)
    }

    fn save_index(&self, index: &HashMap<Uuid, ItemRequest>) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(index).map_err(AidreqError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".requests-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(AidreqError::Io)?;
        fs::rename(&tmp_file, self.index_path()).map_err(AidreqError::Io)?;

        Ok(())
    }

    fn with_exclusive<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.ensure_dir()?;
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;

        // Released when `lock_file` is dropped, including on early return.
        FileExt::lock_exclusive(&lock_file)?;
        f()
    }
}
