use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use studymap_core::{CompletionStore, ProblemId, Result};

/// The persisted record name; the on-disk value is a JSON array of
/// problem-id strings.
pub const COMPLETED_KEY: &str = "completedProblems";

/// File-backed completion store. One JSON array per file; a missing file
/// reads as an empty set, a malformed one surfaces as a serialization error
/// for the tracker's fail-soft path to absorb.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional location inside a data directory:
    /// `<dir>/completedProblems.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{COMPLETED_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompletionStore for JsonFileStore {
    fn load(&self) -> Result<FxHashSet<ProblemId>> {
        if !self.path.exists() {
            return Ok(FxHashSet::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let ids: Vec<ProblemId> = serde_json::from_str(&raw)?;
        Ok(ids.into_iter().collect())
    }

    fn save(&self, completed: &FxHashSet<ProblemId>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Sorted so the file is diff-stable across runs.
        let mut ids: Vec<&ProblemId> = completed.iter().collect();
        ids.sort();
        fs::write(&self.path, serde_json::to_string_pretty(&ids)?)?;
        Ok(())
    }
}

/// In-memory fake holding the serialized blob, for tests and ephemeral
/// sessions. Keeping the JSON string rather than the parsed set means the
/// corrupt-data path exercises the same parse code as the file store.
/// Clones share the same blob, so a test can keep a handle while the
/// tracker owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored blob, valid JSON or not.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.lock().clone()
    }
}

impl CompletionStore for MemoryStore {
    fn load(&self) -> Result<FxHashSet<ProblemId>> {
        match self.blob.lock().as_deref() {
            None => Ok(FxHashSet::default()),
            Some(raw) => {
                let ids: Vec<ProblemId> = serde_json::from_str(raw)?;
                Ok(ids.into_iter().collect())
            }
        }
    }

    fn save(&self, completed: &FxHashSet<ProblemId>) -> Result<()> {
        let mut ids: Vec<&ProblemId> = completed.iter().collect();
        ids.sort();
        *self.blob.lock() = Some(serde_json::to_string(&ids)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let set: FxHashSet<String> =
            ["two-sum".to_string(), "3sum".to_string()].into_iter().collect();
        store.save(&set).unwrap();
        assert_eq!(store.load().unwrap(), set);
    }

    #[test]
    fn empty_store_loads_empty() {
        assert!(MemoryStore::new().load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_is_a_load_error() {
        let store = MemoryStore::with_blob("{not json");
        assert!(store.load().is_err());
    }
}
