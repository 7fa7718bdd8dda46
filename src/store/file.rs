//! File-backed entry collection.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::Result;
use crate::observability::metrics;
use crate::rsvp::RsvpEntry;

/// Result of reading the store file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file parsed as an entry array.
    Loaded(Vec<RsvpEntry>),
    /// No file yet.
    Missing,
    /// The file exists but is not an entry array. Treated as an empty
    /// collection so the site stays up; the next write replaces it.
    Corrupt(serde_json::Error),
}

impl LoadOutcome {
    pub fn into_entries(self) -> Vec<RsvpEntry> {
        match self {
            LoadOutcome::Loaded(entries) => entries,
            LoadOutcome::Missing | LoadOutcome::Corrupt(_) => Vec::new(),
        }
    }
}

/// Ordered entry collection stored as one JSON document.
pub struct RecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file used while replacing the store.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("responses.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the file without taking the lock.
    pub async fn read(&self) -> Result<LoadOutcome> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::Missing),
            Err(e) => return Err(e.into()),
        };

        Ok(match serde_json::from_slice::<Vec<RsvpEntry>>(&bytes) {
            Ok(entries) => LoadOutcome::Loaded(entries),
            Err(e) => LoadOutcome::Corrupt(e),
        })
    }

    /// Load the collection; missing or corrupt files yield an empty one.
    pub async fn load(&self) -> Result<Vec<RsvpEntry>> {
        let outcome = self.read().await?;
        if let LoadOutcome::Corrupt(ref e) = outcome {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Store file is corrupt, treating as empty"
            );
            metrics::record_store_corrupt();
        }
        Ok(outcome.into_entries())
    }

    /// Replace the whole collection atomically.
    pub async fn save(&self, entries: &[RsvpEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let encoded = serde_json::to_vec_pretty(entries)?;
        let tmp_path = self.temp_path();

        if let Err(e) = replace_with(&tmp_path, &self.path, &encoded).await {
            let _ = fs::remove_file(&tmp_path).await;
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Store write failed"
            );
            return Err(e.into());
        }

        metrics::record_entry_count(entries.len());
        Ok(())
    }

    /// Locked snapshot of the collection.
    pub async fn list(&self) -> Result<Vec<RsvpEntry>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Append one entry under the lock.
    pub async fn append(&self, entry: RsvpEntry) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.push(entry);
        self.save(&entries).await
    }

    /// Remove the entry with `id` under the lock. Returns the removed entry,
    /// or `None` without touching the file if no entry matched.
    pub async fn remove_by_id(&self, id: Uuid) -> Result<Option<RsvpEntry>> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        let Some(index) = entries.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let removed = entries.remove(index);
        self.save(&entries).await?;
        Ok(Some(removed))
    }
}

/// Write `bytes` to `tmp`, sync it, then rename it over `path`.
async fn replace_with(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(tmp, path).await
}
