//! JSON-file record stores.
//!
//! A [`JsonStore`] owns one pretty-printed JSON file holding a top-level
//! array of records for a single entity type. Every operation is a full
//! read-modify-write of that file; there is no in-process locking, so the
//! store assumes a single writer per entity type (two concurrent writers
//! race whole-file, last write wins).
//!
//! Writes go through a temp-file-and-rename step so a concurrent reader
//! never observes a torn file.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use opsdeck_model::{Task, User, seed_users};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The backing file exists but does not contain a valid record array.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The backing file could not be written or replaced.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The record array could not be serialized.
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A record type that can live in a [`JsonStore`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The record's unique id within its store.
    fn id(&self) -> &str;

    /// Attaches a store-assigned id.
    fn set_id(&mut self, id: String);

    /// The default record list persisted when the backing file is missing.
    fn seed() -> Vec<Self>;
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn seed() -> Vec<Self> {
        seed_users()
    }
}

/// A JSON-file store for one entity type.
///
/// The store holds only the file path; every call re-reads the file, so
/// instances are cheap and freely shareable.
pub struct JsonStore<R: Record> {
    path: PathBuf,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Record> JsonStore<R> {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records from the backing file.
    ///
    /// A missing file is replaced by [`Record::seed`], which is persisted
    /// back immediately, so the first read of a fresh store has a write
    /// side effect. A file that exists but cannot be read or parsed is an
    /// error, never a silent reseed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file is unreadable, malformed, or the
    /// seed cannot be persisted.
    pub async fn read_all(&self) -> Result<Vec<R>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let seed = R::seed();
                tracing::info!(path = %self.path.display(), count = seed.len(),
                    "backing file missing, persisting seed records");
                self.write_all(&seed).await?;
                Ok(seed)
            }
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Serializes the full record array and replaces the backing file.
    ///
    /// The array is written pretty-printed (2-space indent) to a temp file
    /// in the same directory and renamed into place, so readers never see a
    /// partial file. Concurrent writers still race whole-file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or any file operation fails.
    pub async fn write_all(&self, records: &[R]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(StoreError::Serialize)?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Appends a record with a freshly assigned id and persists the store.
    ///
    /// The new id is `max(existing numeric ids) + 1`, or `1` on an empty
    /// store; ids that do not parse as integers are skipped when computing
    /// the max. Returns the stored record with its id attached. On any
    /// failure nothing is partially applied.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read or write fails.
    pub async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        let mut records = self.read_all().await?;
        record.set_id(Self::next_id(&records).to_string());
        records.push(record.clone());
        self.write_all(&records).await?;
        Ok(record)
    }

    /// Replaces the record whose id matches the given one.
    ///
    /// Non-matching records are written back unchanged. If no id matches,
    /// the call is a silent no-op (the file is still rewritten).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read or write fails.
    pub async fn replace_by_id(&self, record: R) -> Result<(), StoreError> {
        let mut records = self.read_all().await?;
        for stored in &mut records {
            if stored.id() == record.id() {
                *stored = record.clone();
            }
        }
        self.write_all(&records).await
    }

    /// Removes the record with the given id.
    ///
    /// Removing a non-existent id is a no-op success; the operation is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read or write fails.
    pub async fn remove_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.read_all().await?;
        records.retain(|r| r.id() != id);
        self.write_all(&records).await
    }

    /// Next id for an insert: one past the highest numeric id present.
    fn next_id(records: &[R]) -> u64 {
        records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }
}
