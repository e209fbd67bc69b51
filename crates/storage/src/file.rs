//! Settings-file backend
//!
//! Holds the whole map in memory and persists it to a single file in the
//! [`format`](crate::format) layout. When the file is written is governed by
//! [`DurabilityMode`]; writes replace the file atomically (temp file, fsync,
//! rename) so a crash never leaves a half-written settings file behind.
//!
//! A mutation that changes nothing (removing a missing key, registering over
//! an existing value) does not count as pending.
//!
//! If a mutation triggers a write and the write fails, the mutation is undone
//! in memory before the error is returned. Earlier pending mutations stay
//! pending and go out with the next successful write.

use crate::durability::DurabilityMode;
use crate::format::{decode_settings, encode_settings, SettingsMap};
use crate::traits::{BatchOperation, PersistentStorage};
use kvault_core::Result;
use parking_lot::Mutex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct FileState {
    entries: SettingsMap,
    pending_writes: usize,
    batch_depth: usize,
}

/// What a mutation replaced, for rolling it back.
enum Undo {
    Entry(String, Option<Vec<u8>>),
    All(SettingsMap),
}

impl Undo {
    fn apply(self, entries: &mut SettingsMap) {
        match self {
            Undo::Entry(key, Some(previous)) => {
                entries.insert(key, previous);
            }
            Undo::Entry(key, None) => {
                entries.remove(&key);
            }
            Undo::All(previous) => *entries = previous,
        }
    }
}

/// Holds one level of batch nesting; released even if the batch panics.
struct BatchDepth<'a>(&'a Mutex<FileState>);

impl<'a> BatchDepth<'a> {
    fn enter(state: &'a Mutex<FileState>) -> Self {
        state.lock().batch_depth += 1;
        BatchDepth(state)
    }
}

impl Drop for BatchDepth<'_> {
    fn drop(&mut self) {
        self.0.lock().batch_depth -= 1;
    }
}

/// Backend persisted to one settings file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    mode: DurabilityMode,
    state: Mutex<FileState>,
}

impl FileStorage {
    /// Open the settings file at `path`, creating an empty store if it does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `Error::Corruption` if the file exists but fails validation,
    /// and `Error::IoError` if it cannot be read.
    pub fn open(path: impl AsRef<Path>, mode: DurabilityMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) => decode_settings(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => SettingsMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(
            path = %path.display(),
            entries = entries.len(),
            mode = mode.description(),
            "opened settings file"
        );
        Ok(Self {
            path,
            mode,
            state: Mutex::new(FileState {
                entries,
                ..FileState::default()
            }),
        })
    }

    /// Location of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured durability mode.
    pub fn durability_mode(&self) -> DurabilityMode {
        self.mode
    }

    /// Mutations not yet written to disk.
    pub fn pending_writes(&self) -> usize {
        self.state.lock().pending_writes
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Apply `change`, which returns `None` when it changed nothing.
    fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut SettingsMap) -> Option<Undo>,
    {
        let mut state = self.state.lock();
        let Some(undo) = change(&mut state.entries) else {
            return Ok(());
        };
        state.pending_writes += 1;
        if state.batch_depth == 0 && self.mode.should_flush(state.pending_writes) {
            if let Err(e) = persist(&self.path, &mut state) {
                undo.apply(&mut state.entries);
                state.pending_writes -= 1;
                return Err(e);
            }
        }
        Ok(())
    }
}

fn persist(path: &Path, state: &mut FileState) -> Result<()> {
    let image = encode_settings(&state.entries)?;
    write_atomic(path, &image)?;
    debug!(
        path = %path.display(),
        entries = state.entries.len(),
        flushed = state.pending_writes,
        "settings file written"
    );
    state.pending_writes = 0;
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Removed on drop unless persisted
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl PersistentStorage for FileStorage {
    fn set_bytes(&self, key: &str, data: Option<&[u8]>) -> Result<()> {
        self.mutate(|entries| match data {
            Some(bytes) => {
                let previous = entries.insert(key.to_owned(), bytes.to_vec());
                (previous.as_deref() != Some(bytes)).then(|| Undo::Entry(key.to_owned(), previous))
            }
            None => entries
                .remove(key)
                .map(|previous| Undo::Entry(key.to_owned(), Some(previous))),
        })
    }

    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.lock().entries.get(key).cloned())
    }

    fn register_default(&self, key: &str, data: &[u8]) -> Result<()> {
        self.mutate(|entries| {
            if entries.contains_key(key) {
                return None;
            }
            entries.insert(key.to_owned(), data.to_vec());
            Some(Undo::Entry(key.to_owned(), None))
        })
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        self.mutate(|entries| {
            entries
                .remove(key)
                .map(|previous| Undo::Entry(key.to_owned(), Some(previous)))
        })
    }

    fn reset_all(&self) -> Result<()> {
        self.mutate(|entries| {
            if entries.is_empty() {
                return None;
            }
            Some(Undo::All(std::mem::take(entries)))
        })
    }

    fn perform_batch(&self, operation: &mut BatchOperation<'_>) -> Result<()> {
        let depth = BatchDepth::enter(&self.state);
        let outcome = operation(self);
        drop(depth);

        let mut state = self.state.lock();
        let flushed = if state.batch_depth == 0
            && state.pending_writes > 0
            && self.mode.writes_automatically()
        {
            persist(&self.path, &mut state)
        } else {
            Ok(())
        };
        drop(state);

        outcome.and(flushed)
    }

    fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if state.pending_writes == 0 {
            return Ok(());
        }
        persist(&self.path, &mut state)
    }
}

impl Drop for FileStorage {
    fn drop(&mut self) {
        if !self.mode.writes_automatically() {
            return;
        }
        let state = self.state.get_mut();
        if state.pending_writes == 0 {
            return;
        }
        if let Err(e) = persist(&self.path, state) {
            warn!(
                path = %self.path.display(),
                error = %e,
                "failed to write pending settings on drop"
            );
        }
    }
}
