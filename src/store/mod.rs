//! Whole-blob persistence for the worksheet.
//!
//! The worksheet is saved and loaded as a single JSON document, with no
//! partial updates and no schema migration. A blob that fails to parse is
//! treated the same as a missing one: the caller gets a default worksheet
//! and a warning is logged, so startup never blocks on corrupt state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::models::Worksheet;

enum Backend {
    File(PathBuf),
    Memory(Arc<Mutex<Option<String>>>),
}

pub struct Store {
    backend: Backend,
}

impl Store {
    /// Open a store backed by a JSON file, creating parent directories as
    /// needed on the first save.
    pub fn open(path: PathBuf) -> Self {
        Self {
            backend: Backend::File(path),
        }
    }

    /// Open the store at the platform data directory
    /// (e.g. `~/.local/share/heurdesk/worksheet.json`).
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "heurdesk")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(Self::open(dirs.data_dir().join("worksheet.json")))
    }

    /// Open an in-memory store. Used by tests; serializes through the same
    /// JSON path as the file backend.
    pub fn open_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(None))),
        }
    }

    /// Load the persisted worksheet, falling back to the default (empty)
    /// worksheet when the blob is missing or unparseable.
    pub fn load(&self) -> Worksheet {
        let raw = match &self.backend {
            Backend::File(path) => match std::fs::read_to_string(path) {
                Ok(s) => Some(s),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!("Failed to read worksheet from {}: {}", path.display(), e);
                    None
                }
            },
            Backend::Memory(slot) => slot.lock().expect("store lock poisoned").clone(),
        };

        match raw {
            Some(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                tracing::warn!("Stored worksheet is not valid, starting fresh: {}", e);
                Worksheet::default()
            }),
            None => Worksheet::default(),
        }
    }

    /// Persist the worksheet, replacing the previous blob wholesale.
    pub fn save(&self, worksheet: &Worksheet) -> Result<()> {
        let json = serde_json::to_string_pretty(worksheet)?;
        match &self.backend {
            Backend::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, json)?;
            }
            Backend::Memory(slot) => {
                *slot.lock().expect("store lock poisoned") = Some(json);
            }
        }
        Ok(())
    }

    /// Erase the persisted blob. The next load yields the default worksheet.
    pub fn clear(&self) -> Result<()> {
        match &self.backend {
            Backend::File(path) => match std::fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
            Backend::Memory(slot) => {
                *slot.lock().expect("store lock poisoned") = None;
                Ok(())
            }
        }
    }

    /// Inject a raw blob, bypassing serialization. Test hook for exercising
    /// the unparseable-blob fallback.
    #[doc(hidden)]
    pub fn put_raw(&self, raw: &str) {
        match &self.backend {
            Backend::File(path) => {
                if let Some(parent) = path.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }
                let _ = std::fs::write(path, raw);
            }
            Backend::Memory(slot) => {
                *slot.lock().expect("store lock poisoned") = Some(raw.to_string());
            }
        }
    }
}
