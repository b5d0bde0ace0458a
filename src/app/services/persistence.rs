use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::domain::settings::EditorSettings;
use crate::app::infrastructure::error::{AppError, Result};

/// The persisted record: the document text and the settings it was laid out with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub content: String,

    /// Missing fields fall back to defaults, so older records still load.
    #[serde(default)]
    pub settings: EditorSettings,
}

impl Snapshot {
    pub fn new(content: impl Into<String>, settings: EditorSettings) -> Self {
        Self {
            content: content.into(),
            settings,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Durable storage for a single snapshot.
pub trait SnapshotStore {
    /// Raw stored record, or `None` if nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, record: &str) -> Result<()>;

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.write(&snapshot.to_json()?)
    }

    /// Load the stored snapshot, falling back to defaults when it is missing
    /// or cannot be parsed. Never fails.
    fn load_or_default(&self) -> Snapshot {
        match self.read() {
            Ok(Some(record)) => match Snapshot::from_json(&record) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Discarding malformed saved state: {}. Using defaults.", e);
                    Snapshot::default()
                }
            },
            Ok(None) => Snapshot::default(),
            Err(e) => {
                warn!("Failed to read saved state: {}. Using defaults.", e);
                Snapshot::default()
            }
        }
    }
}

/// Stores the snapshot as pretty JSON in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory: data_dir/tategaki/state.json
    pub fn default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tategaki");
        path.push("state.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, record: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, record)?;
        info!("Saved document state to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store for embedding hosts that own persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: RefCell<Option<String>>,
    writes: Cell<usize>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: RefCell::new(Some(record.into())),
            ..Self::default()
        }
    }

    /// A store whose writes always fail, like a full quota.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.record.borrow().clone())
    }

    fn write(&self, record: &str) -> Result<()> {
        if self.read_only {
            return Err(AppError::Persistence("store is read-only".to_string()));
        }
        *self.record.borrow_mut() = Some(record.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
