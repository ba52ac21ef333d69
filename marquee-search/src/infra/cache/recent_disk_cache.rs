//! Durable storage for the recently-selected list.
//!
//! The whole list is one record: it is read once at startup and replaced
//! wholesale on every save. A missing, unreadable or foreign-schema record
//! loads as an empty list.

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::SystemTime;

use directories::ProjectDirs;
use marquee_model::ItemSuggestion;
use serde::{Deserialize, Serialize};
use sha2::Digest;
use thiserror::Error;

const SCHEMA_VERSION: u32 = 1;
const RECENT_FILE_NAME: &str = "recent-items-v1.json";

#[derive(Debug, Error)]
pub enum RecentStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Load/save seam for the recently-selected list.
pub trait RecentStore: Send + Sync + Debug {
    /// Read the persisted list. Never fails; bad data reads as empty.
    fn load(&self) -> Vec<ItemSuggestion>;

    /// Overwrite the persisted list.
    fn save(&self, items: &[ItemSuggestion]) -> Result<(), RecentStoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct RecentItemsFile {
    schema_version: u32,
    #[serde(default)]
    items: Vec<ItemSuggestion>,
}

/// JSON file under the platform data directory, one file per server.
#[derive(Debug, Clone)]
pub struct DiskRecentStore {
    path: PathBuf,
}

impl DiskRecentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store namespaced by server so switching catalogues does not mix lists.
    pub fn try_new_for_server(server_url: &str) -> Result<Self, RecentStoreError> {
        let proj_dirs = ProjectDirs::from("", "marquee", "marquee-search")
            .ok_or_else(|| {
                RecentStoreError::Storage(
                    "Failed to resolve ProjectDirs".to_string(),
                )
            })?;
        let path = proj_dirs
            .data_dir()
            .join("recent")
            .join(namespace_for_server_url(server_url))
            .join(RECENT_FILE_NAME);
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecentStore for DiskRecentStore {
    fn load(&self) -> Vec<ItemSuggestion> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new();
            }
            Err(err) => {
                log::warn!(
                    "[Recent] failed to read {}; err={}",
                    self.path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice::<RecentItemsFile>(&bytes) {
            Ok(file) if file.schema_version == SCHEMA_VERSION => file.items,
            Ok(file) => {
                log::warn!(
                    "[Recent] ignoring {} with schema_version={}",
                    self.path.display(),
                    file.schema_version
                );
                Vec::new()
            }
            Err(err) => {
                log::warn!(
                    "[Recent] corrupt recent list at {}; err={}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[ItemSuggestion]) -> Result<(), RecentStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = RecentItemsFile {
            schema_version: SCHEMA_VERSION,
            items: items.to_vec(),
        };
        let bytes = serde_json::to_vec(&file)?;
        write_atomic(&self.path, &bytes)?;
        Ok(())
    }
}

/// Process-local store used when persistence is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemoryRecentStore {
    items: Mutex<Vec<ItemSuggestion>>,
    saves: Mutex<usize>,
}

impl MemoryRecentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ItemSuggestion>) -> Self {
        Self {
            items: Mutex::new(items),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|count| *count).unwrap_or(0)
    }
}

impl RecentStore for MemoryRecentStore {
    fn load(&self) -> Vec<ItemSuggestion> {
        self.items
            .lock()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    fn save(&self, items: &[ItemSuggestion]) -> Result<(), RecentStoreError> {
        let mut guard = self.items.lock().map_err(|err| {
            RecentStoreError::Storage(format!("lock poisoned: {err}"))
        })?;
        *guard = items.to_vec();
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }
}

fn namespace_for_server_url(server_url: &str) -> String {
    let canonical = server_url.trim().trim_end_matches('/').to_ascii_lowercase();
    let digest = sha2::Sha256::digest(canonical.as_bytes());
    digest[..16].iter().fold(String::with_capacity(32), |mut out, byte| {
        use std::fmt::Write as _;
        let _ = write!(out, "{byte:02x}");
        out
    })
}

/// Write through a sibling temp file so readers never see a partial list.
/// The temp file is removed if the final rename fails.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let stamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(RECENT_FILE_NAME);
    let tmp_path = parent.join(format!(".{file_name}.tmp.{stamp}"));

    std::fs::write(&tmp_path, bytes)?;
    if let Err(err) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}
