//! Persistence boundary for the theme mode preference.
//!
//! A single namespaced key mapped to one of `"light" | "dark" | "auto"`.
//! Anything else in the store is treated as absent. Storage failures are
//! the caller's to log and swallow — in-memory state stays authoritative
//! for the session either way.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

/// The key theme mode is persisted under: the relative file path for
/// [`FileStore::in_dir`], and the lookup key for app-provided key-value
/// store adapters.
pub const THEME_MODE_KEY: &str = "tint/theme-mode";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Async key-value store for the mode preference.
///
/// Apps typically adapt their platform's preference store; [`MemoryStore`]
/// and [`FileStore`] cover tests and simple desktop hosts.
#[async_trait]
pub trait ModeStore: Send + Sync {
    /// Read the persisted value, `Ok(None)` when nothing was stored.
    async fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist the value.
    async fn save(&self, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, the default for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the stored value, as if a previous session wrote it.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

#[async_trait]
impl ModeStore for MemoryStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.lock().unwrap().clone())
    }

    async fn save(&self, value: &str) -> Result<(), StoreError> {
        *self.value.lock().unwrap() = Some(value.to_owned());
        Ok(())
    }
}

/// Single-file store: the whole file is the stored value.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at an app data directory, with [`THEME_MODE_KEY`] as the
    /// relative file path.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(THEME_MODE_KEY),
        }
    }
}

#[async_trait]
impl ModeStore for FileStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_owned()))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, value).await?;
        Ok(())
    }
}
