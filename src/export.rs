//! Report export
//!
//! The data transfer scene "downloads" a classified report. In a terminal
//! that means writing the fixed payload into the export directory.

use crate::error::TerminalError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Destination for exported files
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Save `contents` under `file_name`, returning where it landed
    async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf, TerminalError>;
}

/// Writes exports into a directory on disk
pub struct DirectoryExporter {
    base_path: PathBuf,
}

impl DirectoryExporter {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl Exporter for DirectoryExporter {
    async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf, TerminalError> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| TerminalError::export(&self.base_path, e))?;

        let path = self.base_path.join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| TerminalError::export(&path, e))?;

        log::info!("exported {}", path.display());
        Ok(path)
    }
}

/// Keeps exports in memory
#[derive(Default)]
pub struct MemoryExporter {
    files: Mutex<Vec<(String, String)>>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(file_name, contents)` exported so far, in order
    pub fn files(&self) -> Vec<(String, String)> {
        match self.files.lock() {
            Ok(files) => files.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Exporter for MemoryExporter {
    async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf, TerminalError> {
        let mut files = match self.files.lock() {
            Ok(files) => files,
            Err(poisoned) => poisoned.into_inner(),
        };
        files.push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from(file_name))
    }
}

#[async_trait]
impl<E: Exporter + ?Sized> Exporter for std::sync::Arc<E> {
    async fn export(&self, file_name: &str, contents: &str) -> Result<PathBuf, TerminalError> {
        (**self).export(file_name, contents).await
    }
}
