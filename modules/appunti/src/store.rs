//! On-disk storage for the Appunti note document.
//!
//! The document is opaque JSON. It is served from one path and saved to
//! another; copying saved documents back to the served location happens
//! outside this service.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{StoreError, StoreOp};

pub struct NoteStore {
    read_path: PathBuf,
    write_path: PathBuf,
}

impl NoteStore {
    pub fn new(read_path: PathBuf, write_path: PathBuf) -> Self {
        Self {
            read_path,
            write_path,
        }
    }

    pub fn read_path(&self) -> &Path {
        &self.read_path
    }

    pub fn write_path(&self) -> &Path {
        &self.write_path
    }

    /// Load and parse the note document from the read path
    pub async fn load(&self) -> Result<Value, StoreError> {
        let path = &self.read_path;
        log::info!("Attempting to read from: {}", path.display());

        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::new(StoreOp::Read, path, e))?;
        log::debug!("File contents: {}...", preview(&data));

        serde_json::from_str(&data).map_err(|e| StoreError::new(StoreOp::Read, path, e))
    }

    /// Parse a request body as JSON and save it
    pub async fn save_body(&self, body: &[u8]) -> Result<(), StoreError> {
        let doc: Value = serde_json::from_slice(body)
            .map_err(|e| StoreError::new(StoreOp::Save, &self.write_path, e))?;
        self.save(&doc).await
    }

    /// Replace the document at the write path with `doc`, pretty-printed.
    pub async fn save(&self, doc: &Value) -> Result<(), StoreError> {
        let path = self.write_path.clone();
        log::info!("Attempting to write to: {}", path.display());

        let contents =
            serde_json::to_vec_pretty(doc).map_err(|e| StoreError::new(StoreOp::Save, &path, e))?;

        let target = path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&target, &contents))
            .await
            .map_err(|e| StoreError::new(StoreOp::Save, &path, e))?
            .map_err(|e| StoreError::new(StoreOp::Save, &path, e))
    }
}

/// Write to a temp file in the target's directory, then rename over the target.
/// Readers see either the old or the new document, never a partial one.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn preview(data: &str) -> String {
    data.chars().take(100).collect()
}
