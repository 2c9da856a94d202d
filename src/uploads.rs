//! File Reference Resolver: persists uploaded asset bytes and hands back the
//! stable reference string the Credential Store keeps in place of the file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use ulid::Ulid;

#[derive(Clone, Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// # Errors
    /// Returns an error if the upload directory cannot be created.
    pub async fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("failed to create upload directory {}", dir.display()))?;

        Ok(Self { dir })
    }

    /// Persist the bytes under a fresh name and return the reference.
    ///
    /// The original file name contributes only its extension; the reference
    /// itself is a ULID so uploads never collide or overwrite.
    ///
    /// # Errors
    /// Returns an error if the bytes cannot be written.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String> {
        let reference = match Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{}.{}", Ulid::new(), ext.to_lowercase()),
            None => Ulid::new().to_string(),
        };

        fs::write(self.dir.join(&reference), bytes)
            .await
            .context("failed to persist upload")?;

        Ok(reference)
    }
}
