use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};

use crate::{FavoritesStorage, StdResult};

/// Stores each blob in its own JSON file inside a directory.
///
/// Writes land in a temporary file, synced to disk, then renamed over the
/// previous one, so a crash mid-write leaves the previous blob intact.
#[derive(Debug)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Creates a new `FileStorage`, creating the directory if needed.
    pub async fn try_new(directory: &Path) -> StdResult<Self> {
        fs::create_dir_all(directory)
            .await
            .with_context(|| format!("Failed to create data directory {}", directory.display()))?;

        Ok(Self {
            directory: directory.to_path_buf(),
        })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }

    fn temporary_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json.tmp"))
    }
}

#[async_trait::async_trait]
impl FavoritesStorage for FileStorage {
    async fn read(&self, key: &str) -> StdResult<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        match fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    async fn write(&self, key: &str, data: &[u8]) -> StdResult<()> {
        let path = self.blob_path(key);
        let temporary_path = self.temporary_path(key);
        let mut file = File::create(&temporary_path)
            .await
            .with_context(|| format!("Failed to create {}", temporary_path.display()))?;
        file.write_all(data)
            .await
            .with_context(|| format!("Failed to write {}", temporary_path.display()))?;
        file.sync_all()
            .await
            .with_context(|| format!("Failed to sync {}", temporary_path.display()))?;
        drop(file);
        fs::rename(&temporary_path, &path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        debug!("Wrote {} bytes to {}", data.len(), path.display());

        Ok(())
    }
}
