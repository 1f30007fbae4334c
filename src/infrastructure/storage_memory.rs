use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{FavoritesStorage, StdResult};

/// Keeps blobs in memory, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

#[async_trait::async_trait]
impl FavoritesStorage for MemoryStorage {
    async fn read(&self, key: &str) -> StdResult<Option<Vec<u8>>> {
        let blobs = self.blobs.read().await;

        Ok(blobs.get(key).cloned())
    }

    async fn write(&self, key: &str, data: &[u8]) -> StdResult<()> {
        let mut blobs = self.blobs.write().await;
        blobs.insert(key.to_string(), data.to_vec());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_by_key() {
        let storage = MemoryStorage::default();

        storage.write("key-1", b"one").await.unwrap();
        storage.write("key-1", b"two").await.unwrap();

        assert_eq!(Some(b"two".to_vec()), storage.read("key-1").await.unwrap());
        assert_eq!(None, storage.read("key-2").await.unwrap());
    }
}
