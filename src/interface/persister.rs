use crate::StdResult;

/// A trait for storing serialized blobs under well-known keys.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FavoritesStorage: Sync + Send {
    /// Reads the blob stored under the key, if any.
    async fn read(&self, key: &str) -> StdResult<Option<Vec<u8>>>;

    /// Replaces the blob stored under the key.
    async fn write(&self, key: &str, data: &[u8]) -> StdResult<()>;
}
