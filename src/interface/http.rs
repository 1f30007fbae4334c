use crate::NetworkError;

/// A trait for issuing GET requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Sync + Send {
    /// Gets the body of the resource at the given URL.
    async fn get(&self, url: &str) -> Result<Vec<u8>, NetworkError>;
}
