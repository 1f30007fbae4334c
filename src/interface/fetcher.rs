use crate::{Follower, NetworkError, UserProfile};

/// A trait for fetching followers and profiles from the GitHub API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GitHubFetcher: Sync + Send {
    /// Fetches one page of a user's followers, in server order.
    async fn fetch_followers(
        &self,
        username: &str,
        page: u32,
    ) -> Result<Vec<Follower>, NetworkError>;

    /// Fetches a user's profile.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile, NetworkError>;
}
