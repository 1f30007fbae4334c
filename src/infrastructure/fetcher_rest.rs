use std::sync::Arc;

use log::{debug, error};
use serde::de::DeserializeOwned;

use crate::{
    Follower, FollowersRequest, GitHubFetcher, HttpClient, NetworkError, Request, UserProfile,
    UserRequest,
};

/// Fetches followers and profiles from the GitHub REST API.
pub struct RestGitHubFetcher {
    http_client: Arc<dyn HttpClient>,
    endpoint: String,
}

impl RestGitHubFetcher {
    /// Creates a new `RestGitHubFetcher` against the given API endpoint.
    pub fn new(http_client: Arc<dyn HttpClient>, endpoint: &str) -> Self {
        Self {
            http_client,
            endpoint: endpoint.to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, request: &Request) -> Result<T, NetworkError> {
        debug!("Processing request: {request}");
        let body = self.http_client.get(&request.url(&self.endpoint)).await?;

        serde_json::from_slice(&body).map_err(|e| {
            error!("Failed to decode response for {request}: {e}");
            NetworkError::InvalidData
        })
    }
}

#[async_trait::async_trait]
impl GitHubFetcher for RestGitHubFetcher {
    async fn fetch_followers(
        &self,
        username: &str,
        page: u32,
    ) -> Result<Vec<Follower>, NetworkError> {
        let request = Request::Followers(FollowersRequest::try_new(username, page)?);
        let followers: Vec<Follower> = self.get_json(&request).await?;
        debug!("Fetched {} followers for {request}", followers.len());

        Ok(followers)
    }

    async fn fetch_user(&self, username: &str) -> Result<UserProfile, NetworkError> {
        let request = Request::User(UserRequest::try_new(username)?);

        self.get_json(&request).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use crate::{MockHttpClient, ReqwestHttpClient};

    use super::*;

    fn mock_followers_json(total: usize) -> serde_json::Value {
        json!(
            (1..=total)
                .map(|index| json!({
                    "login": format!("follower-{index}"),
                    "id": index,
                    "avatar_url": format!("https://avatars.githubusercontent.com/u/{index}"),
                    "type": "User",
                    "site_admin": false
                }))
                .collect::<Vec<_>>()
        )
    }

    fn mock_user_json() -> serde_json::Value {
        json!({
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "type": "User",
            "name": "The Octocat",
            "company": "@github",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "email": null,
            "bio": null,
            "public_repos": 8,
            "public_gists": 8,
            "followers": 4000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_fetch_followers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/users/octocat/followers")
                .query_param("per_page", "100")
                .query_param("page", "2");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_followers_json(3));
        });
        let fetcher = RestGitHubFetcher::new(
            Arc::new(ReqwestHttpClient::try_new(None).unwrap()),
            &server.base_url(),
        );

        let followers = fetcher.fetch_followers("octocat", 2).await.unwrap();

        mock.assert();
        assert_eq!(
            vec![Follower::dummy(1), Follower::dummy(2), Follower::dummy(3)],
            followers
        );
        assert_eq!(
            "https://avatars.githubusercontent.com/u/2",
            followers[1].avatar_url()
        );
    }

    #[tokio::test]
    async fn test_fetch_user() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/users/octocat");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_user_json());
        });
        let fetcher = RestGitHubFetcher::new(
            Arc::new(ReqwestHttpClient::try_new(None).unwrap()),
            &server.base_url(),
        );

        let user = fetcher.fetch_user("octocat").await.unwrap();

        mock.assert();
        assert_eq!(UserProfile::dummy(), user);
    }

    #[tokio::test]
    async fn fetch_followers_fails_on_invalid_username_without_request() {
        let http_client = {
            let mut http_client = MockHttpClient::new();
            http_client.expect_get().times(0);

            http_client
        };
        let fetcher = RestGitHubFetcher::new(Arc::new(http_client), "https://api.github.com");

        let result = fetcher.fetch_followers("octo cat", 1).await;

        assert_eq!(Err(NetworkError::InvalidUsername), result);
    }

    #[tokio::test]
    async fn fetch_user_fails_with_invalid_data_on_undecodable_body() {
        let http_client = {
            let mut http_client = MockHttpClient::new();
            http_client
                .expect_get()
                .withf(|url: &str| url == "https://api.github.com/users/octocat")
                .returning(|_| Ok(br#"{"login": "octocat"}"#.to_vec()))
                .times(1);

            http_client
        };
        let fetcher = RestGitHubFetcher::new(Arc::new(http_client), "https://api.github.com");

        let result = fetcher.fetch_user("octocat").await;

        assert_eq!(Err(NetworkError::InvalidData), result);
    }

    #[tokio::test]
    async fn fetch_followers_forwards_http_errors() {
        let http_client = {
            let mut http_client = MockHttpClient::new();
            http_client
                .expect_get()
                .returning(|_| Err(NetworkError::UnableToComplete))
                .times(1);

            http_client
        };
        let fetcher = RestGitHubFetcher::new(Arc::new(http_client), "https://api.github.com");

        let result = fetcher.fetch_followers("octocat", 1).await;

        assert_eq!(Err(NetworkError::UnableToComplete), result);
    }

    #[tokio::test]
    async fn fetch_followers_accepts_empty_page() {
        let http_client = {
            let mut http_client = MockHttpClient::new();
            http_client
                .expect_get()
                .withf(|url: &str| {
                    url == "https://api.github.com/users/octocat/followers?per_page=100&page=1"
                })
                .returning(|_| Ok(b"[]".to_vec()))
                .times(1);

            http_client
        };
        let fetcher = RestGitHubFetcher::new(Arc::new(http_client), "https://api.github.com");

        let followers = fetcher.fetch_followers("octocat", 1).await.unwrap();

        assert!(followers.is_empty());
    }
}
