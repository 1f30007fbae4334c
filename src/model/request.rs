use std::fmt::Display;

use super::{NetworkError, Username};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

/// The page size requested from the followers endpoint.
///
/// A page holding fewer followers than this is the last one.
pub const FOLLOWERS_PER_PAGE: usize = 100;

/// A request to the GitHub REST API
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Request {
    /// A request for one page of a user's followers.
    Followers(FollowersRequest),

    /// A request for a user's profile.
    User(UserRequest),
}

impl Request {
    /// Builds the full URL of the request against the given API endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_end_matches('/');
        match self {
            Request::Followers(request) => format!(
                "{endpoint}/users/{}/followers?per_page={FOLLOWERS_PER_PAGE}&page={}",
                request.username, request.page
            ),
            Request::User(request) => format!("{endpoint}/users/{}", request.username),
        }
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request::Followers(request) => write!(f, "{}", request),
            Request::User(request) => write!(f, "{}", request),
        }
    }
}

/// A request for one page of followers
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct FollowersRequest {
    /// The user whose followers are listed.
    pub(crate) username: Username,

    /// The 1-based page number.
    pub(crate) page: u32,
}

impl FollowersRequest {
    /// Creates a new `FollowersRequest`, validating the username.
    ///
    /// Page numbers start at 1, a page of 0 is read as 1.
    pub fn try_new(username: &str, page: u32) -> Result<Self, NetworkError> {
        Ok(Self {
            username: Username::parse(username)?,
            page: page.max(1),
        })
    }
}

impl Display for FollowersRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FollowersRequest: username={}, page={}",
            self.username, self.page
        )
    }
}

/// A request for a user's profile
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct UserRequest {
    /// The user to look up.
    pub(crate) username: Username,
}

impl UserRequest {
    /// Creates a new `UserRequest`, validating the username.
    pub fn try_new(username: &str) -> Result<Self, NetworkError> {
        Ok(Self {
            username: Username::parse(username)?,
        })
    }
}

impl Display for UserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserRequest: username={}", self.username)
    }
}
