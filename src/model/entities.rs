use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops::Deref,
};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::{NetworkError, ProfileError, format_month_year};

/// A validated GitHub login used to build request URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parses a username, rejecting anything that can't be a GitHub login.
    pub fn parse(username: &str) -> Result<Self, NetworkError> {
        let username = username.trim();
        let is_valid = !username.is_empty()
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !is_valid {
            return Err(NetworkError::InvalidUsername);
        }

        Ok(Self(username.to_string()))
    }
}

impl Deref for Username {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A follower as returned by the followers list endpoint.
///
/// Two followers are the same follower when their logins match, whatever their avatars.
#[derive(Serialize, Deserialize, Debug, Clone, Eq)]
pub struct Follower {
    login: String,
    avatar_url: String,
}

impl Follower {
    /// Creates a new `Follower` instance.
    pub fn new(login: &str, avatar_url: &str) -> Self {
        Self {
            login: login.to_string(),
            avatar_url: avatar_url.to_string(),
        }
    }

    /// Retrieves the login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Retrieves the avatar URL.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Creates a dummy `Follower` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(index: usize) -> Self {
        Self::new(
            &format!("follower-{index}"),
            &format!("https://avatars.githubusercontent.com/u/{index}"),
        )
    }
}

impl PartialEq for Follower {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login
    }
}

impl Hash for Follower {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.login.hash(state);
    }
}

impl Display for Follower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Follower: {}", self.login)
    }
}

/// The public profile of a GitHub user.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    login: String,
    avatar_url: String,
    name: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    public_repos: u32,
    public_gists: u32,
    html_url: String,
    following: u32,
    followers: u32,
    created_at: String,
}

impl UserProfile {
    /// Retrieves the login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Retrieves the avatar URL.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Retrieves the display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Retrieves the location, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Retrieves the bio, if any.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn public_repos(&self) -> u32 {
        self.public_repos
    }

    pub fn public_gists(&self) -> u32 {
        self.public_gists
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    pub fn following(&self) -> u32 {
        self.following
    }

    pub fn followers(&self) -> u32 {
        self.followers
    }

    /// Retrieves the raw account creation timestamp.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// The follower record stored when this user is favorited.
    pub fn as_follower(&self) -> Follower {
        Follower::new(&self.login, &self.avatar_url)
    }

    /// Whether there is any follower list worth opening for this user.
    pub fn has_followers(&self) -> bool {
        self.followers != 0
    }

    /// Parses the web profile URL.
    pub fn profile_url(&self) -> Result<Url, ProfileError> {
        Url::parse(&self.html_url).map_err(|_| ProfileError::InvalidUrl(self.html_url.clone()))
    }

    /// The "member since" line shown under a profile.
    pub fn member_since(&self) -> String {
        format!("GitHub since {}", format_month_year(&self.created_at))
    }

    /// Creates a dummy `UserProfile` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self {
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
            name: Some("The Octocat".to_string()),
            location: Some("San Francisco".to_string()),
            bio: None,
            public_repos: 8,
            public_gists: 8,
            html_url: "https://github.com/octocat".to_string(),
            following: 9,
            followers: 4000,
            created_at: "2011-01-25T18:44:36Z".to_string(),
        }
    }
}

impl Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {}, Repos: {}, Gists: {}, Followers: {}, Following: {}",
            self.login, self.public_repos, self.public_gists, self.followers, self.following
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    mod username {
        use super::*;

        #[test]
        fn parse_accepts_github_logins() {
            assert_eq!("octocat", *Username::parse(" octocat ").unwrap());
            assert_eq!("some-user_1", *Username::parse("some-user_1").unwrap());
        }

        #[test]
        fn parse_rejects_empty_or_malformed() {
            for username in ["", "   ", "octo cat", "octo/cat", "octocat?page=2", "ünïcode"] {
                assert_eq!(
                    Err(NetworkError::InvalidUsername),
                    Username::parse(username),
                    "username: {username:?}"
                );
            }
        }
    }

    mod follower {
        use super::*;

        #[test]
        fn identity_is_the_login() {
            let follower = Follower::new("octocat", "https://example.com/a.png");
            let same_login = Follower::new("octocat", "https://example.com/b.png");

            assert_eq!(follower, same_login);
            assert_eq!(
                1,
                HashSet::from([follower, same_login]).len(),
                "followers with the same login should hash the same"
            );
        }

        #[test]
        fn decodes_snake_case_keys() {
            let follower: Follower = serde_json::from_value(json!({
                "login": "octocat",
                "id": 583231,
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "type": "User"
            }))
            .unwrap();

            assert_eq!("octocat", follower.login());
            assert_eq!(
                "https://avatars.githubusercontent.com/u/583231?v=4",
                follower.avatar_url()
            );
        }
    }

    mod user_profile {
        use super::*;

        #[test]
        fn as_follower_keeps_login_and_avatar() {
            let profile = UserProfile::dummy();

            let follower = profile.as_follower();

            assert_eq!("octocat", follower.login());
            assert_eq!(profile.avatar_url(), follower.avatar_url());
        }

        #[test]
        fn profile_url_rejects_invalid_url() {
            let profile = UserProfile {
                html_url: "not a url".to_string(),
                ..UserProfile::dummy()
            };

            assert_eq!(
                Err(ProfileError::InvalidUrl("not a url".to_string())),
                profile.profile_url()
            );
            assert_eq!(
                "https://github.com/octocat",
                UserProfile::dummy().profile_url().unwrap().as_str()
            );
        }

        #[test]
        fn has_followers_is_false_without_followers() {
            let profile = UserProfile {
                followers: 0,
                ..UserProfile::dummy()
            };

            assert!(!profile.has_followers());
            assert!(UserProfile::dummy().has_followers());
        }

        #[test]
        fn member_since_uses_month_and_year() {
            assert_eq!("GitHub since Jan 2011", UserProfile::dummy().member_since());
        }
    }
}
