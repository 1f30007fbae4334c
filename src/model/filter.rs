use super::Follower;

/// Keeps the followers whose login contains the query, ignoring case.
///
/// An empty query keeps everything.
pub fn filter_followers(followers: &[Follower], query: &str) -> Vec<Follower> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return followers.to_vec();
    }

    followers
        .iter()
        .filter(|follower| follower.login().to_lowercase().contains(&query))
        .cloned()
        .collect()
}
