use std::sync::Arc;

use log::{info, warn};

use crate::{
    Follower, GitHubFetcher, NetworkError, PageCursor, PageOutcome, Username, filter_followers,
};

/// Pages through the followers of one user, accumulating them in server order.
///
/// A pager is a single screen session: every load takes `&mut self`, so at most
/// one page is in flight at a time.
pub struct FollowerPager {
    fetcher: Arc<dyn GitHubFetcher>,
    cursor: PageCursor,
    followers: Vec<Follower>,
}

impl FollowerPager {
    /// Creates a new `FollowerPager` at the first page of the user's followers.
    pub fn try_new(fetcher: Arc<dyn GitHubFetcher>, username: &str) -> Result<Self, NetworkError> {
        Ok(Self {
            fetcher,
            cursor: PageCursor::new(Username::parse(username)?),
            followers: vec![],
        })
    }

    /// Restarts the session for another user.
    pub fn reset(&mut self, username: &str) -> Result<(), NetworkError> {
        self.cursor = PageCursor::new(Username::parse(username)?);
        self.followers.clear();
        info!("Pager reset: {}", self.cursor);

        Ok(())
    }

    /// Loads the cursor's current page.
    ///
    /// Used for the first page, and to retry a page whose load failed. A page
    /// already loaded isn't requested again.
    pub async fn load(&mut self) -> Result<PageOutcome, NetworkError> {
        if self.cursor.page_loaded() {
            return Ok(PageOutcome::AlreadyLoaded);
        }
        let page_number = self.cursor.page_number();
        let page = self
            .fetcher
            .fetch_followers(self.cursor.username(), page_number)
            .await
            .inspect_err(|e| warn!("Failed to load page {page_number}: {e}"))?;
        self.cursor.record_page_size(page.len());
        self.followers.extend(page.iter().cloned());
        info!(
            "Loaded {} followers, total={}, {}",
            page.len(),
            self.followers.len(),
            self.cursor
        );
        if self.followers.is_empty() {
            return Ok(PageOutcome::NoFollowers);
        }

        Ok(PageOutcome::Loaded(page))
    }

    /// Loads the next page, when the user scrolled near the bottom of the list.
    pub async fn load_more(&mut self) -> Result<PageOutcome, NetworkError> {
        if !self.cursor.has_more() {
            return Ok(PageOutcome::Exhausted);
        }
        self.cursor.advance();

        self.load().await
    }

    /// Loads pages until the last one, returning every follower.
    pub async fn load_all(&mut self) -> Result<&[Follower], NetworkError> {
        if !self.cursor.page_loaded() {
            self.load().await?;
        }
        while self.cursor.has_more() {
            self.load_more().await?;
        }

        Ok(&self.followers)
    }

    /// Retrieves the followers accumulated so far.
    pub fn followers(&self) -> &[Follower] {
        &self.followers
    }

    /// Retrieves the followers accumulated so far whose login matches the query.
    pub fn visible_followers(&self, query: &str) -> Vec<Follower> {
        filter_followers(&self.followers, query)
    }

    /// Retrieves the pagination cursor.
    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }
}
