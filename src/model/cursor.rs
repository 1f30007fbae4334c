use std::fmt::Display;

use super::{FOLLOWERS_PER_PAGE, Follower, Username};

/// Pagination progress through one user's follower list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// The user whose followers are paged.
    username: Username,

    /// The page currently loaded, or about to be.
    page_number: u32,

    /// Whether the server may hold more pages.
    has_more: bool,

    /// Whether the current page was loaded successfully.
    page_loaded: bool,
}

impl PageCursor {
    /// Creates a cursor at the first page.
    pub fn new(username: Username) -> Self {
        Self {
            username,
            page_number: 1,
            has_more: true,
            page_loaded: false,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn page_loaded(&self) -> bool {
        self.page_loaded
    }

    /// Moves to the next page, not loaded yet.
    pub(crate) fn advance(&mut self) {
        self.page_number = self.page_number.saturating_add(1);
        self.page_loaded = false;
    }

    /// Marks the current page loaded with the number of followers it returned.
    pub(crate) fn record_page_size(&mut self, total_fetched: usize) {
        self.has_more = total_fetched >= FOLLOWERS_PER_PAGE;
        self.page_loaded = true;
    }
}

impl Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PageCursor: username={}, page={}, has_more={}",
            self.username, self.page_number, self.has_more
        )
    }
}

/// The result of a successful page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The followers of the page just loaded.
    Loaded(Vec<Follower>),

    /// The user has no followers at all.
    NoFollowers,

    /// The current page was already loaded, nothing was requested.
    AlreadyLoaded,

    /// The last page was already loaded, nothing was requested.
    Exhausted,
}
