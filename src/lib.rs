//! Business logic of a GitHub follower browser: paginated follower fetching,
//! user profiles, local favorites and search filtering.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
