mod fetcher;
mod http;
mod persister;

pub use fetcher::*;
pub use http::*;
pub use persister::*;
