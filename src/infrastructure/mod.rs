mod favorites_store;
mod fetcher_rest;
mod http_reqwest;
mod pager;
mod service;
mod storage_file;
mod storage_memory;

pub use favorites_store::*;
pub use fetcher_rest::*;
pub use http_reqwest::*;
pub use pager::*;
pub use service::*;
pub use storage_file::*;
pub use storage_memory::*;
