mod cursor;
mod date;
mod entities;
mod error;
mod filter;
mod request;

pub use cursor::*;
pub use date::*;
pub use entities::*;
pub use error::*;
pub use filter::*;
pub use request::*;
