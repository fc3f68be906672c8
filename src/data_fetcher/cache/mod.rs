pub mod types;
mod http_response_cache;

pub use types::*;
pub use http_response_cache::*;
