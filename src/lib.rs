//! Ergast Formula 1 statistics API client
//!
//! Maps every API resource to an [`Endpoint`], resolves it to a request path,
//! and decodes the response into the shape registered for its
//! [`ResponseType`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use f1_ergast::{ApiResponse, AppError, Config, Endpoint, Season, fetch_ergast_data};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let endpoint = Endpoint::RaceResults(Season::Year(1998));
//!     assert_eq!(endpoint.resolve_path(), "/api/f1/1998/results.json");
//!
//!     if let ApiResponse::RaceResults(results) = fetch_ergast_data(&config, &endpoint).await? {
//!         for race in results.data.races() {
//!             println!("{} {}", race.race.round, race.race.race_name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    ApiResponse, Endpoint, ResponseType, Season, decode_response, fetch_endpoint,
    fetch_endpoints, fetch_ergast_data, fetch_typed,
};
pub use error::AppError;

// Re-export cache monitoring functions for external tools
pub use data_fetcher::cache::{
    clear_http_response_cache, get_http_response_cache_capacity, get_http_response_cache_size,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
