pub mod api;
pub mod cache;
pub mod decode;
pub mod endpoint;
pub mod models;
pub mod season;
pub mod segment;

pub use api::{fetch_endpoint, fetch_endpoints, fetch_ergast_data, fetch_typed};
pub use decode::{ApiResponse, decode_response};
pub use endpoint::{BASE_PATH, Endpoint, ResponseType};
pub use season::{Season, render_season};
pub use segment::PathSegment;
