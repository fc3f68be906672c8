use futures::future::join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::fetch_utils::{fetch, fetch_with};
use super::http_client::create_http_client_with_timeout;
use super::urls::build_endpoint_url;
use crate::config::Config;
use crate::data_fetcher::cache::ttl_for_endpoint;
use crate::data_fetcher::decode::{ApiResponse, decode_response};
use crate::data_fetcher::endpoint::Endpoint;
use crate::error::AppError;

/// Fetches an endpoint and decodes it into its registered response shape.
///
/// The response type is looked up before anything is sent, so an endpoint
/// without a registered shape fails with [`AppError::MissingTypeMapping`]
/// without touching the network.
#[instrument(skip(client, config, endpoint), fields(endpoint = %endpoint.name()))]
pub async fn fetch_endpoint(
    client: &Client,
    config: &Config,
    endpoint: &Endpoint,
) -> Result<ApiResponse, AppError> {
    let response_type = endpoint.response_type()?;
    let url = build_endpoint_url(&config.api_domain, endpoint);
    debug!("Resolved {} to {} as {}", endpoint.name(), url, response_type);

    fetch_with(client, &url, ttl_for_endpoint(endpoint), |body| {
        decode_response(response_type, body, &url)
    })
    .await
}

/// Fetches an endpoint straight into a caller-chosen type.
///
/// The endpoint must still have a registered response type; `T` is trusted
/// to match it.
#[instrument(skip(client, config, endpoint), fields(endpoint = %endpoint.name()))]
pub async fn fetch_typed<T: DeserializeOwned>(
    client: &Client,
    config: &Config,
    endpoint: &Endpoint,
) -> Result<T, AppError> {
    endpoint.response_type()?;
    let url = build_endpoint_url(&config.api_domain, endpoint);
    fetch(client, &url, ttl_for_endpoint(endpoint)).await
}

/// Fetches several endpoints concurrently. Results keep the input order.
pub async fn fetch_endpoints(
    client: &Client,
    config: &Config,
    endpoints: &[Endpoint],
) -> Vec<Result<ApiResponse, AppError>> {
    info!("Fetching {} endpoints concurrently", endpoints.len());
    join_all(
        endpoints
            .iter()
            .map(|endpoint| fetch_endpoint(client, config, endpoint)),
    )
    .await
}

/// Builds a client from config and fetches a single endpoint.
pub async fn fetch_ergast_data(
    config: &Config,
    endpoint: &Endpoint,
) -> Result<ApiResponse, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    fetch_endpoint(&client, config, endpoint).await
}
