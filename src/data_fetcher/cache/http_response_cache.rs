use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::LazyLock;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::CachedHttpResponse;
use crate::constants::{HTTP_RESPONSE_CACHE_CAPACITY, cache_ttl};
use crate::data_fetcher::endpoint::Endpoint;
use crate::data_fetcher::season::Season;

// LRU cache structure for HTTP responses with TTL support
pub static HTTP_RESPONSE_CACHE: LazyLock<RwLock<LruCache<String, CachedHttpResponse>>> =
    LazyLock::new(|| {
        RwLock::new(LruCache::new(
            NonZeroUsize::new(HTTP_RESPONSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN),
        ))
    });

/// Picks how long a response for `endpoint` stays fresh.
///
/// Finished seasons are immutable, so they get the longest TTL. The season
/// list and all-seasons queries only grow once a year. The running season
/// changes after every race.
pub fn ttl_for_endpoint(endpoint: &Endpoint) -> u64 {
    match endpoint.season() {
        Some(season) if season.is_historical() => cache_ttl::HISTORICAL_SEASON_SECONDS,
        Some(Season::Year(_) | Season::Current) => cache_ttl::CURRENT_SEASON_SECONDS,
        None => cache_ttl::ALL_SEASONS_SECONDS,
    }
}

/// Caches HTTP response data with TTL
#[instrument(skip(url, data), fields(url = %url))]
pub async fn cache_http_response(url: String, data: String, ttl_seconds: u64) {
    let data_size = data.len();
    debug!(
        "Caching HTTP response: url={}, data_size={}, ttl={}s",
        url, data_size, ttl_seconds
    );

    let cached_data = CachedHttpResponse::new(data, ttl_seconds);
    let mut cache = HTTP_RESPONSE_CACHE.write().await;
    cache.put(url.clone(), cached_data);

    info!(
        "Cached HTTP response: url={}, data_size={}, ttl={}s",
        url, data_size, ttl_seconds
    );
}

/// Retrieves cached HTTP response if it's not expired
#[instrument(skip(url), fields(url = %url))]
pub async fn get_cached_http_response(url: &str) -> Option<String> {
    let mut cache = HTTP_RESPONSE_CACHE.write().await;

    if let Some(cached_entry) = cache.get(url) {
        if !cached_entry.is_expired() {
            debug!(
                "Cache hit for HTTP response: url={}, data_size={}, age={:?}",
                url,
                cached_entry.data.len(),
                cached_entry.cached_at.elapsed()
            );
            return Some(cached_entry.data.clone());
        }

        warn!(
            "Removing expired HTTP response cache entry: url={}, age={:?}, ttl={:?}",
            url,
            cached_entry.cached_at.elapsed(),
            cached_entry.ttl()
        );
        cache.pop(url);
    } else {
        debug!("Cache miss for HTTP response: url={}", url);
    }

    None
}

/// Gets the current HTTP response cache size for monitoring purposes
pub async fn get_http_response_cache_size() -> usize {
    HTTP_RESPONSE_CACHE.read().await.len()
}

/// Gets the HTTP response cache capacity for monitoring purposes
pub async fn get_http_response_cache_capacity() -> usize {
    HTTP_RESPONSE_CACHE.read().await.cap().get()
}

/// Clears all HTTP response cache entries
pub async fn clear_http_response_cache() {
    HTTP_RESPONSE_CACHE.write().await.clear();
}
