//! Cache data structures with TTL support

use std::time::{Duration, Instant};

/// Raw response body cached under its request URL
#[derive(Debug, Clone)]
pub struct CachedHttpResponse {
    pub data: String,
    pub cached_at: Instant,
    pub ttl_seconds: u64,
}

impl CachedHttpResponse {
    /// Creates a new cached HTTP response entry
    pub fn new(data: String, ttl_seconds: u64) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
            ttl_seconds,
        }
    }

    /// Checks if the cached data is expired
    pub fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl()
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// Gets the remaining time until expiration
    pub fn time_until_expiry(&self) -> Duration {
        self.ttl().saturating_sub(self.cached_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CachedHttpResponse::new("{}".to_string(), 60);
        assert!(!entry.is_expired());
        assert!(entry.time_until_expiry() <= Duration::from_secs(60));
    }

    #[test]
    fn test_zero_ttl_expires() {
        let entry = CachedHttpResponse::new("{}".to_string(), 0);
        std::thread::sleep(Duration::from_millis(5));
        assert!(entry.is_expired());
        assert_eq!(entry.time_until_expiry(), Duration::ZERO);
    }
}
