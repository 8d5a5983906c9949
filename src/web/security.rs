use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Simple in-memory rate limiter, keyed by caller-chosen strings such as
/// `comment:<ip>`. Good enough for keeping one browser from spamming the
/// comment form; anything stronger belongs in the backend.
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if the request is allowed, false once `max_requests`
    /// have been seen inside `window`.
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = match self.requests.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        // Prune expired timestamps everywhere, not just under the current
        // key, and drop emptied entries so the map does not grow by one
        // entry per client address forever.
        requests.retain(|_, timestamps| {
            timestamps.retain(|t| {
                now.duration_since(*t)
                    .map(|elapsed| elapsed < window)
                    .unwrap_or(false)
            });
            !timestamps.is_empty()
        });

        let timestamps = requests.entry(key.to_string()).or_default();
        if timestamps.len() >= max_requests {
            return false;
        }

        timestamps.push(now);
        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_then_blocks() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);

        for _ in 0..5 {
            assert!(limiter.check_rate_limit("comment:10.0.0.1", 5, window));
        }
        assert!(!limiter.check_rate_limit("comment:10.0.0.1", 5, window));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new();
        let window = Duration::from_secs(60);

        assert!(limiter.check_rate_limit("comment:10.0.0.1", 1, window));
        assert!(!limiter.check_rate_limit("comment:10.0.0.1", 1, window));
        assert!(limiter.check_rate_limit("comment:10.0.0.2", 1, window));
    }

    #[test]
    fn test_stale_keys_are_evicted() {
        let limiter = RateLimiter::new();

        // A zero-length window expires every timestamp immediately, so each
        // call should sweep out all previously seen clients.
        for n in 0..1000u32 {
            let key = format!("comment:10.0.{}.{}", n / 256, n % 256);
            limiter.check_rate_limit(&key, 5, Duration::ZERO);
        }

        let tracked = limiter.requests.lock().unwrap().len();
        assert!(tracked <= 1, "limiter still tracks {tracked} stale keys");
    }
}
