use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, error};

struct CacheEntry {
    expires_at: Instant,
    payload: String,
}

/// Time-bounded memoization for the read-aggregate endpoints (menu listing,
/// revenue, statistics), keyed by query parameters. Values are stored as
/// serialized JSON; entries expire after their TTL and are never invalidated
/// by writes — the staleness window is an accepted property of these
/// informational endpoints.
#[derive(Default)]
pub struct CacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn get_from_cache<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                match serde_json::from_str(&entry.payload) {
                    Ok(parsed) => {
                        debug!("Cache hit for key: {key}");
                        Some(parsed)
                    }
                    Err(e) => {
                        error!("Failed to deserialize cached value for key '{key}': {e:?}");
                        None
                    }
                }
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn set_to_cache<T>(&self, key: &str, data: &T, ttl: Duration)
    where
        T: Serialize,
    {
        let payload = match serde_json::to_string(data) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize data for key '{key}': {e:?}");
                return;
            }
        };

        self.lock().insert(
            key.to_string(),
            CacheEntry {
                expires_at: Instant::now() + ttl,
                payload,
            },
        );
        debug!("Cached key '{key}' with TTL {ttl:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let cache = CacheStore::new();
        cache.set_to_cache("k", &vec![1, 2, 3], Duration::from_secs(60));
        assert_eq!(cache.get_from_cache::<Vec<i32>>("k"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = CacheStore::new();
        cache.set_to_cache("k", &1, Duration::from_secs(0));
        assert_eq!(cache.get_from_cache::<i32>("k"), None);
    }
}
