//! Thread-safe in-memory quote cache with absolute expiry.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::CachedQuote;
use crate::error::Result;
use crate::port::QuoteCache;

struct Entry {
    quotes: Vec<CachedQuote>,
    expires_at_ms: i64,
}

/// In-memory [`QuoteCache`] for hosts without their own cache manager, and
/// the deterministic backing store for tests.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live entries, expired ones included until read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<CachedQuote>>> {
        let now = Utc::now().timestamp_millis();
        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if entry.expires_at_ms > now => {
                    return Ok(Some(entry.quotes.clone()));
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.entries.write().remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, quotes: &[CachedQuote], expires_at_ms: i64) -> Result<()> {
        self.entries.write().insert(
            key.to_string(),
            Entry {
                quotes: quotes.to_vec(),
                expires_at_ms,
            },
        );
        Ok(())
    }
}
