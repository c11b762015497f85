//! Cache port backed by the host runtime's cache manager.

use async_trait::async_trait;

use crate::domain::CachedQuote;
use crate::error::Result;

/// Key/value cache for quote snapshots with absolute expiry.
///
/// Implementations wrap the host cache manager; expiry is an absolute epoch
/// timestamp in milliseconds, enforced by the cache, not the caller.
#[async_trait]
pub trait QuoteCache: Send + Sync {
    /// Read the snapshot stored under `key`, if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<Vec<CachedQuote>>>;

    /// Store a snapshot under `key`, expiring at `expires_at_ms` (epoch ms).
    async fn set(&self, key: &str, quotes: &[CachedQuote], expires_at_ms: i64) -> Result<()>;
}
