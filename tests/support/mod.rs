#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use coinmarketcap_plugin::domain::{CachedQuote, PriceData};
use coinmarketcap_plugin::error::{Error, Result, ServiceError};
use coinmarketcap_plugin::port::{PriceSource, QuoteCache, SettingsSource};

/// Settings source over a fixed key/value map.
#[derive(Clone, Default)]
pub struct FakeSettings {
    values: HashMap<String, String>,
}

impl FakeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl SettingsSource for FakeSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Single-slot cache recording reads and writes for assertions.
#[derive(Clone, Default)]
pub struct RecordingCache {
    entry: Arc<Mutex<Option<(Vec<CachedQuote>, i64)>>>,
    fail_reads: bool,
    gets: Arc<AtomicUsize>,
    sets: Arc<AtomicUsize>,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose reads always fail.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Seed the cache with a snapshot that never expires during the test.
    pub fn preload(&self, quotes: Vec<CachedQuote>) {
        *self.entry.lock().expect("lock cache entry") = Some((quotes, i64::MAX));
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::Relaxed)
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::Relaxed)
    }

    /// The last written snapshot and its expiry, if any write happened.
    pub fn last_write(&self) -> Option<(Vec<CachedQuote>, i64)> {
        self.entry.lock().expect("lock cache entry").clone()
    }
}

#[async_trait]
impl QuoteCache for RecordingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<CachedQuote>>> {
        self.gets.fetch_add(1, Ordering::Relaxed);
        if self.fail_reads {
            return Err(Error::Cache("cache manager unavailable".to_string()));
        }
        Ok(self
            .entry
            .lock()
            .expect("lock cache entry")
            .as_ref()
            .map(|(quotes, _)| quotes.clone()))
    }

    async fn set(&self, _key: &str, quotes: &[CachedQuote], expires_at_ms: i64) -> Result<()> {
        self.sets.fetch_add(1, Ordering::Relaxed);
        *self.entry.lock().expect("lock cache entry") = Some((quotes.to_vec(), expires_at_ms));
        Ok(())
    }
}

/// Price source answering from a fixed table, with optional scripted failures.
#[derive(Clone, Default)]
pub struct ScriptedPriceSource {
    prices: HashMap<String, Decimal>,
    failing: HashSet<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(symbol.to_string(), price);
        self
    }

    pub fn with_failure(mut self, symbol: &str) -> Self {
        self.failing.insert(symbol.to_string());
        self
    }

    /// Total quote requests served across all clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Factory closure handing the provider a clone of this source.
    pub fn factory(&self) -> impl Fn(&str) -> ScriptedPriceSource + Send + Sync {
        let source = self.clone();
        move |_api_key: &str| source.clone()
    }
}

#[async_trait]
impl PriceSource for ScriptedPriceSource {
    async fn get_price(&self, symbol: &str, convert: &str) -> Result<PriceData> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(symbol) {
            return Err(Error::Service(ServiceError::Status {
                symbol: symbol.to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }));
        }
        self.prices
            .get(symbol)
            .map(|price| PriceData::from_price(*price))
            .ok_or_else(|| {
                Error::Service(ServiceError::MissingPrice {
                    symbol: symbol.to_string(),
                    convert: convert.to_string(),
                })
            })
    }
}
