//! Context provider assembling the cached multi-symbol price summary.
//!
//! This is the composition point of the plugin: it validates configuration,
//! consults the injected cache, fans out one quote request per configured
//! symbol on a miss, writes the snapshot back, and renders the summary string
//! the host injects into agent context.

use chrono::Utc;
use futures_util::future::try_join_all;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::CachedQuote;
use crate::error::Result;
use crate::port::{PriceSource, PriceSourceFactory, QuoteCache, SettingsSource};

/// Cache key for the shared price snapshot.
pub const PRICE_CACHE_KEY: &str = "coinmarketcap/price";

/// Snapshot lifetime: one hour, in milliseconds.
pub const PRICE_CACHE_TTL_MS: i64 = 60 * 60 * 1000;

/// Currency every summary price is expressed in.
pub const QUOTE_CURRENCY: &str = "USD";

/// Cached read-through price provider over injected collaborators.
///
/// Collaborators are passed in at construction (no global state), so tests
/// can drive the full flow with fakes.
pub struct PriceProvider<S, C, F>
where
    S: SettingsSource,
    C: QuoteCache,
    F: PriceSourceFactory,
{
    settings: S,
    cache: C,
    source_factory: F,
}

impl<S, C, F> PriceProvider<S, C, F>
where
    S: SettingsSource,
    C: QuoteCache,
    F: PriceSourceFactory,
{
    /// Create a provider over the given collaborators.
    pub fn new(settings: S, cache: C, source_factory: F) -> Self {
        Self {
            settings,
            cache,
            source_factory,
        }
    }

    /// Produce the price summary string.
    ///
    /// Configuration and cache-read failures propagate. Fetch and cache-write
    /// failures degrade to an empty string: the host gets no context rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Returns an error when settings validation fails or the cache read
    /// fails.
    pub async fn get_prices(&self) -> Result<String> {
        let config = Config::validate(&self.settings)?;

        let cached = self.cache.get(PRICE_CACHE_KEY).await?;
        let quotes = match cached {
            Some(quotes) if snapshot_matches(&quotes, &config.target_symbols) => {
                debug!("using cached price data");
                quotes
            }
            cached => {
                if cached.is_some() {
                    debug!("cached snapshot does not match configured symbols, refetching");
                }
                info!(symbols = ?config.target_symbols, "fetching price data from CoinMarketCap");
                match self.fetch_and_cache(&config).await {
                    Ok(quotes) => quotes,
                    Err(err) => {
                        warn!(error = %err, "price fetch failed, degrading to empty summary");
                        return Ok(String::new());
                    }
                }
            }
        };

        Ok(format_summary(&quotes))
    }

    /// Fan out one quote request per target symbol and cache the snapshot.
    ///
    /// All requests run concurrently and join as one unit: the first failure
    /// fails the whole batch and nothing is cached.
    async fn fetch_and_cache(&self, config: &Config) -> Result<Vec<CachedQuote>> {
        let source = self.source_factory.create(&config.api_key);
        let fetches = config
            .target_symbols
            .iter()
            .map(|symbol| source.get_price(symbol, QUOTE_CURRENCY));
        let data = try_join_all(fetches).await?;

        let quotes: Vec<CachedQuote> = config
            .target_symbols
            .iter()
            .zip(data)
            .map(|(symbol, data)| CachedQuote::new(symbol.clone(), data))
            .collect();

        let expires_at_ms = Utc::now().timestamp_millis() + PRICE_CACHE_TTL_MS;
        self.cache
            .set(PRICE_CACHE_KEY, &quotes, expires_at_ms)
            .await?;

        Ok(quotes)
    }
}

/// True when the snapshot is non-empty and its symbol tags equal the
/// configured symbols, in order.
fn snapshot_matches(quotes: &[CachedQuote], target_symbols: &[String]) -> bool {
    !quotes.is_empty()
        && quotes.len() == target_symbols.len()
        && quotes
            .iter()
            .zip(target_symbols)
            .all(|(quote, symbol)| &quote.symbol == symbol)
}

/// Render `"The current price of SYM1: P1 USD, SYM2: P2 USD, ..."`.
fn format_summary(quotes: &[CachedQuote]) -> String {
    let body = quotes
        .iter()
        .map(|quote| format!("{}: {} {}", quote.symbol, quote.data.price, QUOTE_CURRENCY))
        .collect::<Vec<_>>()
        .join(", ");
    format!("The current price of {body}")
}
