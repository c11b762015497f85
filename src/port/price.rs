//! Price lookup port for external quote APIs.

use async_trait::async_trait;

use crate::domain::PriceData;
use crate::error::Result;

/// Client for a single-symbol price lookup against an external API.
///
/// Implementations handle authentication and response parsing. One symbol per
/// call; fan-out across symbols is the caller's job. No caching, no retries.
///
/// # Errors
///
/// [`get_price`](Self::get_price) returns an error for transport failures,
/// non-success responses, or payloads missing the requested price.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current price of `symbol` expressed in `convert`.
    async fn get_price(&self, symbol: &str, convert: &str) -> Result<PriceData>;
}

/// Factory producing a [`PriceSource`] from a validated API key.
///
/// The provider validates configuration on every invocation and builds a
/// fresh source from the resulting key. Tests substitute a closure returning
/// a scripted source.
pub trait PriceSourceFactory: Send + Sync {
    type Source: PriceSource;

    /// Build a price source authenticated with `api_key`.
    fn create(&self, api_key: &str) -> Self::Source;
}

impl<P, F> PriceSourceFactory for F
where
    P: PriceSource,
    F: Fn(&str) -> P + Send + Sync,
{
    type Source = P;

    fn create(&self, api_key: &str) -> P {
        self(api_key)
    }
}
