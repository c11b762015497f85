//! Quote data shared between the price service, provider, and cache.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single quote for one symbol in one currency.
///
/// Only `price` is guaranteed; the remaining fields are present when the
/// upstream payload carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    /// Quote price in the requested currency.
    pub price: Decimal,
    /// Market capitalization, when reported.
    pub market_cap: Option<Decimal>,
    /// Trading volume over the last 24 hours, when reported.
    pub volume_24h: Option<Decimal>,
    /// Price change over the last 24 hours, in percent, when reported.
    pub percent_change_24h: Option<Decimal>,
}

impl PriceData {
    /// Create a quote carrying only a price.
    #[must_use]
    pub fn from_price(price: Decimal) -> Self {
        Self {
            price,
            market_cap: None,
            volume_24h: None,
            percent_change_24h: None,
        }
    }
}

/// A cached quote tagged with the symbol it was fetched for.
///
/// The tag lets readers verify that a snapshot still matches the configured
/// symbol set instead of trusting positional alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedQuote {
    /// Target symbol the quote belongs to.
    pub symbol: String,
    /// The quote itself.
    pub data: PriceData,
}

impl CachedQuote {
    pub fn new(symbol: impl Into<String>, data: PriceData) -> Self {
        Self {
            symbol: symbol.into(),
            data,
        }
    }
}
