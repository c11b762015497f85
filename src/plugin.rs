//! Plugin metadata and default wiring.
//!
//! Hosts that inject their own settings source and cache manager construct
//! [`PriceProvider`](crate::provider::PriceProvider) and
//! [`PriceAction`](crate::action::PriceAction) directly; the helpers here
//! cover the common case of environment-sourced settings and an in-process
//! cache.

use crate::action::PriceAction;
use crate::adapter::{CoinMarketCap, EnvSettings, MemoryCache};
use crate::provider::PriceProvider;

/// Plugin name reported to the host runtime.
pub const PLUGIN_NAME: &str = "coinmarketcap";

/// Plugin description reported to the host runtime.
pub const PLUGIN_DESCRIPTION: &str = "CoinMarketCap price lookups for agent context";

fn coinmarketcap_source(api_key: &str) -> CoinMarketCap {
    CoinMarketCap::new(api_key)
}

/// Provider wired to environment settings, an in-memory cache, and the real
/// CoinMarketCap client.
pub type DefaultProvider =
    PriceProvider<EnvSettings, MemoryCache, fn(&str) -> CoinMarketCap>;

/// Action wired to environment settings and the real CoinMarketCap client.
pub type DefaultAction = PriceAction<EnvSettings, fn(&str) -> CoinMarketCap>;

/// Build a provider over environment settings and an in-memory cache.
#[must_use]
pub fn provider_from_env() -> DefaultProvider {
    PriceProvider::new(
        EnvSettings::new(),
        MemoryCache::new(),
        coinmarketcap_source as fn(&str) -> CoinMarketCap,
    )
}

/// Build an action over environment settings.
#[must_use]
pub fn action_from_env() -> DefaultAction {
    PriceAction::new(
        EnvSettings::new(),
        coinmarketcap_source as fn(&str) -> CoinMarketCap,
    )
}
