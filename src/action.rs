//! Single-symbol price query action.
//!
//! The host invokes this when a conversation asks for one price directly,
//! as opposed to the provider's ambient multi-symbol summary. Errors surface
//! to the host's action framework; there is no degradation here.

use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::port::{PriceSource, PriceSourceFactory, SettingsSource};

/// Handler answering one symbol/currency price query.
pub struct PriceAction<S, F>
where
    S: SettingsSource,
    F: PriceSourceFactory,
{
    settings: S,
    source_factory: F,
}

impl<S, F> PriceAction<S, F>
where
    S: SettingsSource,
    F: PriceSourceFactory,
{
    pub fn new(settings: S, source_factory: F) -> Self {
        Self {
            settings,
            source_factory,
        }
    }

    /// Fetch one quote and format the reply.
    ///
    /// Symbol and currency are uppercased before the lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when validation fails, either input is blank, or the
    /// quote request fails.
    pub async fn handle(&self, symbol: &str, currency: &str) -> Result<String> {
        let config = Config::validate(&self.settings)?;

        let symbol = symbol.trim().to_uppercase();
        let currency = currency.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ServiceError::MissingRequestField { field: "symbol" }.into());
        }
        if currency.is_empty() {
            return Err(ServiceError::MissingRequestField { field: "convert" }.into());
        }

        debug!(%symbol, %currency, "handling price query");
        let source = self.source_factory.create(&config.api_key);
        let data = source.get_price(&symbol, &currency).await?;

        Ok(format!(
            "The current price of {symbol} is {} {currency}",
            data.price
        ))
    }
}
