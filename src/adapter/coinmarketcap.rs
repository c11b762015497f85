//! CoinMarketCap quote client.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::PriceData;
use crate::error::{Error, Result, ServiceError};
use crate::port::PriceSource;

const API_URL: &str = "https://pro-api.coinmarketcap.com/v1/cryptocurrency/quotes/latest";

/// CoinMarketCap client authenticated with a Pro API key.
pub struct CoinMarketCap {
    client: Client,
    api_key: String,
}

impl CoinMarketCap {
    /// Create a new client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Deserialize)]
struct QuotesResponse {
    data: HashMap<String, CoinData>,
}

#[derive(Deserialize)]
struct CoinData {
    quote: HashMap<String, Quote>,
}

#[derive(Deserialize)]
struct Quote {
    price: Decimal,
    market_cap: Option<Decimal>,
    volume_24h: Option<Decimal>,
    percent_change_24h: Option<Decimal>,
}

impl From<Quote> for PriceData {
    fn from(quote: Quote) -> Self {
        Self {
            price: quote.price,
            market_cap: quote.market_cap,
            volume_24h: quote.volume_24h,
            percent_change_24h: quote.percent_change_24h,
        }
    }
}

fn extract_quote(response: QuotesResponse, symbol: &str, convert: &str) -> Result<PriceData> {
    response
        .data
        .into_iter()
        .find(|(key, _)| key == symbol)
        .and_then(|(_, coin)| coin.quote.into_iter().find(|(key, _)| key == convert))
        .map(|(_, quote)| quote.into())
        .ok_or_else(|| {
            ServiceError::MissingPrice {
                symbol: symbol.to_string(),
                convert: convert.to_string(),
            }
            .into()
        })
}

#[async_trait]
impl PriceSource for CoinMarketCap {
    async fn get_price(&self, symbol: &str, convert: &str) -> Result<PriceData> {
        if symbol.trim().is_empty() {
            return Err(ServiceError::MissingRequestField { field: "symbol" }.into());
        }
        if convert.trim().is_empty() {
            return Err(ServiceError::MissingRequestField { field: "convert" }.into());
        }

        let response = self
            .client
            .get(API_URL)
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .header("Accept", "application/json")
            .query(&[("symbol", symbol), ("convert", convert)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Service(ServiceError::Status {
                symbol: symbol.to_string(),
                status,
            }));
        }

        let payload = response.json::<QuotesResponse>().await?;
        extract_quote(payload, symbol, convert)
    }
}
