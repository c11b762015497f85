//! CoinMarketCap price plugin for conversational agent runtimes.
//!
//! This crate validates host-supplied settings, fetches cryptocurrency quotes
//! from the CoinMarketCap API, caches them for one hour through an injected
//! cache capability, and renders a summary string for injection into agent
//! context.
//!
//! # Architecture
//!
//! Host collaborators are modeled as ports so the full flow runs against
//! fakes in tests:
//!
//! - [`port::SettingsSource`] - the host's settings lookup
//! - [`port::QuoteCache`] - the host's cache manager
//! - [`port::PriceSource`] - the external quote API
//!
//! # Modules
//!
//! - [`config`] - settings validation with aggregated field errors
//! - [`domain`] - quote data shared across provider, service, and cache
//! - [`error`] - error types for the crate
//! - [`port`] - trait seams for host collaborators
//! - [`adapter`] - CoinMarketCap client and in-process collaborator defaults
//! - [`provider`] - cached multi-symbol price summary for agent context
//! - [`action`] - single-symbol price query handler
//! - [`plugin`] - plugin metadata and default wiring
//!
//! # Example
//!
//! ```no_run
//! use coinmarketcap_plugin::plugin;
//!
//! # async fn run() -> coinmarketcap_plugin::error::Result<()> {
//! let provider = plugin::provider_from_env();
//! let _summary = provider.get_prices().await?;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod plugin;
pub mod port;
pub mod provider;
