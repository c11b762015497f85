//! Ports (driven side): interfaces implemented by host collaborators and
//! outbound adapters.
//!
//! These contracts describe the host runtime's settings lookup, its cache
//! manager, and the external price API.

pub mod cache;
pub mod price;
pub mod settings;

pub use cache::QuoteCache;
pub use price::{PriceSource, PriceSourceFactory};
pub use settings::SettingsSource;
