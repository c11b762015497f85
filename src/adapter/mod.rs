//! Outbound adapters: the CoinMarketCap client plus host-collaborator
//! implementations usable when the host does not inject its own.

pub mod coinmarketcap;
pub mod env;
pub mod memory;

pub use coinmarketcap::CoinMarketCap;
pub use env::EnvSettings;
pub use memory::MemoryCache;
