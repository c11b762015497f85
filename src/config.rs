//! Plugin configuration validated from host-supplied settings.
//!
//! The host runtime exposes settings through the [`SettingsSource`] port.
//! Validation reads the two keys this plugin cares about, aggregates every
//! field-level failure into a single [`ConfigError`], and applies the default
//! symbol list as an explicit branch rather than a schema side effect.

use crate::error::{ConfigError, FieldIssue, Result, ValidationIssues};
use crate::port::SettingsSource;

/// Setting key holding the CoinMarketCap API key.
pub const API_KEY_SETTING: &str = "COINMARKETCAP_API_KEY";

/// Setting key holding the comma-separated target symbol list.
pub const TARGET_SYMBOLS_SETTING: &str = "COINMARKETCAP_PROVIDER_TARGET_SYMBOLS";

/// Symbols used when the target-symbols setting is unset or parses to nothing.
pub const DEFAULT_TARGET_SYMBOLS: [&str; 4] = ["BTC", "ETH", "BNB", "SOL"];

/// Validated plugin configuration.
///
/// Built fresh on every provider invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CoinMarketCap API key, non-empty.
    pub api_key: String,
    /// Ordered symbols to quote, non-empty strings, order preserved.
    pub target_symbols: Vec<String>,
}

impl Config {
    /// Read and validate settings from the host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] aggregating every field-level
    /// failure when the API key is missing, empty, or whitespace-only.
    pub fn validate(settings: &impl SettingsSource) -> Result<Self> {
        let mut issues = Vec::new();

        let api_key = settings
            .get_setting(API_KEY_SETTING)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            issues.push(FieldIssue::new(
                API_KEY_SETTING,
                "CoinMarketCap API key is required",
            ));
        }

        let parsed = parse_target_symbols(settings.get_setting(TARGET_SYMBOLS_SETTING).as_deref());
        // Explicit defaulting branch: empty parse result (unset, blank, or all
        // empty tokens) falls back to the fixed default list.
        let target_symbols = if parsed.is_empty() {
            DEFAULT_TARGET_SYMBOLS.map(str::to_string).to_vec()
        } else {
            parsed
        };

        if !issues.is_empty() {
            return Err(ConfigError::Validation(ValidationIssues(issues)).into());
        }

        Ok(Self {
            // Safe: issues is empty, so the key was present and non-blank.
            api_key: api_key.unwrap_or_default(),
            target_symbols,
        })
    }
}

/// Split a comma-separated symbol string, trimming tokens and dropping empties.
///
/// Order is preserved and case is left untouched.
fn parse_target_symbols(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
