use std::fmt;

use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Setting key that failed validation.
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field-level failures from one validation pass, one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssues(pub Vec<FieldIssue>);

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.0 {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
            first = false;
        }
        Ok(())
    }
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CoinMarketCap configuration validation failed:\n{0}")]
    Validation(ValidationIssues),
}

/// Errors raised by a single quote request against the price API.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("missing required request field: {field}")]
    MissingRequestField { field: &'static str },

    #[error("quote request for {symbol} failed with status {status}")]
    Status {
        symbol: String,
        status: reqwest::StatusCode,
    },

    #[error("no {convert} price for {symbol} in response payload")]
    MissingPrice { symbol: String, convert: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Cache(String),
}

pub type Result<T> = std::result::Result<T, Error>;
