use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("unit(s) not available for the requested period: {}", unit_ids.join(", "))]
    UnitUnavailable { unit_ids: Vec<String> },

    #[error("no rate bucket covers every night of {check_in}..{check_out} for unit {unit_id}")]
    PricingDataMissing {
        unit_id: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("rental unit not found: {id}")]
    UnitNotFound { id: String },

    #[error("backend query failed: {reason}")]
    BackendQuery { reason: String },

    #[error("invalid quote request: {reason}")]
    InvalidParams { reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
