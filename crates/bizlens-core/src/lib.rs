//! Shared domain records, configuration, and session handling for bizlens.

pub mod app_config;
pub mod config;
pub mod credentials;
pub mod locations;
pub mod metrics;
pub mod session;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use credentials::OAuthCredentials;
pub use locations::{load_locations, LocationsFile};
pub use metrics::{MetricValue, SummaryMetrics};
pub use session::{SessionContext, SessionMode};
pub use types::{DateRange, InsightRow, Location, Review};

/// Errors raised while validating domain records.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid rating {rating} for review {review_id}; must be between 1 and 5")]
    InvalidRating { review_id: i64, rating: u8 },

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

/// Errors raised while loading configuration from the environment or disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locations file: {0}")]
    LocationsFileParse(#[source] serde_yaml::Error),

    #[error("failed to parse credentials file: {0}")]
    CredentialsParse(#[source] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
