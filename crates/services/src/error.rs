//! Shared error types for the services crate.

use thiserror::Error;

use showcase_core::model::{AssetPath, ParseIdError, ProgressConfigError};

/// Errors emitted by an `EmailDelivery` implementation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeliveryError {
    #[error("email delivery is not configured")]
    Disabled,
    #[error("email delivery failed with status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by a `SceneProvider` while fetching or showing assets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssetLoadError {
    #[error("failed to load {path}: {cause}")]
    Fetch { path: AssetPath, cause: String },
    #[error("scene bridge closed before loading finished")]
    BridgeClosed,
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var} value: {raw}")]
    InvalidNumber { var: &'static str, raw: String },
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
    #[error(transparent)]
    Progress(#[from] ProgressConfigError),
}
