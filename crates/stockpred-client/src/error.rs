//! Error type shared by every step of a form submission.

use std::fmt;
use thiserror::Error;

/// Which of the two network hops a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Request #1, sent to the prediction service.
    Prediction,
    /// Request #2, sent to the relay service.
    Relay,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Prediction => write!(f, "prediction"),
            Stage::Relay => write!(f, "relay"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{stage} request failed: {source}")]
    NetworkFailure {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("element not found: #{0}")]
    MissingElement(String),

    #[error("{stage} response is malformed: {reason}")]
    MalformedResponse { stage: Stage, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("request payload encoding failed: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("forecast parse error: {0}")]
    Forecast(#[from] serde_json::Error),

    #[error("forecast holds no predictions")]
    EmptyForecast,
}

impl FormError {
    pub fn network(stage: Stage, source: reqwest::Error) -> Self {
        FormError::NetworkFailure { stage, source }
    }

    pub fn malformed(stage: Stage, reason: impl Into<String>) -> Self {
        FormError::MalformedResponse {
            stage,
            reason: reason.into(),
        }
    }

    pub fn missing(id: &str) -> Self {
        FormError::MissingElement(id.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
