use crate::error::{FormError, Result};
use crate::form::{SubmitEvent, DEFAULT_DATASET};
use crate::transport::HttpTransport;
use reqwest::Url;

pub const DEFAULT_METHOD: &str = "POST";
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:5000";

/// Where the form submits to and where the prediction is relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Form `action`; `PREDICTION_URL`.
    pub prediction_url: Option<String>,
    /// Form `method`; `PREDICTION_METHOD`.
    pub prediction_method: String,
    /// Origin the relay paths live under; `RELAY_URL`.
    pub relay_url: String,
    /// `USER_AGENT`.
    pub user_agent: String,
    /// `PREDICTION_DATASET`.
    pub dataset: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            prediction_url: None,
            prediction_method: DEFAULT_METHOD.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            user_agent: format!("stockpred/{}", env!("CARGO_PKG_VERSION")),
            dataset: DEFAULT_DATASET.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read from the process environment; call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ClientConfig::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        ClientConfig {
            prediction_url: var("PREDICTION_URL"),
            prediction_method: var("PREDICTION_METHOD").unwrap_or(defaults.prediction_method),
            relay_url: var("RELAY_URL").unwrap_or(defaults.relay_url),
            user_agent: var("USER_AGENT").unwrap_or(defaults.user_agent),
            dataset: var("PREDICTION_DATASET").unwrap_or(defaults.dataset),
        }
    }

    /// The submit event the form would fire with this method and action.
    pub fn submit_event(&self) -> Result<SubmitEvent> {
        let action = self
            .prediction_url
            .as_deref()
            .ok_or_else(|| FormError::Config("PREDICTION_URL is not set".to_string()))?;
        SubmitEvent::new(&self.prediction_method, action)
    }

    pub fn relay_base(&self) -> Result<Url> {
        Url::parse(&self.relay_url)
            .map_err(|e| FormError::Config(format!("invalid relay url `{}`: {e}", self.relay_url)))
    }

    pub fn transport(&self) -> Result<HttpTransport> {
        let client = build_client(&self.user_agent)?;
        Ok(HttpTransport::new(client, self.relay_base()?))
    }
}

pub fn build_client(user_agent: &str) -> Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()
        .map_err(|e| FormError::Config(format!("failed to build http client: {e}")))
}
