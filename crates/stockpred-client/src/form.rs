use crate::error::{FormError, Result};
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

/// Dataset tag sent along with ticker predictions.
pub const DEFAULT_DATASET: &str = "valid";

pub const PREDICT_PATH: &str = "/predict";
pub const PREDICT_FUTURE_PATH: &str = "/predict_future";

/// Which kind of prediction a submission asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Prediction over the known dataset of a ticker.
    Ticker,
    /// Prediction forward from a start date.
    Future,
}

impl Branch {
    /// Pure function of the start date: any non-empty value selects [`Branch::Future`].
    pub fn select(start_date: &str) -> Self {
        if start_date.is_empty() {
            Branch::Ticker
        } else {
            Branch::Future
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FuturePayload {
    pub ticker_name: String,
    pub start_date: String,
}

/// Payload of request #1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionRequest {
    Ticker(String),
    Future(FuturePayload),
}

impl PredictionRequest {
    pub fn new(branch: Branch, ticker: String, start_date: String) -> Self {
        match branch {
            Branch::Ticker => PredictionRequest::Ticker(ticker),
            Branch::Future => PredictionRequest::Future(FuturePayload {
                ticker_name: ticker,
                start_date,
            }),
        }
    }

    pub fn branch(&self) -> Branch {
        match self {
            PredictionRequest::Ticker(_) => Branch::Ticker,
            PredictionRequest::Future(_) => Branch::Future,
        }
    }

    /// Request body: the raw ticker, or the JSON encoded future payload.
    pub fn body(&self) -> Result<String> {
        match self {
            PredictionRequest::Ticker(ticker) => Ok(ticker.clone()),
            PredictionRequest::Future(payload) => {
                serde_json::to_string(payload).map_err(FormError::Payload)
            }
        }
    }

    /// Same payload as query pairs, for methods that carry no body.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            PredictionRequest::Ticker(ticker) => vec![("ticker_name", ticker.clone())],
            PredictionRequest::Future(payload) => vec![
                ("ticker_name", payload.ticker_name.clone()),
                ("start_date", payload.start_date.clone()),
            ],
        }
    }
}

/// Payload of request #2: the prediction plus the context it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayRequest {
    Predict {
        ticker_name: String,
        predicted_data: String,
        dataset: String,
    },
    PredictFuture {
        start_date: String,
        predicted_data: String,
    },
}

impl RelayRequest {
    pub fn new(request: &PredictionRequest, predicted_data: String, dataset: &str) -> Self {
        match request {
            PredictionRequest::Ticker(ticker) => RelayRequest::Predict {
                ticker_name: ticker.clone(),
                predicted_data,
                dataset: dataset.to_string(),
            },
            PredictionRequest::Future(payload) => RelayRequest::PredictFuture {
                start_date: payload.start_date.clone(),
                predicted_data,
            },
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            RelayRequest::Predict { .. } => PREDICT_PATH,
            RelayRequest::PredictFuture { .. } => PREDICT_FUTURE_PATH,
        }
    }

    /// Form fields, in the order they are encoded.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            RelayRequest::Predict {
                ticker_name,
                predicted_data,
                dataset,
            } => vec![
                ("ticker_name", ticker_name.as_str()),
                ("predicted_data", predicted_data.as_str()),
                ("dataset", dataset.as_str()),
            ],
            RelayRequest::PredictFuture {
                start_date,
                predicted_data,
            } => vec![
                ("start_date", start_date.as_str()),
                ("predicted_data", predicted_data.as_str()),
            ],
        }
    }
}

/// A form submit event, carrying the form's own `method` and `action`.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub method: Method,
    pub action: Url,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(method: &str, action: &str) -> Result<Self> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|e| FormError::Config(format!("invalid form method `{method}`: {e}")))?;
        let action = Url::parse(action)
            .map_err(|e| FormError::Config(format!("invalid form action `{action}`: {e}")))?;
        Ok(SubmitEvent {
            method,
            action,
            default_prevented: false,
        })
    }

    /// Stop the browser-style navigation that would follow the submit.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_depends_only_on_start_date() {
        assert_eq!(Branch::select(""), Branch::Ticker);
        assert_eq!(Branch::select("2024-01-01"), Branch::Future);
        // whitespace is still a value
        assert_eq!(Branch::select(" "), Branch::Future);
    }

    #[test]
    fn ticker_body_is_raw_value() {
        let req = PredictionRequest::new(Branch::Ticker, "AAPL".into(), String::new());
        assert_eq!(req.body().unwrap(), "AAPL");
        assert_eq!(req.query(), vec![("ticker_name", "AAPL".to_string())]);
    }

    #[test]
    fn future_body_is_json_with_both_fields() {
        let req = PredictionRequest::new(Branch::Future, String::new(), "2024-01-01".into());
        let body = req.body().unwrap();
        assert_eq!(body, r#"{"ticker_name":"","start_date":"2024-01-01"}"#);

        let back: FuturePayload = serde_json::from_str(&body).unwrap();
        assert_eq!(back.start_date, "2024-01-01");
    }

    #[test]
    fn relay_for_ticker_carries_dataset() {
        let req = PredictionRequest::Ticker("AAPL".into());
        let relay = RelayRequest::new(&req, "{\"predictions\":[]}".into(), DEFAULT_DATASET);
        assert_eq!(relay.path(), "/predict");
        assert_eq!(
            relay.fields(),
            vec![
                ("ticker_name", "AAPL"),
                ("predicted_data", "{\"predictions\":[]}"),
                ("dataset", "valid"),
            ]
        );
    }

    #[test]
    fn relay_for_future_drops_ticker() {
        let req = PredictionRequest::new(Branch::Future, "IBM".into(), "2024-01-01".into());
        let relay = RelayRequest::new(&req, "result".into(), DEFAULT_DATASET);
        assert_eq!(relay.path(), "/predict_future");
        assert_eq!(
            relay.fields(),
            vec![("start_date", "2024-01-01"), ("predicted_data", "result")]
        );
    }

    #[test]
    fn submit_event_parses_method_and_action() {
        let event = SubmitEvent::new("post", "https://api.example.com/prod/predict").unwrap();
        assert_eq!(event.method, Method::POST);
        assert!(!event.default_prevented());

        assert!(matches!(
            SubmitEvent::new("POST", "not a url"),
            Err(FormError::Config(_))
        ));
    }
}
