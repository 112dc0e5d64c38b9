use crate::client_ext::predict::ClientPredictExt;
use crate::error::{Result, Stage};
use crate::form::{PredictionRequest, RelayRequest};
use reqwest::{Client, Method, Url};
use std::future::Future;

/// The two network hops of a submission.
pub trait Transport {
    /// Request #1: ask the prediction service, returning its raw text.
    fn predict(
        &self,
        method: &Method,
        url: &Url,
        request: &PredictionRequest,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Request #2: hand the prediction to the relay service, returning its raw text.
    fn relay(&self, relay: &RelayRequest) -> impl Future<Output = Result<String>> + Send;
}

/// [`Transport`] over HTTP, relaying to paths under `relay_base`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    relay_base: Url,
}

impl HttpTransport {
    pub fn new(client: Client, relay_base: Url) -> Self {
        HttpTransport { client, relay_base }
    }

    pub fn relay_base(&self) -> &Url {
        &self.relay_base
    }
}

impl Transport for HttpTransport {
    async fn predict(
        &self,
        method: &Method,
        url: &Url,
        request: &PredictionRequest,
    ) -> Result<String> {
        let builder = self.client.prediction_request(method, url, request)?;
        log::info!("{method} {url}");
        self.client.send_text(builder, Stage::Prediction).await
    }

    async fn relay(&self, relay: &RelayRequest) -> Result<String> {
        let builder = self.client.relay_request(&self.relay_base, relay)?;
        log::info!("POST {} (relay)", relay.path());
        self.client.send_text(builder, Stage::Relay).await
    }
}
