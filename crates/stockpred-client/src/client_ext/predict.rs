use crate::error::{FormError, Result, Stage};
use crate::form::{PredictionRequest, RelayRequest};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use std::future::Future;

pub trait ClientPredictExt {
    fn prediction_request(
        &self,
        method: &Method,
        url: &Url,
        request: &PredictionRequest,
    ) -> Result<RequestBuilder>;

    fn relay_request(&self, relay_base: &Url, relay: &RelayRequest) -> Result<RequestBuilder>;

    fn send_text(
        &self,
        request: RequestBuilder,
        stage: Stage,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientPredictExt for Client {
    /// Build request #1 with the form's own method and action.
    fn prediction_request(
        &self,
        method: &Method,
        url: &Url,
        request: &PredictionRequest,
    ) -> Result<RequestBuilder> {
        let builder = self.request(method.clone(), url.clone());

        // GET and HEAD carry nothing in the body, so the payload moves to the query
        if *method == Method::GET || *method == Method::HEAD {
            return Ok(builder.query(&request.query()));
        }

        let content_type = match request {
            PredictionRequest::Ticker(_) => "text/plain;charset=UTF-8",
            PredictionRequest::Future(_) => "application/json",
        };
        Ok(builder
            .header(CONTENT_TYPE, content_type)
            .body(request.body()?))
    }

    /// Build request #2: a form POST to the relay path under `relay_base`.
    fn relay_request(&self, relay_base: &Url, relay: &RelayRequest) -> Result<RequestBuilder> {
        let url = relay_base.join(relay.path()).map_err(|e| {
            FormError::Config(format!("cannot join `{}` onto `{relay_base}`: {e}", relay.path()))
        })?;
        Ok(self.post(url).form(&relay.fields()))
    }

    /// Send `request` and read the body as text, rejecting failed or non-textual responses.
    async fn send_text(&self, request: RequestBuilder, stage: Stage) -> Result<String> {
        let response = request
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| FormError::network(stage, e))?;

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type
                .to_str()
                .map_err(|_| FormError::malformed(stage, "unreadable content type header"))?;
            if !is_textual(content_type) {
                return Err(FormError::malformed(
                    stage,
                    format!("unexpected content type {content_type}"),
                ));
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FormError::network(stage, e))?;
        String::from_utf8(body.to_vec())
            .map_err(|e| FormError::malformed(stage, format!("body is not UTF-8: {e}")))
    }
}

/// Whether a `Content-Type` value names something that can be rendered as text.
pub fn is_textual(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence.starts_with("text/")
        || essence == "application/json"
        || essence == "application/xml"
        || essence.ends_with("+json")
        || essence.ends_with("+xml")
}
