//! The form submission handler: one submit event, two chained requests, one render.

use crate::error::Result;
use crate::form::{Branch, PredictionRequest, RelayRequest, SubmitEvent, DEFAULT_DATASET};
use crate::transport::Transport;
use crate::view::FormView;

/// What a finished submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub branch: Branch,
    /// Raw text of the prediction service response.
    pub prediction: String,
    /// Relay response, as written into the result container.
    pub rendered: String,
}

/// Read the form from `view` and build the prediction payload for the branch picked by the
/// start date.
pub fn read_form<V: FormView>(view: &V) -> Result<PredictionRequest> {
    // an absent picker counts as an empty date
    let start_date = view.start_date().unwrap_or_default();
    let branch = Branch::select(&start_date);

    let ticker = match branch {
        Branch::Ticker => view.ticker()?,
        Branch::Future => view.ticker().unwrap_or_default(),
    };

    let request = PredictionRequest::new(branch, ticker, start_date);
    log::debug!("{branch:?} prediction payload: {request:?}");
    Ok(request)
}

pub struct FormSubmissionHandler<T> {
    transport: T,
    dataset: String,
}

impl<T: Transport> FormSubmissionHandler<T> {
    pub fn new(transport: T) -> Self {
        FormSubmissionHandler {
            transport,
            dataset: DEFAULT_DATASET.to_string(),
        }
    }

    /// Dataset tag sent with ticker predictions (`valid` unless changed).
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Handle one submit event end to end.
    ///
    /// Navigation is suppressed before anything else, so it never happens whatever the
    /// outcome. The relay request is only built from a resolved prediction and the result
    /// container is only written from a resolved relay response.
    pub async fn submit<V: FormView>(
        &self,
        event: &mut SubmitEvent,
        view: &mut V,
    ) -> Result<Submission> {
        event.prevent_default();

        let request = read_form(&*view)?;
        let prediction = self
            .transport
            .predict(&event.method, &event.action, &request)
            .await?;
        log::trace!("prediction response: {prediction}");

        let relay = RelayRequest::new(&request, prediction.clone(), &self.dataset);
        let rendered = self.transport.relay(&relay).await?;
        log::trace!("relay response: {rendered}");

        view.render_result(&rendered)?;
        log::info!("{} rendered ({} bytes)", relay.path(), rendered.len());

        Ok(Submission {
            branch: request.branch(),
            prediction,
            rendered,
        })
    }
}
