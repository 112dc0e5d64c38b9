pub mod client_ext;
pub mod config;
pub mod error;
pub mod forecast;
pub mod form;
pub mod handler;
pub mod transport;
pub mod view;

pub mod prelude {
    pub use crate::client_ext::predict::ClientPredictExt as Predict;
    #[allow(unused_imports)]
    pub use crate::client_ext::Client;

    pub use crate::config::{build_client, ClientConfig};
    pub use crate::error::{FormError, Stage};
    pub use crate::forecast::Forecast;
    pub use crate::form::{Branch, PredictionRequest, RelayRequest, SubmitEvent};
    pub use crate::handler::{read_form, FormSubmissionHandler, Submission};
    pub use crate::transport::{HttpTransport, Transport};
    pub use crate::view::{FormView, Page};
}
