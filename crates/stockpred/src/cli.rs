use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockpred_client::prelude::*;
use stockpred_client::view::{RESULT_ID, START_DATE_ID, TICKER_ID};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level, used when `RUST_LOG` is not set.
    #[arg(short, long, value_enum, default_value = "info", global = true)]
    pub trace: TraceLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit the prediction form: ask the prediction service, relay the answer, print the result.
    Submit(SubmitArgs),

    /// Show the branch and payloads a submission would use, without sending anything.
    Branch(FormArgs),
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    ERROR,
    WARN,
    INFO,
    DEBUG,
    TRACE,
}

impl From<TraceLevel> for log::LevelFilter {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::ERROR => log::LevelFilter::Error,
            TraceLevel::WARN => log::LevelFilter::Warn,
            TraceLevel::INFO => log::LevelFilter::Info,
            TraceLevel::DEBUG => log::LevelFilter::Debug,
            TraceLevel::TRACE => log::LevelFilter::Trace,
        }
    }
}

/// Values of the form fields.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Ticker input, e.g. AAPL.
    #[arg(long, default_value = "")]
    pub ticker: String,

    /// Start date picker (YYYY-MM-DD); any value selects a future prediction.
    #[arg(long)]
    pub start_date: Option<String>,

    /// Dataset tag relayed with ticker predictions [env: PREDICTION_DATASET].
    #[arg(long)]
    pub dataset: Option<String>,
}

impl FormArgs {
    /// The page the form lives on. Without `--start-date` the picker is left out entirely.
    pub fn page(&self, with_result: bool) -> Page {
        let mut page = Page::default().with_element(TICKER_ID, &self.ticker);
        if let Some(start_date) = &self.start_date {
            page = page.with_element(START_DATE_ID, start_date);
        }
        if with_result {
            page = page.with_element(RESULT_ID, "");
        }
        page
    }
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Form action: the prediction service URL [env: PREDICTION_URL].
    #[arg(long)]
    pub action: Option<String>,

    /// Form method [env: PREDICTION_METHOD, default: POST].
    #[arg(long)]
    pub method: Option<String>,

    /// Origin of the relay service [env: RELAY_URL].
    #[arg(long)]
    pub relay: Option<String>,

    /// Write the result container to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also print a quantile summary of the prediction.
    #[arg(long)]
    pub summary: bool,

    /// Leave the result container off the page.
    #[arg(long)]
    pub no_result_container: bool,
}

impl SubmitArgs {
    /// Flags win over the environment.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(action) = &self.action {
            config.prediction_url = Some(action.clone());
        }
        if let Some(method) = &self.method {
            config.prediction_method = method.clone();
        }
        if let Some(relay) = &self.relay {
            config.relay_url = relay.clone();
        }
        if let Some(dataset) = &self.form.dataset {
            config.dataset = dataset.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_flags() {
        let cli = Cli::parse_from([
            "stockpred",
            "submit",
            "--ticker",
            "AAPL",
            "--action",
            "https://gateway.example.com/prod/predict",
            "--relay",
            "http://localhost:5000",
            "--summary",
            "-t",
            "debug",
        ]);
        assert_eq!(cli.trace, TraceLevel::DEBUG);

        let Commands::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert!(args.summary);

        let mut config = ClientConfig::default();
        args.apply(&mut config);
        assert_eq!(
            config.prediction_url.as_deref(),
            Some("https://gateway.example.com/prod/predict")
        );
        assert_eq!(config.relay_url, "http://localhost:5000");
        assert_eq!(config.prediction_method, "POST");
    }

    #[test]
    fn page_mirrors_form_flags() {
        let form = FormArgs {
            ticker: "IBM".into(),
            start_date: None,
            dataset: None,
        };
        let page = form.page(true);
        assert_eq!(page.element(TICKER_ID), Some("IBM"));
        assert_eq!(page.element(START_DATE_ID), None);
        assert_eq!(page.result(), Some(""));

        let form = FormArgs {
            start_date: Some("2024-01-01".into()),
            ..form
        };
        assert_eq!(form.page(false).result(), None);
        assert_eq!(form.page(false).element(START_DATE_ID), Some("2024-01-01"));
    }
}
