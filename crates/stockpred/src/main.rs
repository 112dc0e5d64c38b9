use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use log::{debug, info, warn};
use stockpred_client::prelude::*;

mod cli;
mod ui;

/// Stand-in for the prediction in dry runs.
const PREDICTION_PLACEHOLDER: &str = "<prediction>";

fn preprocess(level: log::LevelFilter) {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger; RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    preprocess(cli.trace.into());
    debug!("Command line input recorded: {cli:#?}");

    // cli framework:
    // "> stockpred <COMMAND>"
    match &cli.command {
        // "> stockpred submit --ticker AAPL"
        // "> stockpred submit --start-date 2024-01-01"
        Commands::Submit(args) => {
            let mut config = ClientConfig::from_env();
            args.apply(&mut config);
            debug!("Client config: {config:#?}");

            let mut event = config.submit_event()?;
            let mut page = args.form.page(!args.no_result_container);
            let handler = FormSubmissionHandler::new(config.transport()?)
                .with_dataset(config.dataset.clone());

            let pb = ui::spinner(&format!("{} {}", event.method, event.action));
            let outcome = handler.submit(&mut event, &mut page).await;
            pb.finish_and_clear();
            debug!("Navigation suppressed: {}", event.default_prevented());
            let submission = outcome?;
            info!("{:?} prediction relayed", submission.branch);

            let result = page.result().unwrap_or_default();
            match &args.out {
                Some(path) => {
                    tokio::fs::write(path, result).await?;
                    info!("Result written to {}", path.display());
                }
                None => println!("{result}"),
            }

            if args.summary {
                match Forecast::parse(&submission.prediction) {
                    Ok(forecast) => ui::print_summary(&forecast),
                    Err(e) => warn!("Prediction is not a readable forecast: {e}"),
                }
            }
        }

        // "> stockpred branch --ticker AAPL --start-date 2024-01-01"
        // dry run, nothing is sent
        Commands::Branch(form) => {
            let dataset = form
                .dataset
                .clone()
                .unwrap_or_else(|| ClientConfig::from_env().dataset);
            let request = read_form(&form.page(true))?;
            let relay = RelayRequest::new(&request, PREDICTION_PLACEHOLDER.to_string(), &dataset);
            ui::print_dry_run(&request, &relay)?;
        }
    }

    Ok(())
}
