use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use stockpred_client::prelude::*;

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("[{elapsed_precise}] {spinner} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn print_summary(forecast: &Forecast) {
    println!(
        "{} {} steps",
        "forecast horizon:".bold(),
        forecast.horizon()
    );
    println!(
        "{:>8} {:>12} {:>12} {:>12} {:>12}",
        "quantile".bold(),
        "first".bold(),
        "last".bold(),
        "min".bold(),
        "max".bold()
    );
    for row in forecast.summary() {
        let last = format!("{:>12.3}", row.last);
        let last = if row.last >= row.first {
            last.green()
        } else {
            last.red()
        };
        println!(
            "{:>8} {:>12.3} {} {:>12.3} {:>12.3}",
            row.name.cyan(),
            row.first,
            last,
            row.min,
            row.max
        );
    }
}

pub fn print_dry_run(request: &PredictionRequest, relay: &RelayRequest) -> anyhow::Result<()> {
    println!("{} {:?}", "branch:".bold(), request.branch());
    println!("{} {}", "prediction body:".bold(), request.body()?);
    println!("{} POST {}", "relay:".bold(), relay.path());
    for (name, value) in relay.fields() {
        println!("  {} = {}", name.cyan(), value);
    }
    Ok(())
}
