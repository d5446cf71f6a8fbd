use campaign_predictor::cli::{run, Cli};
use clap::Parser;
use std::process::exit;

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("campaign-predictor: {e:#}");
        exit(1);
    }
}
