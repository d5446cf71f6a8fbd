use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::app_state::AppState;
use crate::artifacts::JsonArtifactLoader;
use crate::config_loader::{load_config, PredictorConfig, DEFAULT_CONFIG_FILE};
use crate::inference::Predictor;

/// Top-level CLI for the campaign predictor
#[derive(Parser, Debug)]
#[command(
    name = "campaign-predictor",
    version,
    about = "Marketing campaign response prediction service"
)]
pub struct Cli {
    /// TOML configuration file (missing file falls back to defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API (default)
    Serve {
        /// Host/IP to bind, overrides the configured host
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Score one feature vector offline and print the result as JSON
    Predict {
        /// Comma-separated feature values, in training order
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        features: Vec<f64>,
    },

    /// Load the artifacts and describe them
    Inspect,
}

fn load_predictor(config: &PredictorConfig) -> anyhow::Result<Predictor> {
    let loader = JsonArtifactLoader::from_config(config);
    Predictor::from_loader(&loader).context("Failed to load model artifacts")
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    crate::telemetry::init(config.level()?);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let predictor = load_predictor(&config)?;
            let state = Arc::new(AppState::new(predictor, config.error_status));
            let addr = config.bind_addr();

            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to build Tokio runtime")?;
            rt.block_on(crate::web::serve(&addr, state))
        }
        Commands::Predict { features } => {
            let predictor = load_predictor(&config)?;
            let result = predictor.predict(&features)?;
            println!("{}", serde_json::to_string(&result)?);
            Ok(())
        }
        Commands::Inspect => {
            let predictor = load_predictor(&config)?;
            let summary = serde_json::json!({
                "scaler_path": config.scaler_path,
                "model_path": config.model_path,
                "features": predictor.n_features(),
                "feature_names": predictor.feature_names(),
                "threshold": predictor.threshold(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
