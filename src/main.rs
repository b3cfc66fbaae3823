//! Classifier service entry point
//!
//! Assembles the classifier once at startup and serves predictions over
//! HTTP. Configuration comes from an optional INI file with CLI overrides.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fashion_classifier::config::{ServiceConfig, DEFAULT_CONFIG_PATH};
use fashion_classifier::server::{serve, AppState};

/// Image classification demo service
#[derive(Parser, Debug)]
#[command(name = "fashion-classifier")]
#[command(version)]
#[command(about = "HTTP service serving predictions from a CNN classifier")]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "CLASSIFIER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CLASSIFIER_PORT")]
    port: Option<u16>,

    /// Path to the INI configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Path to a pretrained backbone checkpoint
    #[arg(long, env = "CLASSIFIER_WEIGHTS")]
    weights: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    // INI file first, CLI flags on top
    let mut config = if cli.config.exists() {
        info!("reading configuration from {:?}", cli.config);
        ServiceConfig::from_ini(&cli.config)?
    } else {
        ServiceConfig::default()
    };

    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(weights) = cli.weights {
        config.weights_path = Some(weights);
    }

    info!("fashion-classifier v{}", env!("CARGO_PKG_VERSION"));
    info!("  bind:       {}:{}", config.host, config.port);
    info!("  image size: {}", config.image_size);
    info!("  classes:    {}", config.num_classes);

    let state = Arc::new(AppState::new(config)?);
    serve(state).await
}
