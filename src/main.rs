use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendwatch::assembler::TrendAssembler;
use trendwatch::config::Config;
use trendwatch::provider::HttpTrendsClient;
use trendwatch::scoring::RandomScorer;
use trendwatch::storage::RecordWriter;

#[derive(Parser)]
#[command(
    name = "trendwatch",
    version,
    about = "Fetch keyword interest scores and persist them with curated fallback",
    long_about = None
)]
struct Cli {
    /// Output file path (default: trends_data.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Relative timeframe window submitted to the provider
    #[arg(long)]
    timeframe: Option<String>,

    /// TOML config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    tracing::info!("trendwatch starting");

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    // CLI flags take precedence over file/env settings
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if let Some(timeframe) = cli.timeframe {
        config.provider.timeframe = timeframe;
    }

    config.validate()?;

    let client = HttpTrendsClient::with_config(
        &config.provider.base_url,
        config.provider.rate_limit,
        config.request_timeout(),
    )?;

    let assembler = TrendAssembler::new(client, RandomScorer)
        .with_timeframe(&config.provider.timeframe)
        .with_courtesy_delay(config.courtesy_delay());

    let record = assembler.assemble().await;

    let path = RecordWriter::new(&config.output.path).write(&record)?;

    tracing::info!(path = %path.display(), "trends data saved successfully");
    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("trendwatch=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("trendwatch=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
