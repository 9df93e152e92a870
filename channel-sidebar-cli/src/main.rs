use anyhow::{Context, Result};
use channel_sidebar_core::config::Config;
use channel_sidebar_core::logging::{init_logging_with_config, LogLevel};
use channel_sidebar_core::metrics::init_metrics;
use channel_sidebar_core::{build_sidebar, render_text, ChannelQueryState, EmbeddedPermissions};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "channel-sidebar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    /// Configuration file (TOML); environment overrides apply otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Render the channel sidebar of a community from a saved query response
    Render {
        /// JSON response of the community channel connection query
        snapshot: PathBuf,

        /// Treat the query as still in flight
        #[arg(long)]
        loading: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::from_env().context("Invalid environment configuration")?,
    };

    if let Some(level) = &args.log_level {
        let level = LogLevel::from_str(level).unwrap_or_else(|| {
            eprintln!("Invalid log level '{}', using 'info'", level);
            LogLevel::Info
        });
        config.logging.level = level.as_str().to_string();
    }
    if args.json_logs {
        config.logging.json_format = true;
    }

    init_logging_with_config(config.logging.log_config())?;
    init_metrics();

    match args.command {
        Command::Render {
            snapshot,
            loading,
            format,
        } => {
            let body = tokio::fs::read_to_string(&snapshot)
                .await
                .with_context(|| format!("Failed to read snapshot {}", snapshot.display()))?;
            debug!(path = %snapshot.display(), bytes = body.len(), "Read snapshot");

            let query = ChannelQueryState::from_json(&body)?.with_loading(loading);
            let Some(view) = build_sidebar(&query, &EmbeddedPermissions, &config.sidebar)? else {
                info!("Snapshot has no community channel connection; nothing to render");
                return Ok(());
            };

            match format {
                OutputFormat::Text => print!("{}", render_text(&view)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }
    }

    Ok(())
}
