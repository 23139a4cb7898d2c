//! Main entry point for the GTX Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gtx_translator::cli::commands::{self, Commands};

/// GTX Translator - translate text through the public Google endpoint
#[derive(Parser, Debug)]
#[command(name = "gtx-translator", version, about, long_about = None)]
struct Args {
    /// Translation endpoint (optional, defaults to TRANSLATE_ENDPOINT env var)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// JSON or YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gtx_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate {
            text,
            from,
            to,
            file,
            json,
        }) => {
            let config = commands::load_config(args.config.as_deref(), args.endpoint)?;
            commands::handle_translate(config, text, from, to, file, json).await?;
        }
        Some(Commands::Languages { filter }) => {
            commands::handle_languages(filter)?;
        }
        Some(Commands::Check { value }) => {
            commands::handle_check(value)?;
        }
        Some(Commands::Server { host, port }) => {
            let config = commands::load_config(args.config.as_deref(), args.endpoint)?;
            commands::handle_server(config, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
