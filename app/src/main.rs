#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use datespan_config::Config;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InitStrategy, PatternsStrategy,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "datespan")]
#[command(about = "Find date ranges in free English text", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/datespan/config.json
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract date periods from text
    Extract {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,

        /// Reference time for relative dates (`2026-10-18` or `2026-10-18T09:00:00`)
        #[arg(short = 'r', long, value_parser = command::parse_reference)]
        reference: Option<chrono::NaiveDateTime>,

        /// Treat every input line as a separate document
        #[arg(short = 'l', long)]
        lines: bool,

        /// Print results as JSON
        #[arg(short = 'j', long)]
        json: bool,
    },
    /// Print the effective pattern table as JSON
    Patterns,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load, Config::load_from)
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            text,
            reference,
            lines,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            init_tracing(&config.logging.level)?;
            info!("Starting extraction");

            ExtractStrategy
                .execute(ExtractInput {
                    config,
                    text,
                    reference,
                    lines,
                    json,
                })
                .await?;
        }
        Commands::Patterns => {
            let config = load_config(cli.config.as_deref())?;
            init_tracing(&config.logging.level)?;
            PatternsStrategy.execute(config).await?;
        }
        Commands::Init => {
            init_tracing("info")?;
            InitStrategy.execute(()).await?;
        }
        Commands::Version => {
            VersionStrategy.execute(()).await?;
        }
    }

    Ok(())
}
