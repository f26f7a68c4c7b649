mod commands;

use std::path::PathBuf;

use anyhow::Result;
use caramel_client::{LocalState, resolve_base_url};
use caramel_core::constants::DEFAULT_PORT;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "caramel")]
#[command(about = "Caramel dog-photo gallery: API server, gallery client and treat catcher", long_about = None)]
struct Cli {
    /// Gallery API origin for client commands (defaults to the local server).
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Local state file (session id, chat cache, high score).
    #[arg(long, global = true)]
    state: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gallery API server.
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Keep blobs in memory instead of on disk.
        #[arg(long)]
        memory: bool,
        #[arg(long)]
        storage_dir: Option<PathBuf>,
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Print the gallery cards.
    Images,
    /// Register a visit and print the count.
    Visitors,
    /// Ask Caramel something.
    Chat { message: String },
    /// Run a headless treat catcher round with the autopilot.
    Play {
        #[arg(long)]
        seed: Option<u64>,
        /// Frames to simulate at 60 fps.
        #[arg(long, default_value_t = 3600)]
        frames: u32,
    },
}

fn api_base_url(explicit: Option<&str>) -> String {
    resolve_base_url(explicit, "localhost")
}

fn state_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(LocalState::default_path()?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, memory, storage_dir, static_dir } => {
            commands::serve::run(commands::serve::ServeArgs {
                host,
                port,
                memory,
                storage_dir,
                static_dir,
            })
            .await?;
        },
        Commands::Images => {
            commands::gallery::images(&api_base_url(cli.api_url.as_deref())).await?;
        },
        Commands::Visitors => {
            commands::gallery::visitors(&api_base_url(cli.api_url.as_deref())).await?;
        },
        Commands::Chat { message } => {
            let path = state_path(cli.state)?;
            commands::gallery::chat(&api_base_url(cli.api_url.as_deref()), path, &message)
                .await?;
        },
        Commands::Play { seed, frames } => {
            commands::play::run(state_path(cli.state)?, seed, frames)?;
        },
    }

    Ok(())
}
