//! Villager trade guide site.
//!
//! # Quick Start
//!
//! ```bash
//! # Serve the guide on http://127.0.0.1:3000
//! villager-guide serve
//!
//! # Write index.html and the stylesheet to ./dist
//! villager-guide export --out dist
//! ```

use std::{net::IpAddr, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use villager_guide::{SiteConfig, SiteError};

/// Paper plugin villager trade guide.
#[derive(Parser)]
#[command(name = "villager-guide")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the guide over HTTP.
    Serve {
        /// Address to bind to [default: 127.0.0.1].
        #[arg(long, env = "GUIDE_HOST")]
        host: Option<IpAddr>,

        /// Port to listen on [default: 3000].
        #[arg(short, long, env = "GUIDE_PORT")]
        port: Option<u16>,
    },

    /// Render the guide to static files.
    Export {
        /// Output directory [default: dist].
        #[arg(short, long, env = "GUIDE_OUT_DIR")]
        out: Option<PathBuf>,
    },
}

impl Commands {
    fn config(&self) -> SiteConfig {
        let mut config = SiteConfig::default();
        match self {
            Commands::Serve { host, port } => {
                if let Some(host) = host {
                    config.host = *host;
                }
                if let Some(port) = port {
                    config.port = *port;
                }
            }
            Commands::Export { out } => {
                if let Some(out) = out {
                    config.out_dir.clone_from(out);
                }
            }
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: &Commands) -> Result<(), SiteError> {
    let config = command.config();
    match command {
        Commands::Serve { .. } => villager_guide::serve(&config).await,
        Commands::Export { .. } => {
            let report = villager_guide::export(&config.out_dir)?;
            for file in &report.files {
                println!("{} ({} bytes)", file.path.display(), file.bytes);
            }
            Ok(())
        }
    }
}
