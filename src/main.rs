//! CLI entry point for personal-site

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "personal-site")]
#[command(author = "Justin Barias")]
#[command(version)]
#[command(about = "Personal website configuration and blog RSS feed", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Declared site URL; its origin becomes the feed's site root
    #[arg(long, global = true, env = "SITE")]
    site: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the feed (and the public directory)
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4321")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Write the feed to the public directory
    #[command(alias = "g")]
    Generate,

    /// List posts in feed order
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "personal_site=debug,tower_http=debug,info"
    } else {
        "personal_site=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let load_site = || -> Result<personal_site::Site> {
        let mut site = personal_site::Site::new(&base_dir)?;
        if let Some(url) = &cli.site {
            site.set_site_url(url.as_str());
        }
        Ok(site)
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let site = load_site()?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            personal_site::server::start(&site, &ip, port).await?;
        }

        Commands::Generate => {
            let site = load_site()?;
            tracing::info!("Generating feed...");
            let path = personal_site::commands::generate::write_feed(&site)?;
            println!("Generated {}", path.display());
        }

        Commands::List => {
            let site = load_site()?;
            personal_site::commands::list::run(&site)?;
        }

        Commands::Version => {
            println!("personal-site version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
