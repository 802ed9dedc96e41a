use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiffin_core::{catalog::FileCatalog, payment::PaymentMethod, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "tiffin")]
#[command(author, version, about = "Browse a food delivery catalog from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file to use instead of <data_dir>/catalog.json
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a carousel window, optionally moving it and clicking a tile
    Carousel {
        /// Which carousel to show
        #[arg(value_enum)]
        kind: commands::carousel::CarouselKind,
        /// Press the forward arrow this many times
        #[arg(short, long, default_value_t = 0)]
        forward: u32,
        /// Press the back arrow this many times (after moving forward)
        #[arg(short, long, default_value_t = 0)]
        back: u32,
        /// Click the tile at this position
        #[arg(short, long)]
        click: Option<usize>,
    },
    /// Show a restaurant page
    Restaurant {
        /// Restaurant or brand id
        id: String,
        /// Show bookmark status for this user
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Toggle a restaurant bookmark
    Bookmark {
        /// Restaurant or brand id
        id: String,
        /// User id
        #[arg(short, long)]
        user: String,
        /// Session token
        #[arg(short, long, env = "TIFFIN_TOKEN")]
        token: Option<String>,
    },
    /// Fill in and submit the payment form
    Pay {
        /// card, upi or cod
        #[arg(short, long, default_value = "card")]
        method: PaymentMethod,
        #[arg(long)]
        card_number: Option<String>,
        #[arg(long)]
        upi_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let catalog = FileCatalog::new(cli.catalog.unwrap_or_else(|| config.catalog_path()));
    tracing::debug!(catalog = %catalog.path().display(), "Using catalog");

    match cli.command {
        Commands::Carousel {
            kind,
            forward,
            back,
            click,
        } => commands::carousel::run(&catalog, &config, kind, forward, back, click).await,
        Commands::Restaurant { id, user } => {
            commands::restaurant::run(&catalog, &config, &id, user.as_deref()).await
        }
        Commands::Bookmark { id, user, token } => {
            commands::bookmark::run(&catalog, &config, &id, &user, token.as_deref()).await
        }
        Commands::Pay {
            method,
            card_number,
            upi_id,
        } => commands::pay::run(method, card_number, upi_id),
    }
}
