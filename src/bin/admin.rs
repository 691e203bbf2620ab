//! CLI administration tool for url-shortener.
//!
//! Creates and resolves mappings directly against PostgreSQL, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- url save https://example.com
//!
//! # Resolve a token
//! cargo run --bin admin -- url get 67e55044-10b1-426f-9247-bb680e5fe0c8
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DB_CONN_STR` / `DATABASE_URL`: PostgreSQL connection string
//!   (same defaults as the server, see `url_shortener::config`)

use url_shortener::application::services::ShortenerService;
use url_shortener::config::Config;
use url_shortener::domain::context::RequestContext;
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence::PgUrlStore;
use url_shortener::server::connect_pool;
use url_shortener::utils::token_generator::UuidTokenGenerator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create and resolve mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Mapping subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a URL under a new token
    Save {
        /// Absolute URL to shorten
        url: String,
    },

    /// Print the URL stored under a token
    Get {
        /// Token returned by `save`
        token: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches mapping commands through the same service the server uses.
async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let store = Arc::new(PgUrlStore::new(Arc::new(pool.clone())));
    let service = ShortenerService::new(store, Arc::new(UuidTokenGenerator));
    let ctx = RequestContext::background();

    match action {
        UrlAction::Save { url } => match service.save_url(&ctx, &url).await {
            Ok(mapping) => {
                println!("{}", "Mapping created".green().bold());
                println!("  Token: {}", mapping.token.bright_yellow().bold());
                println!("  URL:   {}", mapping.target_url.cyan());
            }
            Err(AppError::InvalidUrl { raw, source }) => {
                println!("{} {:?}: {}", "Could not parse URL".red(), raw, source);
            }
            Err(e) => return Err(e.into()),
        },
        UrlAction::Get { token } => match service.resolve_url(&ctx, &token).await {
            Ok(url) => println!("{}", url.cyan()),
            Err(AppError::NotFound { .. }) => {
                println!("{} {}", "No URL stored for token".yellow(), token);
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Mappings:   {}", mappings.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
