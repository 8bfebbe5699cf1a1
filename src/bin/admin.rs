//! CLI administration tool for encurtador.
//!
//! Registers and inspects links and renders QR codes without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create "https://example.com" --short-id promo
//!
//! # Resolve a short ID
//! cargo run --bin admin -- link show promo
//!
//! # Most recent links
//! cargo run --bin admin -- link list --limit 20
//!
//! # Write a QR code PNG
//! cargo run --bin admin -- qr "https://s.example.com/promo" --output promo.png
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).
//! `qr` needs no database.

use encurtador::application::services::LinkService;
use encurtador::config::{Config, StorageBackend};
use encurtador::infrastructure::id_generator::RandomIdGenerator;
use encurtador::infrastructure::persistence::PgLinkRepository;
use encurtador::infrastructure::qr::{PNG_DATA_URI_PREFIX, PngQrEncoder, QrEncoder};
use encurtador::server::connect_pool;

use anyhow::{Context, Result};
use base64::Engine as _;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing encurtador.
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
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Render a QR code for a URL
    Qr {
        /// Text to encode
        url: String,

        /// Write the PNG here instead of printing the data URI
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Register a URL
    Create {
        /// URL to shorten (prompted when omitted)
        url: Option<String>,

        /// Custom short ID (generated when omitted)
        #[arg(short, long)]
        short_id: Option<String>,
    },

    /// Show the URL behind a short ID
    Show {
        short_id: String,
    },

    /// List the most recent links
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show basic info
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Qr { url, output } => handle_qr(&url, output)?,
        Commands::Link { action } => {
            let (config, pool) = open_pool().await?;
            handle_link_action(action, &config, &pool).await?;
        }
        Commands::Db { action } => {
            let (_, pool) = open_pool().await?;
            handle_db_action(action, &pool).await?;
        }
    }

    Ok(())
}

/// Connects to PostgreSQL using the server's configuration rules.
async fn open_pool() -> Result<(Config, PgPool)> {
    let config = Config::from_env()?;
    config.validate()?;

    if config.storage_backend == StorageBackend::Memory {
        anyhow::bail!("admin link/db commands need STORAGE_BACKEND=postgres");
    }

    let pool = connect_pool(&config).await?;
    Ok((config, pool))
}

fn link_service(config: &Config, pool: &PgPool) -> LinkService {
    LinkService::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        Arc::new(RandomIdGenerator::new(config.short_id_length)),
        Arc::new(PngQrEncoder::new()),
    )
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let service = link_service(config, pool);

    match action {
        LinkAction::Create { url, short_id } => create_link(&service, url, short_id).await?,
        LinkAction::Show { short_id } => show_link(&service, &short_id).await?,
        LinkAction::List { limit } => list_links(&service, limit).await?,
    }

    Ok(())
}

/// Registers a link, prompting for the URL if needed.
async fn create_link(
    service: &LinkService,
    url: Option<String>,
    short_id: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    let result = service
        .register(url.clone(), short_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  Short ID: {}", result.short_id.bright_yellow().bold());
    println!("  URL:      {}", url.cyan());
    println!();

    Ok(())
}

async fn show_link(service: &LinkService, short_id: &str) -> Result<()> {
    let result = service
        .find_by_identifier(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", short_id, e))?;

    println!("  {} → {}", short_id.bright_yellow(), result.original_url.cyan());

    Ok(())
}

/// Lists the most recent links.
///
/// # Output Format
///
/// ```text
///   Short ID         Created              URL
///   ──────────────────────────────────────────────────────────
///   ABCDE            2024-06-01 10:30     www.teste.com/essa-url-e-longa
/// ```
async fn list_links(service: &LinkService, limit: i64) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .recent_links(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<16} {:<20} {}",
        "Short ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<16} {:<20} {}",
            link.short_id.bright_yellow(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url.cyan()
        );
    }

    let total = service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        links.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Renders a QR code, printing the data URI or writing the decoded PNG.
fn handle_qr(url: &str, output: Option<PathBuf>) -> Result<()> {
    let data_uri = PngQrEncoder::new()
        .to_data_url(url)
        .context("Erro ao gerar o QRCode")?;

    match output {
        None => println!("{}", data_uri),
        Some(path) => {
            let payload = data_uri
                .strip_prefix(PNG_DATA_URI_PREFIX)
                .context("Unexpected data URI format")?;
            let png = base64::engine::general_purpose::STANDARD
                .decode(payload)
                .context("Invalid base64 payload")?;

            std::fs::write(&path, png)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            println!(
                "{} {}",
                "✅ QR code written to".green().bold(),
                path.display().to_string().cyan()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "✅ Database connection OK".green().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
