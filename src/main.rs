//! # Contact Book CLI (`contactd`)
//!
//! The `contactd` binary serves the contacts REST API and offers a few
//! commands for working with the same store from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! contactd --config ./contactbook.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `contactd serve` | Start the HTTP server |
//! | `contactd list` | Print all stored contacts |
//! | `contactd add --name .. --phone ..` | Add a contact |
//! | `contactd remove <id>` | Remove a contact by id |
//!
//! The config file is optional; without one the server binds
//! `127.0.0.1:3001` and stores contacts in `./contacts.json`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use contactbook::store::FileStore;
use contactbook::{config, contacts, models, server};

/// Contact Book — a JSON-file-backed contacts REST API and CLI.
#[derive(Parser)]
#[command(
    name = "contactd",
    about = "Contact Book — a JSON-file-backed contacts REST API and CLI",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Optional; when the file does not exist, built-in defaults are used
    /// (store `./contacts.json`, bind `127.0.0.1:3001`).
    #[arg(long, global = true, default_value = "./contactbook.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the contacts HTTP server.
    ///
    /// Serves `/api/contacts` (list, create, update, delete) and `/health`
    /// on the configured bind address.
    Serve,

    /// Print all stored contacts, newest first.
    List,

    /// Add a contact to the store.
    ///
    /// Uses the same validation and id generation as the HTTP API.
    Add {
        /// Contact name (required, trimmed).
        #[arg(long)]
        name: String,

        /// Contact phone number (required, trimmed).
        #[arg(long)]
        phone: String,

        /// Contact email address.
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address.
        #[arg(long)]
        address: Option<String>,
    },

    /// Remove a contact by id.
    Remove {
        /// Contact id.
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::List => {
            let store = FileStore::new(cfg.store.path.clone());
            let all = contacts::list_contacts(&store).await?;
            if all.is_empty() {
                println!("No contacts stored.");
            } else {
                for c in &all {
                    println!("{}  {}  {}  {}  {}", c.id, c.name, c.phone, c.email, c.address);
                }
            }
        }
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let store = FileStore::new(cfg.store.path.clone());
            let input = models::ContactInput {
                name: Some(name),
                phone: Some(phone),
                email,
                address,
            };
            let created = contacts::create_contact(&store, &input).await?;
            println!("Added contact {} ({})", created.name, created.id);
        }
        Commands::Remove { id } => {
            let store = FileStore::new(cfg.store.path.clone());
            let removed = contacts::delete_contact(&store, &id).await?;
            println!("Removed contact {}", removed);
        }
    }

    Ok(())
}
