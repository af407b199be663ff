//! Adventuro — trekking trail discovery and guided-trek booking.
//!
//! A single pure reducer owns every state transition; the command loop
//! below is just a view that validates input, dispatches actions, and
//! prints the resulting snapshots.

mod app;
mod catalog;
mod config;
mod ids;
mod models;
mod pricing;
mod sim;
mod store;
mod ui;
mod utils;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::Page;
use config::Config;
use ids::SystemIdGenerator;
use sim::ChatGuide;
use store::Store;
use ui::input::{handle_command, parse};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("Adventuro starting");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };

    let mut store = Store::new(Box::new(SystemIdGenerator));
    store.set_user(Some(config.user.clone()));
    store.navigate_to(Page::Home, None);

    let mut chat = ChatGuide::new();

    println!("Adventuro — discover trails, pick a guide, book a trek.");
    println!("Type `help` for commands.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("adventuro> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let Some(command) = parse(&line?) else {
            continue;
        };

        if handle_command(&mut store, &config, &mut chat, command).await? {
            break;
        }
    }

    info!("Adventuro shutting down");
    Ok(())
}
