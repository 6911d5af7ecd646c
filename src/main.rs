//! Interactive console for the in-memory URL shortener.
//!
//! Mappings live only for the lifetime of the process, so every command runs
//! inside one interactive session.
//!
//! # Usage
//!
//! ```bash
//! # Start a session with 7-character generated codes
//! cargo run
//!
//! # Longer generated codes, JSON output for statistics and listings
//! cargo run -- --code-length 10 --json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `SHORT_CODE_LENGTH` - Generated code length (default: 7)

use short_link::console::{self, MenuAction};
use short_link::state::{AppState, InMemoryUrlService};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input, Select};
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener console.
#[derive(Parser)]
#[command(name = "short-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Length of generated short codes (1-30), overrides SHORT_CODE_LENGTH
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=30))]
    code_length: Option<u8>,

    /// Print statistics and listings as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = short_link::config::load_from_env()?;
    if let Some(length) = cli.code_length {
        config.code_length = usize::from(length);
    }

    init_tracing(&config.log_level, config.is_json_logging());
    config.print_summary();

    let state = AppState::new(&config).context("Failed to build URL service")?;
    let service = state.url_service.as_ref();

    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!(
        "{}",
        "Mappings are kept in memory and lost on exit.".bright_black()
    );

    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&labels)
            .default(0)
            .interact()?;

        println!();
        match MenuAction::ALL[choice] {
            MenuAction::Create => handle_create(service)?,
            MenuAction::Resolve => handle_resolve(service)?,
            MenuAction::Delete => handle_delete(service)?,
            MenuAction::Statistics => handle_statistics(service, cli.json)?,
            MenuAction::List => handle_list(service, cli.json)?,
            MenuAction::Exit => {
                println!("{}", "Goodbye!".green());
                break;
            }
        }
    }

    Ok(())
}

/// Installs the global subscriber. Logs go to stderr to keep the menu readable.
fn init_tracing(filter: &str, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn prompt(text: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Prompts for a long URL and optional custom code, then creates the mapping.
///
/// An empty custom code means "generate one".
fn handle_create(service: &InMemoryUrlService) -> Result<()> {
    let long_url = prompt("Enter long URL")?;
    let custom_code = prompt("Enter custom short code (or press Enter to auto-generate)")?;

    let custom_code = Some(custom_code.as_str()).filter(|c| !c.is_empty());

    match service.create_short_url(&long_url, custom_code) {
        Ok(mapping) => println!("  {}", console::render_created(&mapping).green()),
        Err(e) => println!("  {}", console::render_error(&e).red()),
    }

    Ok(())
}

fn handle_resolve(service: &InMemoryUrlService) -> Result<()> {
    let short_code = prompt("Enter short code to resolve")?;

    match service.resolve_short_url(&short_code) {
        Ok(long_url) => println!("  {}", console::render_resolved(&long_url).cyan()),
        Err(e) => println!("  {}", console::render_error(&e).red()),
    }

    Ok(())
}

/// Deletes a mapping after confirmation (default: No).
fn handle_delete(service: &InMemoryUrlService) -> Result<()> {
    let short_code = prompt("Enter short code to delete")?;

    if !short_code.is_empty() && service.get_statistics(&short_code).is_ok() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{short_code}'?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  {}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.delete_short_url(&short_code) {
        Ok(_) => println!("  {}", console::render_deleted(&short_code).green()),
        Err(e) => println!("  {}", console::render_error(&e).red()),
    }

    Ok(())
}

fn handle_statistics(service: &InMemoryUrlService, json: bool) -> Result<()> {
    let short_code = prompt("Enter short code to view statistics")?;

    match service.get_statistics(&short_code) {
        Ok(stats) if json => println!("{}", console::render_json(&stats)?),
        Ok(stats) => {
            for line in console::render_statistics(&stats).lines() {
                println!("  {line}");
            }
        }
        Err(e) if json => println!("{}", console::render_json(&e.to_json())?),
        Err(e) => println!("  {}", console::render_error(&e).red()),
    }

    Ok(())
}

/// Lists every mapping, oldest first.
fn handle_list(service: &InMemoryUrlService, json: bool) -> Result<()> {
    let stats = service.list_statistics();

    if json {
        println!("{}", console::render_json(&stats)?);
        return Ok(());
    }

    if stats.is_empty() {
        println!("  {}", console::render_table(&stats).yellow());
        return Ok(());
    }

    for line in console::render_table(&stats).lines() {
        println!("  {line}");
    }

    Ok(())
}
