//! staffdir CLI - employee directory server and tooling
//!
//! - `serve`: run the paginated directory web page
//! - `seed`: fill the directory with fake job titles
//! - `list`: print one page of the directory
//! - `completions`: shell completion scripts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use staffdir_core::DirectoryConfig;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "staffdir",
    author,
    version,
    about = "Paginated employee directory",
    long_about = "Serve a paginated employee directory backed by SQLite, seed it with fake \
                  job titles, and inspect pages from the terminal."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Insert fake employees
    Seed(commands::seed::SeedArgs),
    /// Print one page of employees
    List(commands::list::ListArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, load_config()?).await?,
        Commands::Seed(args) => commands::run_seed(args, load_config()?).await?,
        Commands::List(args) => commands::run_list(args, load_config()?).await?,
        Commands::Completions(args) => commands::run_completions::<Cli>(args)?,
    }
    Ok(())
}

fn load_config() -> Result<DirectoryConfig> {
    DirectoryConfig::load().context("Failed to load configuration")
}
