//! Seed command - fill the directory with fake job titles

use anyhow::{Context, Result};
use clap::Parser;
use staffdir_core::{DirectoryConfig, JobTitleFaker, NewEmployee};
use staffdir_server::EmployeeRepo;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Number of employees to create (default from config: 102)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Fixed RNG seed for reproducible titles
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Delete existing employees first (ids restart at 1)
    #[arg(long)]
    pub clear: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,
}

pub async fn run_seed(args: SeedArgs, config: DirectoryConfig) -> Result<()> {
    let count = args.count.unwrap_or(config.seed.count);
    let pool = super::connect(&config, args.database_url).await?;
    let repo = EmployeeRepo::new(&pool);

    if args.clear {
        let deleted = repo.clear().await.context("Failed to clear employees")?;
        tracing::info!(deleted, "Cleared existing employees");
    }

    let mut faker = match args.rng_seed {
        Some(seed) => JobTitleFaker::seeded(seed),
        None => JobTitleFaker::new(),
    };

    let employees = faker
        .titles(count)
        .iter()
        .map(|title| NewEmployee::new(title))
        .collect::<Result<Vec<_>, _>>()
        .context("Generated an invalid title")?;

    let inserted = repo
        .insert_many(&employees)
        .await
        .context("Failed to insert employees")?;
    let total = repo.count().await.context("Failed to count employees")?;

    tracing::info!(inserted, total, "Seeded employees");
    println!("Inserted {} employees ({} total)", inserted, total);

    Ok(())
}
