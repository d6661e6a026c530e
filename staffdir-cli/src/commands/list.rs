//! List command - print one resolved page to the terminal

use anyhow::{Context, Result};
use clap::Parser;
use staffdir_core::{DirectoryConfig, Employee, Page, PageRequest, PageSize, Resolution};
use staffdir_server::EmployeeRepo;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page to show; any text is accepted and normalized like the web page does
    #[arg(long, short = 'p', allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Employees per page (overrides config/environment)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_list(args: ListArgs, config: DirectoryConfig) -> Result<()> {
    let page_size = match args.page_size {
        Some(n) => PageSize::new(n).context("Invalid --page-size")?,
        None => config.listing.page_size,
    };

    let pool = super::connect(&config, args.database_url).await?;
    let request = PageRequest::from(args.page);
    let page = EmployeeRepo::new(&pool)
        .page(page_size, &request)
        .await
        .context("Failed to load employees")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", format_page(&page));
    }

    Ok(())
}

fn format_page(page: &Page<Employee>) -> String {
    let mut out = String::new();

    match page.resolution {
        Resolution::Exact => {}
        Resolution::NotAnInteger => out.push_str("(not a page number, showing the first page)\n"),
        Resolution::OutOfRange { requested } => out.push_str(&format!(
            "(page {} does not exist, showing the last page)\n",
            requested
        )),
    }

    if page.items.is_empty() {
        out.push_str("No employees yet.\n");
    }
    for employee in &page.items {
        out.push_str(&format!("{:>6}  {}\n", employee.id, employee.title));
    }

    out.push_str(&format!("Page {} of {}.\n", page.number, page.total_pages));
    out
}
