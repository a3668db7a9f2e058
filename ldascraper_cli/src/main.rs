mod progress;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ldascraper_lib::lda_api::{Client, FilingPeriod};
use ldascraper_lib::{report, OverrideList, Scraper};

use crate::progress::ConsoleProgress;

#[derive(Parser)]
#[command(name = "ldascraper")]
#[command(about = "Scrape lobbying disclosure filings from the Senate LDA API into a CSV report")]
struct Cli {
    /// Filing year, e.g. 2023
    year: i32,

    /// Reporting period: Q1, Q2, Q3, Q4, MY, or YE
    period: String,

    /// Directory the report is written to
    #[arg(long, default_value = "reports")]
    out_dir: PathBuf,

    /// Path to the self-lobbying override list
    #[arg(long, default_value = "self_lobbying_overrides.json")]
    overrides: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ldascraper_lib=info".parse().unwrap())
                .add_directive("lda_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let period: FilingPeriod = cli.period.parse().map_err(|_| {
        anyhow!(
            "unrecognized reporting period {:?} (expected Q1, Q2, Q3, Q4, MY, or YE)",
            cli.period
        )
    })?;

    let api_key = std::env::var("SENATE_LDA_API_KEY")
        .context("SENATE_LDA_API_KEY is not set (the LDA API requires a registered key)")?;
    let client = Client::new(api_key)?;

    let overrides = OverrideList::from_path(&cli.overrides).with_context(|| {
        format!(
            "failed to load self-lobbying overrides from {}",
            cli.overrides.display()
        )
    })?;

    let console = ConsoleProgress::new();
    let scraper = Scraper::new(&client, &overrides).with_observer(&console);

    let groups = scraper.run(cli.year, period, &cli.out_dir).await?;

    let total: usize = groups.iter().map(|group| group.filings.len()).sum();
    let path = report::report_path(&cli.out_dir, cli.year, period);
    println!(
        "Wrote {} filings across {} filing types to {}",
        total,
        groups.len(),
        path.display()
    );

    Ok(())
}
