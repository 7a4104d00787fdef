mod config;
mod extract;
mod fetch;
mod model;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::ScrapeConfig;

#[derive(Parser)]
#[command(name = "oslist_scraper", about = "SMS FAQ OS compatibility scraper")]
struct Cli {
    /// FAQ page URL
    #[arg(long)]
    url: Option<String>,
    /// HTML cache file
    #[arg(long)]
    cache: Option<PathBuf>,
    /// JSON output file
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch (or reuse cached) HTML, extract both tables, write JSON
    Run {
        /// Refetch even if the cache file exists
        #[arg(long)]
        force: bool,
    },
    /// Populate the HTML cache without extracting
    Fetch {
        /// Refetch even if the cache file exists
        #[arg(long)]
        force: bool,
    },
    /// Print extracted records as a table
    Show {
        /// Filter by distro (e.g. "Windows", "CentOS")
        #[arg(short, long)]
        distro: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut cfg = ScrapeConfig::default();
    if let Some(url) = cli.url {
        cfg.faq_url = url;
    }
    if let Some(cache) = cli.cache {
        cfg.cache_path = cache;
    }
    if let Some(out) = cli.output {
        cfg.output_path = out;
    }

    // Bare invocation runs the whole pipeline
    match cli.command.unwrap_or(Commands::Run { force: false }) {
        Commands::Run { force } => {
            let html = fetch::page_content(&cfg, force).await?;
            let records = extract::extract_records(&html)?;
            output::write_json(&cfg.output_path, &records)?;
            println!(
                "Saved {} records to {}",
                records.len(),
                cfg.output_path.display()
            );
        }
        Commands::Fetch { force } => {
            let html = fetch::page_content(&cfg, force).await?;
            println!(
                "Cached {} bytes at {}",
                html.len(),
                cfg.cache_path.display()
            );
        }
        Commands::Show { distro, limit } => {
            let html = fetch::page_content(&cfg, false).await?;
            let records = extract::extract_records(&html)?;

            let rows: Vec<_> = records
                .iter()
                .filter(|r| match distro.as_deref() {
                    Some(d) => r.distro.eq_ignore_ascii_case(d),
                    None => true,
                })
                .take(limit)
                .collect();
            if rows.is_empty() {
                println!("No matching records.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<14} | {:<36} | {:>4} | {:<4} | {}",
                "#", "Distro", "OS", "Bits", "UEFI", "Remarks"
            );
            println!("{}", "-".repeat(96));
            for (i, r) in rows.iter().enumerate() {
                println!(
                    "{:>3} | {:<14} | {:<36} | {:>4} | {:<4} | {}",
                    i + 1,
                    truncate(&r.distro, 14),
                    truncate(&r.os_name, 36),
                    r.bits,
                    if r.uefi_support { "yes" } else { "no" },
                    r.remarks
                );
            }
            println!("\n{} of {} records shown", rows.len(), records.len());
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
