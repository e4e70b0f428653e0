// ABOUTME: CLI for extracting trending repositories or developers as JSON.
// ABOUTME: Fetches one listing page (or reads a saved one) and prints the records.

mod fetch;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trending_core::{DateRange, TrendingKind, TrendingParser, TrendingQuery, GITHUB_BASE_URL};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Repositories,
    Developers,
}

impl From<Kind> for TrendingKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Repositories => TrendingKind::Repositories,
            Kind::Developers => TrendingKind::Developers,
        }
    }
}

/// Extract trending repositories or developers and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "trending")]
#[command(about = "Extract trending repositories or developers as JSON", long_about = None)]
struct Args {
    /// Which listing to extract.
    #[arg(value_enum)]
    kind: Kind,

    /// Programming language slug, e.g. rust, python, c++.
    #[arg(short, long)]
    language: Option<String>,

    /// Period: daily, weekly or monthly.
    #[arg(short, long, default_value = "daily")]
    since: DateRange,

    /// Two-letter spoken language code (repositories only).
    #[arg(long = "spoken-language")]
    spoken_language: Option<String>,

    /// Read a saved page instead of fetching. Use "-" for stdin.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Site root used for fetching and for absolute links in the output.
    #[arg(long, default_value = GITHUB_BASE_URL)]
    site_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Output file path (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut query = TrendingQuery::new(args.kind.into()).since(args.since);
    if let Some(language) = &args.language {
        query = query.language(language.as_str());
    }
    if let Some(code) = &args.spoken_language {
        query = query.spoken_language_code(code.as_str());
    }

    let raw_html = match &args.html {
        Some(path) => load_html(path)?,
        None => {
            let url = query.url(&args.site_url)?;
            info!(%url, "fetching trending page");
            fetch::fetch_page(&url, Duration::from_secs(args.timeout))?
        }
    };
    if raw_html.trim().is_empty() {
        bail!("page is empty; nothing to extract");
    }

    let parser = TrendingParser::builder()
        .base_url(args.site_url.as_str())
        .build()?;
    let records = parser.parse(query.kind, &raw_html, query.since.as_str());
    if records.is_empty() {
        warn!(
            kind = %query.kind,
            bytes = raw_html.len(),
            "no records extracted; the listing is empty or its markup changed"
        );
    }

    let output = if args.compact {
        serde_json::to_string(&records)?
    } else {
        serde_json::to_string_pretty(&records)?
    };

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", output),
    }
    Ok(())
}

fn load_html(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
