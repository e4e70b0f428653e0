// ABOUTME: Single blocking GET of a trending page.
// ABOUTME: Connection errors, error statuses and blank bodies all count as upstream failures.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::debug;
use url::Url;

/// The listing is served differently to non-browser agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches `url` and returns the body text.
pub fn fetch_page(url: &Url, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")?;

    let resp = client
        .get(url.clone())
        .send()
        .with_context(|| format!("failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("upstream rejected {}", url))?;
    let body = resp
        .text()
        .with_context(|| format!("failed to read body of {}", url))?;
    debug!(%url, bytes = body.len(), "fetched page");

    if body.trim().is_empty() {
        bail!("received empty response from {}", url);
    }
    Ok(body)
}
