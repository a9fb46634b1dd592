use crate::{conf::ClientConf, model::QuoteView};
use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use std::fs;
use tracing::debug;

/// Asks the quote server for the current bid and writes it to the output file.
///
/// The file is only touched once a valid quote has been received.
pub async fn run(conf: &ClientConf) -> Result<()> {
    let client = Client::builder()
        .timeout(conf.timeout())
        .build()
        .context("Failed to build request")?;

    debug!(url = %conf.url, "Requesting quote");
    let res = client
        .get(&conf.url)
        .send()
        .await
        .context("Failed to request quote")?;

    if res.status() != StatusCode::OK {
        bail!("Quote server responded with {}", res.status());
    }

    let quote: QuoteView = res.json().await.context("Failed to decode quote")?;

    fs::write(&conf.output, content(&quote))
        .with_context(|| format!("Failed to write {}", conf.output.display()))?;

    Ok(())
}

fn content(quote: &QuoteView) -> String {
    format!("Dólar: {}", quote.bid)
}
