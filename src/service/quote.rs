use crate::{
    conf::Conf,
    model::{Quote, QuoteError},
    provider::Provider,
    repository::QuoteRepository,
};
use anyhow::anyhow;
use std::time::{Duration, Instant};
use tokio::{task, time::timeout};
use tracing::info;

/// Fetches a fresh quote and persists it, each step under its own deadline.
///
/// A quote that was fetched but could not be saved is dropped.
pub async fn fetch_and_save(
    provider: &dyn Provider,
    repo: &QuoteRepository,
    conf: &Conf,
) -> Result<Quote, QuoteError> {
    let quote = fetch(provider, conf.provider.timeout()).await?;
    save(&quote, repo, conf.storage.timeout()).await?;
    Ok(quote)
}

pub async fn fetch(provider: &dyn Provider, limit: Duration) -> Result<Quote, QuoteError> {
    let bid = timeout(limit, provider.fetch_bid())
        .await
        .map_err(|_| {
            QuoteError::Fetch(anyhow!(
                "{} did not answer within {:?}",
                provider.name(),
                limit
            ))
        })?
        .map_err(QuoteError::Fetch)?;

    info!(provider = %provider.name(), %bid, "Fetched quote");
    Ok(Quote::new(bid))
}

pub async fn save(
    quote: &Quote,
    repo: &QuoteRepository,
    limit: Duration,
) -> Result<i64, QuoteError> {
    let deadline = Instant::now() + limit;
    let repo = repo.clone();
    let row = quote.clone();

    let id = task::spawn_blocking(move || repo.insert(&row, deadline))
        .await
        .map_err(|e| QuoteError::Save(e.into()))?
        .map_err(QuoteError::Save)?;

    info!(id, bid = %quote.bid, "Saved quote");
    Ok(id)
}
