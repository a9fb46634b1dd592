use anyhow::Result;

/// Source of the current USD-BRL bid.
#[rocket::async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> String;

    /// Returns the bid exactly as the upstream formats it.
    async fn fetch_bid(&self) -> Result<String>;
}
