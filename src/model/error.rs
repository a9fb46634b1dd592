use thiserror::Error;

/// Failures of the quote round trip as seen by the HTTP layer.
///
/// Upstream transport errors and malformed upstream bodies share `Fetch`.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("could not fetch quote")]
    Fetch(#[source] anyhow::Error),

    #[error("could not save quote")]
    Save(#[source] anyhow::Error),
}
