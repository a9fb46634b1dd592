use crate::provider::Provider;
use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub struct AwesomeApi {
    conf: AwesomeApiConf,
    client: Client,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AwesomeApiConf {
    pub url: String,
    pub timeout_ms: u64,
}

impl AwesomeApiConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Deserialize)]
struct LastQuote {
    #[serde(rename = "USDBRL")]
    usd_brl: Ticker,
}

#[derive(Deserialize)]
struct Ticker {
    bid: String,
}

impl AwesomeApi {
    pub fn new(conf: AwesomeApiConf) -> Result<AwesomeApi> {
        let client = Client::builder().timeout(conf.timeout()).build()?;
        Ok(AwesomeApi { conf, client })
    }
}

#[rocket::async_trait]
impl Provider for AwesomeApi {
    fn name(&self) -> String {
        "awesomeapi".into()
    }

    async fn fetch_bid(&self) -> Result<String> {
        debug!(provider = %self.name(), url = %self.conf.url, "Fetching quote");
        let res = self.client.get(&self.conf.url).send().await?;

        if res.status() != StatusCode::OK {
            bail!("Upstream responded with {}", res.status());
        }

        let body = res.bytes().await?;
        parse(&body)
    }
}

fn parse(body: &[u8]) -> Result<String> {
    let quote: LastQuote =
        serde_json::from_slice(body).context("Upstream body is not a USDBRL quote")?;
    Ok(quote.usd_brl.bid)
}

#[cfg(test)]
mod test {
    use super::{parse, AwesomeApi, AwesomeApiConf};
    use crate::{provider::Provider, test::upstream};
    use anyhow::Result;
    use rocket::http::Status;
    use std::time::Duration;

    #[test]
    fn parse_keeps_bid_text() -> Result<()> {
        let body = br#"{"USDBRL":{"code":"USD","codein":"BRL","bid":"5.4310","ask":"5.4320"}}"#;
        assert_eq!("5.4310", parse(body)?);
        Ok(())
    }

    #[test]
    fn parse_malformed() {
        assert!(parse(b"{\"USDBRL\":").is_err());
        assert!(parse(br#"{"EURBRL":{"bid":"6.01"}}"#).is_err());
        assert!(parse(br#"{"USDBRL":{"ask":"5.44"}}"#).is_err());
        assert!(parse(br#"{"USDBRL":{"bid":5.43}}"#).is_err());
    }

    #[rocket::async_test]
    async fn fetch_bid() {
        let (url, shutdown) = upstream(
            Status::Ok,
            r#"{"USDBRL":{"bid":"5.43","ask":"5.44"}}"#,
            Duration::ZERO,
        )
        .await;
        let provider = AwesomeApi::new(conf(url, 1000)).unwrap();
        assert_eq!("5.43", provider.fetch_bid().await.unwrap());
        shutdown.notify();
    }

    #[rocket::async_test]
    async fn fetch_bid_non_ok_status() {
        let (url, shutdown) = upstream(
            Status::ServiceUnavailable,
            r#"{"USDBRL":{"bid":"5.43"}}"#,
            Duration::ZERO,
        )
        .await;
        let provider = AwesomeApi::new(conf(url, 1000)).unwrap();
        assert!(provider.fetch_bid().await.is_err());
        shutdown.notify();
    }

    #[rocket::async_test]
    async fn fetch_bid_malformed_body() {
        let (url, shutdown) = upstream(Status::Ok, "<html></html>", Duration::ZERO).await;
        let provider = AwesomeApi::new(conf(url, 1000)).unwrap();
        assert!(provider.fetch_bid().await.is_err());
        shutdown.notify();
    }

    #[rocket::async_test]
    async fn fetch_bid_timed_out() {
        let (url, shutdown) = upstream(
            Status::Ok,
            r#"{"USDBRL":{"bid":"5.43"}}"#,
            Duration::from_millis(500),
        )
        .await;
        let provider = AwesomeApi::new(conf(url, 50)).unwrap();
        assert!(provider.fetch_bid().await.is_err());
        shutdown.notify();
    }

    fn conf(url: String, timeout_ms: u64) -> AwesomeApiConf {
        AwesomeApiConf { url, timeout_ms }
    }
}
