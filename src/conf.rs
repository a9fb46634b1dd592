use crate::provider::AwesomeApiConf;
use anyhow::Result;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

static DEFAULT_CONF: &str = include_str!("../cotacao.conf");

#[derive(Clone, Debug, Deserialize)]
pub struct Conf {
    pub db_url: String,
    pub provider: AwesomeApiConf,
    pub storage: StorageConf,
    pub server: ServerConf,
    pub client: ClientConf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StorageConf {
    pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConf {
    pub address: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConf {
    pub url: String,
    pub timeout_ms: u64,
    pub output: PathBuf,
}

impl Conf {
    /// Loads the settings compiled into the binary. Nothing is read at runtime.
    pub fn new() -> Result<Conf> {
        let conf: Conf = Figment::new().merge(Toml::string(DEFAULT_CONF)).extract()?;

        Ok(conf)
    }
}

impl StorageConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ClientConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
