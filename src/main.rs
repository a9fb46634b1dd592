use cotacao::{conf::Conf, db, provider::AwesomeApi, repository::QuoteRepository};
use std::process::exit;
use tracing::{error, info};

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    let pool = db::setup(&conf.db_url).unwrap_or_else(|e| {
        error!(%e, "Unable to prepare database");
        exit(1);
    });

    let provider = AwesomeApi::new(conf.provider.clone()).unwrap_or_else(|e| {
        error!(%e, "Unable to create provider");
        exit(1);
    });

    info!(
        address = %conf.server.address,
        port = conf.server.port,
        "Starting quote server"
    );

    let rocket = cotacao::server(conf, Box::new(provider), QuoteRepository::new(pool));

    if let Err(e) = rocket.launch().await {
        error!(%e, "Server failed");
        exit(1);
    }
}
