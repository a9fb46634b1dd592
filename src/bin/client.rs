use cotacao::{client, conf::Conf};
use std::process::exit;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    if let Err(e) = client::run(&conf.client).await {
        error!("{:#}", e);
        exit(1);
    }

    info!(output = %conf.client.output.display(), "Quote saved");
}
