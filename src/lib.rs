pub mod client;
pub mod conf;
pub mod controller;
pub mod db;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

use conf::Conf;
use provider::Provider;
use repository::QuoteRepository;
use rocket::{catchers, routes, Build, Rocket};

pub fn server(conf: Conf, provider: Box<dyn Provider>, repo: QuoteRepository) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", &conf.server.address))
        .merge(("port", conf.server.port));

    rocket::custom(figment)
        .mount("/", routes![controller::quote::get])
        .register("/", catchers![controller::catcher::default])
        .manage(provider)
        .manage(repo)
        .manage(conf)
}
