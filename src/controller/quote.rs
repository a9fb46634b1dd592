use crate::{
    conf::Conf,
    model::{ApiResult, QuoteView},
    provider::Provider,
    repository::QuoteRepository,
    service::quote,
};
use rocket::{get, State};

#[get("/cotacao")]
pub async fn get(
    provider: &State<Box<dyn Provider>>,
    repo: &State<QuoteRepository>,
    conf: &State<Conf>,
) -> ApiResult<QuoteView> {
    let res = quote::fetch_and_save(provider.inner().as_ref(), repo, conf).await;
    ApiResult::new(res.map(QuoteView::from))
}
