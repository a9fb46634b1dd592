use super::{ApiError, QuoteError};
use rocket::{
    response::Responder,
    serde::{json::Json, Serialize},
};

#[derive(Responder)]
#[response(bound = "T: Serialize")]
pub enum ApiResult<T> {
    Ok(Json<T>),
    Err(ApiError),
}

impl<T> ApiResult<T> {
    pub fn new(result: Result<T, QuoteError>) -> ApiResult<T> {
        match result {
            Ok(val) => ApiResult::Ok(Json(val)),
            Err(e) => ApiResult::Err(e.into()),
        }
    }
}
