use super::QuoteError;
use anyhow::Error;
use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
};
use std::io::Cursor;
use tracing::error;

#[derive(Debug)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub error: Option<Error>,
}

impl ApiError {
    pub fn new(code: u16, message: &str, error: Error) -> ApiError {
        ApiError {
            code,
            message: message.to_string(),
            error: Some(error),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = self.error {
            error!(uri = %req.uri(), "Error from controller: {:#}", error);
        }

        let body = self.message;

        Response::build()
            .header(ContentType::Plain)
            .status(Status::new(self.code))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        let message = e.to_string();
        ApiError::new(500, &message, e.into())
    }
}

impl From<Status> for ApiError {
    fn from(s: Status) -> Self {
        ApiError {
            code: s.code,
            message: s.to_string(),
            error: None,
        }
    }
}
