mod api_error;
pub use api_error::ApiError;
mod api_result;
pub use api_result::ApiResult;
mod error;
pub use error::QuoteError;
mod quote;
pub use quote::Quote;
mod quote_view;
pub use quote_view::QuoteView;
