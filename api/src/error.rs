//! Errors produced while talking to a market data provider.

use thiserror::Error;

/// Everything that can go wrong between issuing a request and holding a
/// decoded model.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced a response (DNS, TLS, CORS, offline...).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with a non-success status code.
    #[error("unexpected http status {0}")]
    Status(u16),
    /// The body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),
    /// The body decoded but lacked a value we need, e.g. a price in the
    /// reference currency.
    #[error("response is missing `{0}`")]
    MissingField(String),
}
