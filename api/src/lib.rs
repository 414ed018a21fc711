//! Market data for the coin watch widget: models, the CoinGecko client,
//! number formatting and the persisted user preferences.
//!
//! Nothing in this crate touches the DOM, so everything here can be tested
//! natively.

pub mod error;
pub mod market;
pub mod number_format;
pub mod prefs;
pub mod price_providers;
pub mod vs_currency;

pub use error::MarketDataError;
