//! Models for the three market data views the widget shows: the ranked
//! list, a single asset's detail and its price history.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::MarketDataError;
use crate::vs_currency::VsCurrency;

/// Stable provider identifier of an asset, e.g. "bitcoin".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One row of the ranked markets listing.
///
/// Prices are `None` when the provider reports `null`, which happens for
/// freshly listed or delisted assets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetSummary {
    pub id: AssetId,
    pub name: String,
    pub image: String,
    pub current_price: Option<f64>,
    #[serde(rename = "price_change_percentage_24h")]
    pub price_change_24h: Option<f64>,
}

/// Decodes a `/coins/markets` body, keeping the provider's order.
pub fn parse_markets(body: &str) -> Result<Vec<AssetSummary>, MarketDataError> {
    Ok(serde_json::from_str(body)?)
}

/// Metadata for a single asset, already narrowed to one reference currency.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub id: AssetId,
    pub name: String,
    /// Text of the English description up to its first period.
    pub description: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub high_24h: f64,
    pub low_24h: f64,
}

#[derive(Deserialize, Debug)]
struct CoinResponse {
    id: AssetId,
    name: String,
    #[serde(default)]
    description: HashMap<String, Option<String>>,
    market_data: MarketDataResponse,
}

#[derive(Deserialize, Debug)]
struct MarketDataResponse {
    current_price: HashMap<String, Option<f64>>,
    market_cap: HashMap<String, Option<f64>>,
    high_24h: HashMap<String, Option<f64>>,
    low_24h: HashMap<String, Option<f64>>,
}

/// Decodes a `/coins/{id}` body and picks out the values quoted in
/// `currency`.
pub fn parse_coin(body: &str, currency: VsCurrency) -> Result<AssetDetail, MarketDataError> {
    let resp: CoinResponse = serde_json::from_str(body)?;

    let quote = |field: &str, map: &HashMap<String, Option<f64>>| {
        map.get(currency.code())
            .copied()
            .flatten()
            .ok_or_else(|| MarketDataError::MissingField(format!("{}.{}", field, currency.code())))
    };

    let market = &resp.market_data;
    let description = resp
        .description
        .get("en")
        .cloned()
        .flatten()
        .unwrap_or_default();

    Ok(AssetDetail {
        current_price: quote("current_price", &market.current_price)?,
        market_cap: quote("market_cap", &market.market_cap)?,
        high_24h: quote("high_24h", &market.high_24h)?,
        low_24h: quote("low_24h", &market.low_24h)?,
        description: first_sentence(&description).to_string(),
        id: resp.id,
        name: resp.name,
    })
}

/// Returns `text` up to (not including) its first `.`, or all of it.
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or_default()
}

/// A single `(timestamp, price)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
    pub price: f64,
}

/// Price history over a lookback window, oldest sample first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub days: u32,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Deserialize, Debug)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
}

/// Decodes a `/coins/{id}/market_chart` body. Only the `prices` array is
/// used; market caps and volumes are ignored.
pub fn parse_market_chart(body: &str, days: u32) -> Result<PriceSeries, MarketDataError> {
    let resp: MarketChartResponse = serde_json::from_str(body)?;
    let points = resp
        .prices
        .into_iter()
        .map(|(timestamp, price)| PricePoint {
            timestamp_ms: timestamp as i64,
            price,
        })
        .collect();
    Ok(PriceSeries { days, points })
}
