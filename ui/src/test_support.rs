//! Provider double shared by the store and action tests.

use std::cell::Cell;
use std::rc::Rc;

use api::market::AssetDetail;
use api::market::AssetId;
use api::market::AssetSummary;
use api::market::PricePoint;
use api::market::PriceSeries;
use api::price_providers::MarketDataProvider;
use api::price_providers::MarketsQuery;
use api::vs_currency::VsCurrency;
use api::MarketDataError;

/// Serves canned data and counts requests. Clones share the counter.
#[derive(Clone, Default)]
pub struct MockProvider {
    pub fail_list: bool,
    pub fail_detail: bool,
    pub fail_chart: bool,
    pub(crate) requests: Rc<Cell<usize>>,
}

impl MockProvider {
    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Default::default()
        }
    }

    /// Requests served so far, failed ones included.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn count(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

impl MarketDataProvider for MockProvider {
    async fn top_assets(&self, query: &MarketsQuery) -> Result<Vec<AssetSummary>, MarketDataError> {
        self.count();
        if self.fail_list {
            return Err(MarketDataError::Status(503));
        }
        Ok((0..query.per_page)
            .map(|i| AssetSummary {
                id: AssetId::new(format!("coin-{i}")),
                name: format!("Coin {i}"),
                image: format!("https://img/{i}.png"),
                current_price: Some(1000.0 - i as f64),
                price_change_24h: Some(if i % 2 == 0 { 1.5 } else { -0.5 }),
            })
            .collect())
    }

    async fn asset_detail(&self, id: &AssetId, _currency: VsCurrency) -> Result<AssetDetail, MarketDataError> {
        self.count();
        if self.fail_detail {
            return Err(MarketDataError::MissingField("market_data".to_string()));
        }
        Ok(AssetDetail {
            id: id.clone(),
            name: id.as_str().to_uppercase(),
            description: format!("About {id}"),
            current_price: 1234.5,
            market_cap: 1_000_000.0,
            high_24h: 1300.0,
            low_24h: 1200.0,
        })
    }

    async fn price_history(
        &self,
        _id: &AssetId,
        _currency: VsCurrency,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError> {
        self.count();
        if self.fail_chart {
            return Err(MarketDataError::Status(429));
        }
        Ok(PriceSeries {
            days,
            points: (0..days as i64 * 24)
                .map(|h| PricePoint {
                    timestamp_ms: 1_700_000_000_000 + h * 3_600_000,
                    price: 100.0 + h as f64,
                })
                .collect(),
        })
    }
}
