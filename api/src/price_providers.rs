//! Defines the trait for external market data providers and the CoinGecko
//! implementation.

use dioxus_logger::tracing::debug;

use crate::error::MarketDataError;
use crate::market::AssetDetail;
use crate::market::AssetId;
use crate::market::AssetSummary;
use crate::market::PriceSeries;
use crate::vs_currency::VsCurrency;

/// Parameters of a ranked markets request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketsQuery {
    pub vs_currency: VsCurrency,
    pub per_page: u32,
    pub page: u32,
}

impl MarketsQuery {
    /// First page of `per_page` assets ranked by market cap.
    pub fn top(vs_currency: VsCurrency, per_page: u32) -> Self {
        Self {
            vs_currency,
            per_page,
            page: 1,
        }
    }
}

/// A trait for any service that can serve the widget's three views.
///
/// Implementations do no caching and no retrying; callers decide what a
/// failure means.
pub trait MarketDataProvider {
    /// Assets ranked by market cap, descending.
    async fn top_assets(&self, query: &MarketsQuery) -> Result<Vec<AssetSummary>, MarketDataError>;

    /// Metadata for one asset quoted in `currency`.
    async fn asset_detail(
        &self,
        id: &AssetId,
        currency: VsCurrency,
    ) -> Result<AssetDetail, MarketDataError>;

    /// Price history for the last `days` days.
    async fn price_history(
        &self,
        id: &AssetId,
        currency: VsCurrency,
        days: u32,
    ) -> Result<PriceSeries, MarketDataError>;
}

/// Provides market data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;
    use crate::market;
    use crate::prefs::widget_prefs::DEFAULT_API_BASE;

    /// An implementation of the `MarketDataProvider` trait for CoinGecko.
    #[derive(Clone, Debug)]
    pub struct CoinGecko {
        client: reqwest::Client,
        base_url: String,
    }

    impl Default for CoinGecko {
        fn default() -> Self {
            Self::new(DEFAULT_API_BASE)
        }
    }

    impl CoinGecko {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }
        }

        pub fn markets_url(&self, query: &MarketsQuery) -> String {
            format!(
                "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}",
                self.base_url,
                query.vs_currency.code(),
                query.per_page,
                query.page
            )
        }

        pub fn coin_url(&self, id: &AssetId) -> String {
            format!("{}/coins/{}", self.base_url, id)
        }

        pub fn market_chart_url(&self, id: &AssetId, currency: VsCurrency, days: u32) -> String {
            format!(
                "{}/coins/{}/market_chart?vs_currency={}&days={}",
                self.base_url,
                id,
                currency.code(),
                days
            )
        }

        /// Issues a GET and returns the body of a successful response.
        async fn get_text(&self, url: &str) -> Result<String, MarketDataError> {
            debug!("GET {}", url);
            let resp = self.client.get(url).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(MarketDataError::Status(status.as_u16()));
            }
            Ok(resp.text().await?)
        }
    }

    impl MarketDataProvider for CoinGecko {
        async fn top_assets(
            &self,
            query: &MarketsQuery,
        ) -> Result<Vec<AssetSummary>, MarketDataError> {
            let body = self.get_text(&self.markets_url(query)).await?;
            market::parse_markets(&body)
        }

        async fn asset_detail(
            &self,
            id: &AssetId,
            currency: VsCurrency,
        ) -> Result<AssetDetail, MarketDataError> {
            let body = self.get_text(&self.coin_url(id)).await?;
            market::parse_coin(&body, currency)
        }

        async fn price_history(
            &self,
            id: &AssetId,
            currency: VsCurrency,
            days: u32,
        ) -> Result<PriceSeries, MarketDataError> {
            let body = self
                .get_text(&self.market_chart_url(id, currency, days))
                .await?;
            market::parse_market_chart(&body, days)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn markets_url_matches_api() {
            let gecko = CoinGecko::default();
            let query = MarketsQuery::top(VsCurrency::Usd, 20);
            assert_eq!(
                gecko.markets_url(&query),
                "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=20&page=1"
            );
        }

        #[test]
        fn detail_and_chart_urls() {
            let gecko = CoinGecko::new("http://localhost:9000");
            let id = AssetId::new("bitcoin");
            assert_eq!(gecko.coin_url(&id), "http://localhost:9000/coins/bitcoin");
            assert_eq!(
                gecko.market_chart_url(&id, VsCurrency::Eur, 30),
                "http://localhost:9000/coins/bitcoin/market_chart?vs_currency=eur&days=30"
            );
        }
    }
}
