//! Display-ready values derived from the market models. Components only
//! render these; nothing here needs a DOM.

use api::market::AssetDetail;
use api::market::AssetId;
use api::market::AssetSummary;
use api::market::PriceSeries;
use api::number_format;
use api::prefs::favorites::Favorites;
use api::vs_currency::VsCurrency;
use chrono::DateTime;
use chrono::Utc;

pub const LIST_ERROR_MESSAGE: &str = "Error loading coins";

/// Lookback windows offered by the timeframe selector: (days, caption).
pub const TIMEFRAMES: [(u32, &str); 5] = [
    (1, "24h"),
    (7, "7d"),
    (30, "30d"),
    (90, "90d"),
    (365, "1y"),
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero and unknown changes count as up.
    pub fn of(change: Option<f64>) -> Self {
        match change {
            Some(c) if c < 0.0 => Self::Down,
            _ => Self::Up,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Up => "lime",
            Self::Down => "red",
        }
    }
}

/// Which rows of the fetched list to show.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RowFilter {
    #[default]
    All,
    FavoritesOnly,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CoinRow {
    pub id: AssetId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
    pub favorite: bool,
}

impl CoinRow {
    pub fn new(asset: &AssetSummary, favorite: bool, currency: VsCurrency) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            image: asset.image.clone(),
            price: number_format::price(asset.current_price, currency.symbol()),
            change: number_format::percent(asset.price_change_24h),
            trend: Trend::of(asset.price_change_24h),
            favorite,
        }
    }
}

/// One row per asset, in the order given.
pub fn coin_rows(
    assets: &[AssetSummary],
    favorites: &Favorites,
    currency: VsCurrency,
    filter: RowFilter,
) -> Vec<CoinRow> {
    assets
        .iter()
        .map(|asset| CoinRow::new(asset, favorites.is_favorite(&asset.id), currency))
        .filter(|row| filter == RowFilter::All || row.favorite)
        .collect()
}

/// The fixed fields of the detail panel.
#[derive(Clone, PartialEq, Debug)]
pub struct DetailView {
    pub id: AssetId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub market_cap: String,
    pub high_24h: String,
    pub low_24h: String,
}

impl From<&AssetDetail> for DetailView {
    fn from(detail: &AssetDetail) -> Self {
        Self {
            id: detail.id.clone(),
            title: detail.name.clone(),
            description: detail.description.clone(),
            price: number_format::locale(detail.current_price),
            market_cap: number_format::locale(detail.market_cap),
            high_24h: number_format::locale(detail.high_24h),
            low_24h: number_format::locale(detail.low_24h),
        }
    }
}

/// Positionally aligned labels and values handed to the chart.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&PriceSeries> for ChartData {
    fn from(series: &PriceSeries) -> Self {
        let (labels, values): (Vec<String>, Vec<f64>) = series
            .points
            .iter()
            .map(|p| (date_label(p.timestamp_ms), p.price))
            .unzip();
        Self { labels, values }
    }
}

/// `M/D/YYYY` in UTC, matching the en-US short date style.
pub fn date_label(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => String::new(),
    }
}
