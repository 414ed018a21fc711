//! The widget's single mutable store.
//!
//! `Dashboard` owns everything that changes while the page is open: the
//! latest coin list, the favorites set, the selection and what the detail
//! panel and chart currently show. Components hold it in one `Signal`;
//! async fetches report back through the `apply_*` methods, which discard
//! responses that are no longer wanted.

use api::market::AssetDetail;
use api::market::AssetId;
use api::market::AssetSummary;
use api::market::PriceSeries;
use api::prefs::favorites::Favorites;
use api::vs_currency::VsCurrency;
use api::MarketDataError;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::chart::ChartInstance;
use crate::selection::ChartTicket;
use crate::selection::DetailTicket;
use crate::selection::Selection;
use crate::view_model::coin_rows;
use crate::view_model::ChartData;
use crate::view_model::CoinRow;
use crate::view_model::DetailView;
use crate::view_model::RowFilter;

/// What the list panel shows.
#[derive(Clone, PartialEq, Debug, Default, strum::EnumIs)]
pub enum ListState {
    /// No fetch has completed yet.
    #[default]
    Loading,
    Loaded(Vec<AssetSummary>),
    /// The latest fetch failed; the panel shows the static error message.
    Failed,
}

#[derive(Debug)]
pub struct Dashboard {
    currency: VsCurrency,
    list: ListState,
    favorites: Favorites,
    selection: Selection,
    detail: Option<DetailView>,
    detail_failed: bool,
    chart: Option<ChartInstance>,
    chart_failed: bool,
    chart_generation: u64,
}

impl Dashboard {
    pub fn new(favorites: Favorites, currency: VsCurrency) -> Self {
        Self {
            currency,
            list: ListState::default(),
            favorites,
            selection: Selection::default(),
            detail: None,
            detail_failed: false,
            chart: None,
            chart_failed: false,
            chart_generation: 0,
        }
    }

    pub fn currency(&self) -> VsCurrency {
        self.currency
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Rows to render; empty unless the latest fetch succeeded.
    pub fn rows(&self, filter: RowFilter) -> Vec<CoinRow> {
        match &self.list {
            ListState::Loaded(assets) => coin_rows(assets, &self.favorites, self.currency, filter),
            _ => Vec::new(),
        }
    }

    /// Replaces the list with the outcome of a markets fetch.
    pub fn apply_coin_list(&mut self, result: Result<Vec<AssetSummary>, MarketDataError>) {
        self.list = match result {
            Ok(assets) => {
                info!("loaded {} coins", assets.len());
                ListState::Loaded(assets)
            }
            Err(e) => {
                warn!("failed to load coin list: {}", e);
                ListState::Failed
            }
        };
    }

    /// Stars or unstars `id`. A failed write is logged; the row still
    /// flips for this session.
    pub fn toggle_favorite(&mut self, id: &AssetId) {
        match self.favorites.toggle(id) {
            Ok(starred) => debug!("{} favorite: {}", id, starred),
            Err(e) => warn!("could not persist favorites: {}", e),
        }
    }

    pub fn selected(&self) -> Option<&AssetId> {
        self.selection.current()
    }

    /// Lookback window of the chart being shown or fetched.
    pub fn chart_days(&self) -> u32 {
        self.selection.days()
    }

    /// Row click: selects `id` and returns the detail and chart requests to
    /// issue. Responses to any earlier requests will be ignored.
    pub fn select(&mut self, id: AssetId, days: u32) -> (DetailTicket, ChartTicket) {
        self.detail_failed = false;
        self.chart_failed = false;
        self.selection.select(id, days)
    }

    /// Timeframe click: returns the chart request to issue, or `None` with
    /// no state change when nothing is selected.
    pub fn change_timeframe(&mut self, days: u32) -> Option<ChartTicket> {
        let ticket = self.selection.change_timeframe(days)?;
        self.chart_failed = false;
        Some(ticket)
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Whether the latest detail request failed.
    pub fn detail_failed(&self) -> bool {
        self.detail_failed
    }

    /// Installs a detail response if `ticket` is still the latest detail
    /// request. Returns whether the panel changed.
    pub fn apply_detail(&mut self, ticket: &DetailTicket, result: Result<AssetDetail, MarketDataError>) -> bool {
        if !self.selection.is_latest_detail(ticket) {
            debug!("discarding stale detail for {}", ticket.id);
            return false;
        }
        match result {
            Ok(detail) => {
                self.detail = Some(DetailView::from(&detail));
                self.detail_failed = false;
                true
            }
            Err(e) => {
                warn!("failed to load details for {}: {}", ticket.id, e);
                self.detail_failed = true;
                false
            }
        }
    }

    pub fn chart(&self) -> Option<&ChartInstance> {
        self.chart.as_ref()
    }

    /// Whether the latest chart request failed.
    pub fn chart_failed(&self) -> bool {
        self.chart_failed
    }

    /// Installs a chart response if `ticket` is still the latest chart
    /// request, destroying the previous chart first. Returns whether the
    /// chart changed.
    pub fn apply_chart(&mut self, ticket: &ChartTicket, result: Result<PriceSeries, MarketDataError>) -> bool {
        if !self.selection.is_latest_chart(ticket) {
            debug!("discarding stale {}d chart for {}", ticket.days, ticket.id);
            return false;
        }
        let series = match result {
            Ok(series) => series,
            Err(e) => {
                warn!("failed to load {}d chart for {}: {}", ticket.days, ticket.id, e);
                self.chart_failed = true;
                return false;
            }
        };

        if let Some(previous) = self.chart.take() {
            previous.destroy();
        }
        self.chart_failed = false;
        self.chart_generation += 1;
        self.chart = Some(ChartInstance::new(
            self.chart_generation,
            ChartData::from(&series),
            self.currency,
        ));
        true
    }
}
