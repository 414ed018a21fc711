//! Event handlers that start network requests and feed the responses back
//! into the dashboard store.
//!
//! Deciding what to fetch and building the fetch futures is kept apart
//! from spawning them, so the decisions can be exercised with any
//! [`MarketDataProvider`].

use std::future::Future;
use std::time::Duration;

use api::market::AssetDetail;
use api::market::AssetId;
use api::market::PriceSeries;
use api::price_providers::MarketDataProvider;
use api::vs_currency::VsCurrency;
use api::MarketDataError;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::compat;
use crate::dashboard::Dashboard;
use crate::selection::ChartTicket;
use crate::selection::DetailTicket;

pub type DetailResponse = (DetailTicket, Result<AssetDetail, MarketDataError>);
pub type ChartResponse = (ChartTicket, Result<PriceSeries, MarketDataError>);

/// Fetches the ranked list once and installs the result.
pub async fn refresh_coin_list(app: &AppState, mut dashboard: Signal<Dashboard>) {
    let result = app.provider.top_assets(&app.markets_query()).await;
    dashboard.with_mut(|d| d.apply_coin_list(result));
}

/// Calls `restart` every `interval`, forever. Never waits on the request
/// being restarted.
pub async fn restart_every(interval: Duration, mut restart: impl FnMut()) {
    loop {
        compat::sleep(interval).await;
        restart();
    }
}

/// Row click.
pub fn select_asset(app: &AppState, mut dashboard: Signal<Dashboard>, id: AssetId) {
    let (detail, chart) = dashboard.with_mut(|d| {
        selection_fetches(
            d,
            app.provider.clone(),
            app.prefs.vs_currency,
            id,
            app.prefs.default_days,
        )
    });
    spawn_detail(dashboard, detail);
    spawn_chart(dashboard, chart);
}

/// Timeframe click. Does nothing without a selection.
pub fn change_timeframe(app: &AppState, mut dashboard: Signal<Dashboard>, days: u32) {
    // leave the store unwritten so nothing re-renders
    if dashboard.peek().selected().is_none() {
        return;
    }
    let fetch = dashboard.with_mut(|d| {
        timeframe_fetch(d, app.provider.clone(), app.prefs.vs_currency, days)
    });
    if let Some(fetch) = fetch {
        spawn_chart(dashboard, fetch);
    }
}

/// Star click.
pub fn toggle_favorite(mut dashboard: Signal<Dashboard>, id: &AssetId) {
    dashboard.with_mut(|d| d.toggle_favorite(id));
}

/// Selects `id` and returns the detail and chart fetches to run.
pub fn selection_fetches<P>(
    dashboard: &mut Dashboard,
    provider: P,
    currency: VsCurrency,
    id: AssetId,
    days: u32,
) -> (
    impl Future<Output = DetailResponse> + 'static,
    impl Future<Output = ChartResponse> + 'static,
)
where
    P: MarketDataProvider + Clone + 'static,
{
    let (detail, chart) = dashboard.select(id, days);
    (
        fetch_detail(provider.clone(), currency, detail),
        fetch_chart(provider, currency, chart),
    )
}

/// The chart fetch a timeframe click starts, or `None` when nothing is
/// selected.
pub fn timeframe_fetch<P>(
    dashboard: &mut Dashboard,
    provider: P,
    currency: VsCurrency,
    days: u32,
) -> Option<impl Future<Output = ChartResponse> + 'static>
where
    P: MarketDataProvider + 'static,
{
    let ticket = dashboard.change_timeframe(days)?;
    Some(fetch_chart(provider, currency, ticket))
}

async fn fetch_detail<P: MarketDataProvider>(
    provider: P,
    currency: VsCurrency,
    ticket: DetailTicket,
) -> DetailResponse {
    let result = provider.asset_detail(&ticket.id, currency).await;
    (ticket, result)
}

async fn fetch_chart<P: MarketDataProvider>(
    provider: P,
    currency: VsCurrency,
    ticket: ChartTicket,
) -> ChartResponse {
    let result = provider.price_history(&ticket.id, currency, ticket.days).await;
    (ticket, result)
}

fn spawn_detail(
    mut dashboard: Signal<Dashboard>,
    fetch: impl Future<Output = DetailResponse> + 'static,
) {
    spawn(async move {
        let (ticket, result) = fetch.await;
        dashboard.with_mut(|d| d.apply_detail(&ticket, result));
    });
}

fn spawn_chart(
    mut dashboard: Signal<Dashboard>,
    fetch: impl Future<Output = ChartResponse> + 'static,
) {
    spawn(async move {
        let (ticket, result) = fetch.await;
        dashboard.with_mut(|d| d.apply_chart(&ticket, result));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::prefs::favorites::Favorites;
    use api::prefs::favorites::MemoryStore;

    use crate::test_support::MockProvider;

    fn dashboard() -> Dashboard {
        Dashboard::new(Favorites::load(Box::new(MemoryStore::default())), VsCurrency::Usd)
    }

    #[test]
    fn timeframe_click_without_selection_starts_no_fetch() {
        let provider = MockProvider::default();
        let mut dash = dashboard();

        let fetch = timeframe_fetch(&mut dash, provider.clone(), VsCurrency::Usd, 30);
        assert!(fetch.is_none());
        assert_eq!(provider.requests(), 0);
        assert!(dash.selected().is_none());
        assert_eq!(dash.chart_days(), 0);
    }

    #[tokio::test]
    async fn timeframe_click_fetches_only_the_chart() {
        let provider = MockProvider::default();
        let mut dash = dashboard();
        let (detail, chart) =
            selection_fetches(&mut dash, provider.clone(), VsCurrency::Usd, "solana".into(), 7);
        let (ticket, result) = detail.await;
        assert!(dash.apply_detail(&ticket, result));
        let (ticket, result) = chart.await;
        assert!(dash.apply_chart(&ticket, result));
        assert_eq!(provider.requests(), 2);

        let fetch = timeframe_fetch(&mut dash, provider.clone(), VsCurrency::Usd, 90)
            .expect("a coin is selected");
        let (ticket, result) = fetch.await;
        assert_eq!(provider.requests(), 3);
        assert_eq!(ticket.id.as_str(), "solana");
        assert_eq!(ticket.days, 90);
        assert!(dash.apply_chart(&ticket, result));
        assert_eq!(dash.chart().unwrap().data().len(), 90 * 24);
    }

    #[tokio::test]
    async fn fetches_are_lazy_until_spawned() {
        let provider = MockProvider::default();
        let mut dash = dashboard();
        let (detail, chart) =
            selection_fetches(&mut dash, provider.clone(), VsCurrency::Usd, "bitcoin".into(), 7);
        assert_eq!(provider.requests(), 0);
        assert_eq!(dash.selected().map(|id| id.as_str()), Some("bitcoin"));

        chart.await;
        detail.await;
        assert_eq!(provider.requests(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_keeps_a_fixed_cadence() {
        let mut restarts = 0;
        let schedule = restart_every(Duration::from_secs(60), || restarts += 1);
        let _ = tokio::time::timeout(Duration::from_secs(185), schedule).await;
        assert_eq!(restarts, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn hung_request_does_not_stall_refresh() {
        let mut restarts = 0;
        let hung_request = std::future::pending::<()>();
        let schedule = restart_every(Duration::from_secs(60), || restarts += 1);
        tokio::select! {
            _ = hung_request => unreachable!(),
            _ = schedule => unreachable!(),
            _ = tokio::time::sleep(Duration::from_secs(121)) => {}
        }
        assert_eq!(restarts, 2);
    }
}
