use std::ops::Deref;
use std::sync::Arc;

use api::prefs::widget_prefs::WidgetPrefs;
use api::price_providers::coin_gecko::CoinGecko;
use api::price_providers::MarketsQuery;

/// Immutable, app-wide data: settings and the provider built from them.
#[derive(Debug)]
pub struct AppStateData {
    pub prefs: WidgetPrefs,
    pub provider: CoinGecko,
}

#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: WidgetPrefs) -> Self {
        let provider = CoinGecko::new(prefs.api_base.clone());
        Self(Arc::new(AppStateData { prefs, provider }))
    }

    /// The ranked-list request issued on every refresh.
    pub fn markets_query(&self) -> MarketsQuery {
        MarketsQuery::top(self.prefs.vs_currency, self.prefs.per_page)
    }
}
