//! Tracks the selected asset and stamps detail/chart requests so that only
//! the newest response of each kind is applied.

use api::market::AssetId;

/// Sequence number of an issued request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A detail fetch that was issued for `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub id: AssetId,
    pub token: RequestToken,
}

/// A chart fetch that was issued for `id` over `days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTicket {
    pub id: AssetId,
    pub days: u32,
    pub token: RequestToken,
}

#[derive(Debug, Default)]
pub struct Selection {
    current: Option<AssetId>,
    days: u32,
    detail_token: RequestToken,
    chart_token: RequestToken,
}

impl Selection {
    /// Selects `id` and issues one detail and one chart request for it.
    pub fn select(&mut self, id: AssetId, days: u32) -> (DetailTicket, ChartTicket) {
        self.current = Some(id.clone());
        self.days = days;
        self.detail_token = self.detail_token.next();
        let chart = self.issue_chart(id.clone());
        let detail = DetailTicket {
            id,
            token: self.detail_token,
        };
        (detail, chart)
    }

    /// Issues a chart request for the selected asset over a new window.
    /// Returns `None`, changing nothing, when no asset is selected.
    pub fn change_timeframe(&mut self, days: u32) -> Option<ChartTicket> {
        let id = self.current.clone()?;
        self.days = days;
        Some(self.issue_chart(id))
    }

    pub fn current(&self) -> Option<&AssetId> {
        self.current.as_ref()
    }

    /// Lookback window of the newest chart request; 0 before any selection.
    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn is_latest_detail(&self, ticket: &DetailTicket) -> bool {
        ticket.token == self.detail_token
    }

    pub fn is_latest_chart(&self, ticket: &ChartTicket) -> bool {
        ticket.token == self.chart_token
    }

    fn issue_chart(&mut self, id: AssetId) -> ChartTicket {
        self.chart_token = self.chart_token.next();
        ChartTicket {
            id,
            days: self.days,
            token: self.chart_token,
        }
    }
}
