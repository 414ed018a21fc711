use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::line_chart::LineChart;
use crate::components::pico::Card;
use crate::components::pico::Stat;
use crate::components::timeframe_selector::TimeframeSelector;
use crate::hooks::use_dashboard::use_dashboard;

/// Details and chart of the selected asset.
#[component]
pub fn DetailPanel() -> Element {
    let dashboard = use_dashboard();
    let state = dashboard.read();

    if state.selected().is_none() {
        return rsx! {
            Card {
                EmptyState {
                    title: "No coin selected".to_string(),
                    description: Some("Pick a coin from the list to see its details and price chart.".to_string()),
                    icon: Some("📈"),
                }
            }
        };
    }

    let detail = state.detail().cloned();
    let chart = state.chart().cloned();
    let detail_failed = state.detail_failed();
    let chart_failed = state.chart_failed();
    let caption = format!("Price in {}", state.currency().ticker());

    rsx! {
        Card {
            id: "coin-detail".to_string(),
            {match detail {
                Some(detail) => rsx! {
                    h2 {
                        id: "coin-title",
                        "{detail.title}"
                    }
                    p {
                        id: "coin-desc",
                        "{detail.description}"
                    }
                    div {
                        class: "grid",
                        Stat { label: "Price", value_id: "coin-price", value: detail.price.clone() }
                        Stat { label: "Market cap", value_id: "coin-marketcap", value: detail.market_cap.clone() }
                        Stat { label: "24h high", value_id: "coin-high", value: detail.high_24h.clone() }
                        Stat { label: "24h low", value_id: "coin-low", value: detail.low_24h.clone() }
                    }
                },
                None if detail_failed => rsx! {
                    p { "Details unavailable." }
                },
                None => rsx! {
                    p { "aria-busy": "true", "Loading details..." }
                },
            }}
            TimeframeSelector {}
            if let Some(chart) = chart {
                LineChart {
                    key: "{chart.generation()}",
                    chart,
                }
            } else if chart_failed {
                p { "Chart unavailable." }
            } else {
                p { "aria-busy": "true", "Loading chart..." }
            }
            small { "{caption}" }
        }
    }
}
