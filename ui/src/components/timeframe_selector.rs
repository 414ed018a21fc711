use dioxus::prelude::*;

use crate::actions;
use crate::hooks::use_dashboard::use_app_state;
use crate::hooks::use_dashboard::use_dashboard;
use crate::view_model::TIMEFRAMES;

/// One button per lookback window. Clicking re-requests only the chart for
/// the selected asset.
#[component]
pub fn TimeframeSelector() -> Element {
    let app = use_app_state();
    let dashboard = use_dashboard();
    let active_days = dashboard.read().chart_days();

    rsx! {
        div {
            class: "timeframe-selector",
            role: "group",
            for (days, caption) in TIMEFRAMES {
                button {
                    key: "{days}",
                    class: if days == active_days { "" } else { "outline secondary" },
                    "data-days": "{days}",
                    onclick: {
                        let app = app.clone();
                        move |_| actions::change_timeframe(&app, dashboard, days)
                    },
                    "{caption}"
                }
            }
        }
    }
}
