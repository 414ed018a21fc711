use dioxus::prelude::*;

use crate::components::coin_list::CoinList;
use crate::components::detail_panel::DetailPanel;
use crate::view_model::RowFilter;

/// List on the left, detail and chart on the right.
#[component]
pub fn DashboardScreen(filter: RowFilter) -> Element {
    rsx! {
        div {
            class: "dashboard",
            section {
                class: "coin-column",
                CoinList { filter }
            }
            section {
                class: "detail-column",
                DetailPanel {}
            }
        }
    }
}
