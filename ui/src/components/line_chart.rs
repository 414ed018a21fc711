use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::chart::ChartInstance;

/// Mounts one rendered chart. Callers key this component by
/// `chart.generation()`, so a new chart unmounts the old subtree instead of
/// patching it.
#[component]
pub fn LineChart(chart: ChartInstance) -> Element {
    let generation = chart.generation();
    use_drop(move || debug!("chart #{} unmounted", generation));

    rsx! {
        figure {
            style: "margin: 0;",
            div {
                id: "priceChart",
                "data-points": "{chart.data().len()}",
                dangerous_inner_html: "{chart.svg()}",
            }
        }
    }
}
