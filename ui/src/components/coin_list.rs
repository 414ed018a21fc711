use dioxus::prelude::*;

use crate::actions;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::dashboard::ListState;
use crate::hooks::use_dashboard::use_app_state;
use crate::hooks::use_dashboard::use_dashboard;
use crate::view_model::CoinRow;
use crate::view_model::RowFilter;
use crate::view_model::LIST_ERROR_MESSAGE;

/// The ranked list, or the subset of it the user starred.
#[component]
pub fn CoinList(filter: RowFilter) -> Element {
    let dashboard = use_dashboard();
    let state = dashboard.read();

    let body = match state.list() {
        ListState::Loading => rsx! {
            p { "Loading..." }
            progress {}
        },
        ListState::Failed => rsx! {
            p { "{LIST_ERROR_MESSAGE}" }
        },
        ListState::Loaded(_) => {
            let rows = state.rows(filter);
            if rows.is_empty() && filter == RowFilter::FavoritesOnly {
                rsx! {
                    EmptyState {
                        title: "No favorites yet".to_string(),
                        description: Some("Star a coin in the Markets tab to keep it here.".to_string()),
                        icon: Some("☆"),
                    }
                }
            } else {
                rsx! {
                    for row in rows {
                        CoinRowView {
                            key: "{row.id}",
                            row,
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Card {
            div {
                id: "coin-list",
                {body}
            }
        }
    }
}

#[component]
fn CoinRowView(row: CoinRow) -> Element {
    let app = use_app_state();
    let dashboard = use_dashboard();
    let selected = dashboard.read().selected() == Some(&row.id);

    let select_id = row.id.clone();
    let star_id = row.id.clone();

    rsx! {
        div {
            class: if selected { "coin-item selected" } else { "coin-item" },
            onclick: move |_| actions::select_asset(&app, dashboard, select_id.clone()),
            div {
                class: "coin-info",
                img {
                    src: "{row.image}",
                    alt: "{row.name}",
                }
                div {
                    strong { "{row.name}" }
                    br {}
                    "{row.price}"
                }
            }
            div {
                class: "coin-stats",
                span {
                    class: "favorite",
                    title: if row.favorite { "Remove from favorites" } else { "Add to favorites" },
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        actions::toggle_favorite(dashboard, &star_id);
                    },
                    if row.favorite { "★" } else { "☆" }
                }
                br {}
                span {
                    style: "color: {row.trend.color()};",
                    "{row.change}"
                }
            }
        }
    }
}
