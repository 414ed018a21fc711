// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod actions;
mod app_state;
mod chart;
pub mod compat;
mod components;
mod dashboard;
pub mod hooks;
mod screens;
mod selection;
#[cfg(test)]
mod test_support;
mod view_model;

use api::prefs::favorites::Favorites;
use api::prefs::widget_prefs::WidgetPrefs;
use app_state::AppState;
use components::pico::Container;
use dashboard::Dashboard;
use screens::dashboard::DashboardScreen;
use view_model::RowFilter;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Default)]
enum Screen {
    #[default]
    Markets,
    Favorites,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Markets => "Markets",
            Screen::Favorites => "Favorites",
        }
    }

    fn filter(&self) -> RowFilter {
        match self {
            Screen::Markets => RowFilter::All,
            Screen::Favorites => RowFilter::FavoritesOnly,
        }
    }
}

const ALL_SCREENS: [Screen; 2] = [Screen::Markets, Screen::Favorites];

/// The navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen() == screen { "active-tab" } else { "" },
                            "aria-current": if active_screen() == screen { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let css = r#"
    * { box-sizing: border-box; }

    body { margin: 0; }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
    }

    .dashboard {
        display: grid;
        grid-template-columns: minmax(260px, 1fr) 2fr;
        gap: 1rem;
        align-items: start;
    }

    @media (max-width: 768px) {
        .dashboard { grid-template-columns: 1fr; }
    }

    #coin-list {
        max-height: 80vh;
        overflow-y: auto;
    }

    .coin-item {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.5rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
        cursor: pointer;
    }

    .coin-item:hover, .coin-item.selected {
        background-color: var(--pico-card-sectioning-background-color);
    }

    .coin-info {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .coin-info img { width: 32px; height: 32px; }

    .coin-stats { text-align: right; }

    .favorite { cursor: pointer; font-size: 1.2rem; color: gold; }

    .stat small { display: block; color: var(--pico-muted-color); }

    .timeframe-selector { margin: 1rem 0; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{css}"
        }
        LoadedApp {}
    }
}

/// Owns the app-wide state and the periodic list refresh.
#[component]
fn LoadedApp() -> Element {
    let app_state = use_context_provider(|| {
        let prefs = WidgetPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    let currency = app_state.prefs.vs_currency;
    let dashboard = use_signal(|| {
        Dashboard::new(Favorites::load(compat::favorites_backend()), currency)
    });
    use_context_provider(|| dashboard);

    // Loads immediately. A restart cancels a request still in flight.
    let refresh_interval = app_state.prefs.refresh_interval;
    let list_refresh = use_resource(move || {
        let app = app_state.clone();
        async move { actions::refresh_coin_list(&app, dashboard).await }
    });

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = list_refresh;
        async move {
            actions::restart_every(refresh_interval, move || res.restart()).await;
        }
    });

    let active_screen = use_signal(Screen::default);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            h1 {
                                style: "margin: 0; font-size: 1.5rem;",
                                "Coin Watch"
                            }
                        }
                    }
                    ul {
                        li {
                            Tabs {
                                active_screen,
                            }
                        }
                    }
                }
            }
            DashboardScreen {
                filter: active_screen().filter(),
            }
        }
    }
}
