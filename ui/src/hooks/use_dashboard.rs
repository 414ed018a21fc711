use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::dashboard::Dashboard;

/// The dashboard store provided by `LoadedApp`.
pub fn use_dashboard() -> Signal<Dashboard> {
    use_context::<Signal<Dashboard>>()
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
