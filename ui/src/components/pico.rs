//! Thin wrappers over Pico.css layout elements.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for the page.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card; `id` is forwarded so panels keep stable DOM ids.
#[component]
pub fn Card(#[props(default)] id: Option<String>, children: Element) -> Element {
    rsx! { article { id, {children} } }
}

/// A labelled figure in the detail panel, e.g. "Market cap".
///
/// The value element carries `value_id` so it can be found by id.
#[component]
pub fn Stat(label: &'static str, value_id: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            small { "{label}" }
            strong {
                id: value_id,
                "{value}"
            }
        }
    }
}
