use dioxus::prelude::*;

/// Placeholder shown where content will appear once the user acts, e.g.
/// the detail panel before any row was clicked or an empty favorites tab.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default)] icon: Option<&'static str>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                margin: 1rem 0;
            ",

            if let Some(icon) = icon {
                div {
                    style: "font-size: 3rem; margin-bottom: 1rem; opacity: 0.8;",
                    "{icon}"
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{title}"
            }

            if let Some(desc) = description {
                p {
                    style: "max-width: 400px; margin: 0 auto;",
                    "{desc}"
                }
            }
        }
    }
}
