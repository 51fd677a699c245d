use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_context_provider(|| Signal::new(ctx.initial_progress()));

    let root_class = {
        let state = progress.read();
        let dark = if state.dark_mode() { " dark" } else { "" };
        format!("app-root theme-{}{dark}", state.theme().id)
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Cullen.OS · Writing Task 2" }

        // Theme and dark-mode classes hang off the single root container.
        div { class: "{root_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
