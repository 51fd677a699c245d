use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;

/// Band ladder from the summit down.
const BAND_LADDER: [&str; 8] = ["9.0", "8.5", "8.0", "7.5", "7.0", "6.5", "6.0", "5.5"];

const PILLARS: [(&str, &str); 3] = [
    (
        "Reasoning first",
        "Clear conclusions need visible reasons. Drills train you to show why, not just what.",
    ),
    (
        "Guided practice",
        "Plan, connect and compare against model answers, one lesson at a time.",
    ),
    (
        "Exam conditions",
        "A 40 minute simulator with the same pressure as test day.",
    ),
];

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_effect(move || {
        if ctx.take_skip_landing() {
            if let Some(failure) = navigator.replace(Route::Workspace {}) {
                tracing::warn!(?failure, "could not skip the landing page");
            }
        }
    });

    rsx! {
        div { class: "landing",
            section { class: "landing__hero",
                span { class: "landing__eyebrow", "IELTS Writing Task 2" }
                h1 { class: "landing__title", "Stop jumping. Start climbing." }
                p { class: "landing__lead",
                    "The Cambridge marking criteria, deconstructed into a step-by-step ladder."
                }
                Link { class: "btn btn-primary landing__enter", to: Route::Workspace {}, "Enter the platform" }
            }
            ol { class: "landing__ladder", aria_label: "Band ladder",
                for (i, band) in BAND_LADDER.iter().enumerate() {
                    li {
                        key: "{band}",
                        class: if i == 0 { "band band--summit" } else { "band" },
                        "Band {band}"
                    }
                }
            }
            section { class: "landing__pillars",
                h2 { "Why the climb works." }
                p { "Most students plateau at 6.5. Here is how we break the ceiling." }
                div { class: "landing__pillar-grid",
                    for (title, body) in PILLARS {
                        div { key: "{title}", class: "pillar",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}
