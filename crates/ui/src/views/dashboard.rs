use dioxus::prelude::*;

use services::ProgressIntent;
use wt2_core::model::UserRole;

use crate::context::{AppContext, use_dispatch, use_progress};
use crate::vm::map_dashboard;

/// Teacher overview with fixed class statistics.
#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();
    let dispatch = use_dispatch();
    let (theme, score, completed, total) = {
        let state = progress.read();
        (
            state.theme(),
            state.score(),
            state.completed_ids().len(),
            state.item_count(),
        )
    };
    let vm = map_dashboard(&ctx.dashboard().snapshot(), theme);

    rsx! {
        section { class: "dashboard",
            div { class: "dashboard__cards",
                for card in vm.cards {
                    div { key: "{card.title}", class: "stat-card",
                        span { class: "stat-title", "{card.title}" }
                        span { class: "{card.value_class}", "{card.value}" }
                        span { class: "stat-subtitle", "{card.subtitle}" }
                    }
                }
            }
            div { class: "band-chart",
                h3 { "Class band breakdown" }
                div { class: "band-chart__plot",
                    div { class: "band-chart__axis",
                        for label in vm.axis {
                            span { key: "{label}", "{label}" }
                        }
                    }
                    div { class: "band-chart__bars",
                        for bar in vm.bars {
                            div { key: "{bar.label}", class: "band-chart__column",
                                span { class: "band-chart__score", "{bar.score_label}" }
                                div { class: "band-chart__bar", style: "height: {bar.height_pct}%" }
                                span { class: "band-chart__label", "{bar.label}" }
                            }
                        }
                    }
                }
            }
            div { class: "dashboard__session",
                span { "This session: {score} points, {completed} of {total} items completed" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ProgressIntent::SetRole(UserRole::Student)),
                    "Back to student view"
                }
            }
        }
    }
}
