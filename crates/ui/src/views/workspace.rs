use dioxus::prelude::*;
use dioxus_router::Link;

use services::ProgressIntent;
use wt2_core::model::{AppMode, Personality};

use crate::context::{use_dispatch, use_progress};
use crate::routes::Route;

use super::{ArenaView, DashboardView, ExamView, LearnView};

const NAV_ENTRIES: [(AppMode, &str); 4] = [
    (AppMode::Learn, "Learning Hub"),
    (AppMode::QuizArena, "Quiz Arena"),
    (AppMode::ExamSimulation, "Exam Simulator"),
    (AppMode::Dashboard, "Analytics"),
];

/// Shell around the active view. The exam runs full-screen without it.
#[component]
pub fn WorkspaceView() -> Element {
    let progress = use_progress();
    let (displayed, chapter, score) = {
        let state = progress.read();
        (state.displayed_mode(), state.chapter_label(), state.score())
    };

    if displayed == AppMode::ExamSimulation {
        return rsx! { ExamView {} };
    }

    rsx! {
        div { class: "workspace",
            Sidebar {}
            main { class: "workspace__main",
                header { class: "workspace__header",
                    div { class: "workspace__heading",
                        h2 { "{displayed.title()}" }
                        span { class: "workspace__chapter", "{chapter}" }
                    }
                    span { class: "score-badge", "Score: {score}" }
                }
                div { class: "workspace__content",
                    match displayed {
                        AppMode::Learn => rsx! { LearnView {} },
                        AppMode::QuizArena => rsx! { ArenaView {} },
                        AppMode::Dashboard => rsx! { DashboardView {} },
                        AppMode::ExamSimulation => rsx! {},
                    }
                }
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let progress = use_progress();
    let dispatch = use_dispatch();
    let (displayed, personality, dark_mode, role) = {
        let state = progress.read();
        (
            state.displayed_mode(),
            state.personality(),
            state.dark_mode(),
            state.role(),
        )
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                h1 { "Cullen.OS" }
                span { "WT2 Platform" }
            }
            nav { class: "sidebar__nav",
                for (mode, label) in NAV_ENTRIES {
                    NavPill {
                        key: "{mode}",
                        label,
                        mode,
                        active: displayed == mode,
                        on_intent: dispatch,
                    }
                }
            }
            div { class: "sidebar__user",
                div { class: "sidebar__who",
                    span { class: "sidebar__role", "{role.label()}" }
                    span { class: "sidebar__personality", "{personality}" }
                }
                div { class: "personality-picker", role: "radiogroup",
                    for option in Personality::ALL {
                        button {
                            key: "{option}",
                            class: if option == personality { "personality personality--active" } else { "personality" },
                            r#type: "button",
                            title: "{option.theme().description}",
                            onclick: move |_| dispatch.call(ProgressIntent::SetPersonality(option)),
                            "{option.theme().label}"
                        }
                    }
                }
                button {
                    class: "sidebar__theme-toggle",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ProgressIntent::ToggleDarkMode),
                    if dark_mode { "Light mode" } else { "Dark mode" }
                }
                Link { class: "sidebar__home", to: Route::Landing {}, "Home" }
            }
        }
    }
}

#[component]
fn NavPill(
    label: &'static str,
    mode: AppMode,
    active: bool,
    on_intent: EventHandler<ProgressIntent>,
) -> Element {
    rsx! {
        button {
            class: if active { "nav-pill nav-pill--active" } else { "nav-pill" },
            r#type: "button",
            onclick: move |_| on_intent.call(ProgressIntent::Open(mode)),
            span { class: "nav-pill__label", "{label}" }
            span { class: "nav-pill__hint", if active { "Active now" } else { "Tap to open" } }
        }
    }
}
