use std::time::Duration;

use dioxus::prelude::*;

use services::ProgressIntent;
use wt2_core::model::{CourseItem, LessonItem, QuizItem};

use crate::context::{use_dispatch, use_progress};
use crate::vm::{ARENA_ADVANCE_DELAY, ArenaRound, format_clock};

#[component]
pub fn ArenaView() -> Element {
    let progress = use_progress();
    let (index, count, score) = {
        let state = progress.read();
        (state.current_index(), state.item_count(), state.score())
    };

    rsx! {
        section { class: "arena",
            header { class: "arena__header",
                span { class: "arena__progress", "Round {index + 1} of {count}" }
                span { class: "arena__score", "{score} pts" }
            }
            // A one-element keyed list: a new position remounts the stage, and with it
            // the round and its timer task.
            for position in std::iter::once(index) {
                ArenaStage { key: "{position}", index: position }
            }
        }
    }
}

#[component]
fn ArenaStage(index: usize) -> Element {
    let progress = use_progress();
    let item = {
        let state = progress.read();
        state.course().get(index).unwrap_or(state.current_item()).clone()
    };

    match item {
        CourseItem::Lesson(lesson) => rsx! { ArenaBreak { lesson } },
        CourseItem::Quiz(quiz) => rsx! { ArenaQuestion { quiz } },
    }
}

/// Lessons are not timed in the arena; they are shown as a short breather.
#[component]
fn ArenaBreak(lesson: LessonItem) -> Element {
    let progress = use_progress();
    let dispatch = use_dispatch();
    let has_next = progress.read().has_next();

    rsx! {
        div { class: "arena-break",
            span { class: "arena-break__tag", "Briefing" }
            h3 { "{lesson.title}" }
            p { class: "arena-break__hint", "Review the lesson in Learn mode, or keep the streak going." }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !has_next,
                onclick: move |_| dispatch.call(ProgressIntent::Advance),
                "Continue"
            }
        }
    }
}

#[component]
fn ArenaQuestion(quiz: QuizItem) -> Element {
    let progress = use_progress();
    let dispatch = use_dispatch();
    let mut round = use_signal(ArenaRound::new);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            if round.peek().is_locked() {
                break;
            }
            let timed_out = round.write().tick() == Some(false);
            if timed_out {
                dispatch.call(ProgressIntent::Answer { is_correct: false });
                let ticket = progress.peek().advance_ticket();
                tokio::time::sleep(ARENA_ADVANCE_DELAY).await;
                dispatch.call(ProgressIntent::Redeem(ticket));
                break;
            }
        }
    });

    let (remaining, fraction, locked, verdict, tiles) = {
        let current = round.read();
        let tiles: Vec<_> = quiz
            .options
            .iter()
            .map(|option| (option.clone(), current.tile_state(&quiz, &option.id)))
            .collect();
        (
            current.remaining(),
            current.fraction_left(),
            current.is_locked(),
            current.verdict(&quiz),
            tiles,
        )
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bar_pct = (fraction * 100.0).round() as u32;
    let has_next = progress.read().has_next();

    rsx! {
        div { class: "arena-question",
            div { class: "arena-timer",
                div { class: "arena-timer__bar", style: "width: {bar_pct}%" }
                span { class: "arena-timer__label", "{format_clock(remaining)}" }
            }
            h3 { class: "arena-question__text", "{quiz.question}" }
            div { class: "arena-grid",
                for (option, tile) in tiles {
                    {
                        let option_id = option.id.clone();
                        let quiz_for_click = quiz.clone();
                        rsx! {
                            button {
                                key: "{option.id}",
                                class: tile.css_class(),
                                r#type: "button",
                                disabled: locked,
                                onclick: move |_| {
                                    let picked = round.write().select(&quiz_for_click, &option_id);
                                    if let Some(is_correct) = picked {
                                        dispatch.call(ProgressIntent::Answer { is_correct });
                                        let ticket = progress.peek().advance_ticket();
                                        spawn(async move {
                                            tokio::time::sleep(ARENA_ADVANCE_DELAY).await;
                                            dispatch.call(ProgressIntent::Redeem(ticket));
                                        });
                                    }
                                },
                                "{option.text}"
                            }
                        }
                    }
                }
            }
            if let Some(verdict) = verdict {
                div { class: "arena-verdict",
                    strong { "{verdict}" }
                    if has_next {
                        span { class: "arena-verdict__next", "Next question coming up..." }
                    } else {
                        span { class: "arena-verdict__next", "That was the last round." }
                    }
                }
            }
        }
    }
}
