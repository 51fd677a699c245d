use std::time::Duration;

use dioxus::prelude::*;

use services::ProgressIntent;
use wt2_core::model::{AppMode, CourseItem};

use crate::context::{use_dispatch, use_progress};
use crate::vm::{EXAM_ADVANCE_DELAY, ExamVm};

use super::learn::LessonBody;

/// Full-screen exam. The clock runs for as long as the view is mounted.
#[component]
pub fn ExamView() -> Element {
    let progress = use_progress();
    let dispatch = use_dispatch();
    let mut exam = use_signal(ExamVm::new);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let expired = exam.write().tick();
            if expired || exam.peek().is_locked() {
                break;
            }
        }
    });

    let (index, item, count, quiz_total, has_prev, has_next, course) = {
        let state = progress.read();
        (
            state.current_index(),
            state.current_item().clone(),
            state.item_count(),
            state.course().quiz_count(),
            state.has_prev(),
            state.has_next(),
            state.course().clone(),
        )
    };
    let (clock, urgency, locked, answered, chosen, cells) = {
        let current = exam.read();
        (
            current.clock_label(),
            current.urgency(),
            current.is_locked(),
            current.answered_count(),
            current.answer_for(index).cloned(),
            current.nav_cells(&course, index),
        )
    };

    rsx! {
        div { class: "exam",
            header { class: "exam__header",
                div { class: "exam__title",
                    h2 { "{AppMode::ExamSimulation.title()}" }
                    span { class: "exam__answered", "Answered {answered} of {quiz_total}" }
                }
                span { class: "exam-timer {urgency.css_class()}", id: "exam-timer", "{clock}" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| dispatch.call(ProgressIntent::Open(AppMode::Learn)),
                    "Exit exam"
                }
            }
            if locked {
                div { class: "exam__locked", role: "alert",
                    "Time is up. Answers are locked, but you can still review every item."
                }
            }
            main { class: "exam__body",
                span { class: "exam__position", "Item {index + 1} of {count}" }
                match item {
                    CourseItem::Lesson(lesson) => rsx! { LessonBody { lesson } },
                    CourseItem::Quiz(quiz) => rsx! {
                        div { class: "quiz",
                            h3 { class: "quiz__question", "{quiz.question}" }
                            div { class: "quiz__options",
                                for option in quiz.options.iter() {
                                    {
                                        let option_id = option.id.clone();
                                        let quiz_for_click = quiz.clone();
                                        let is_chosen = chosen.as_ref() == Some(&option.id);
                                        rsx! {
                                            button {
                                                key: "{option.id}",
                                                class: if is_chosen { "quiz-option quiz-option--selected" } else { "quiz-option" },
                                                r#type: "button",
                                                disabled: locked || chosen.is_some(),
                                                onclick: move |_| {
                                                    let submitted = exam.write().submit(index, &quiz_for_click, &option_id);
                                                    if let Some(is_correct) = submitted {
                                                        dispatch.call(ProgressIntent::Answer { is_correct });
                                                        let ticket = progress.peek().advance_ticket();
                                                        spawn(async move {
                                                            tokio::time::sleep(EXAM_ADVANCE_DELAY).await;
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
                        }
                    },
                }
            }
            nav { class: "exam-nav", aria_label: "Exam items",
                for (cell_index, cell) in cells.into_iter().enumerate() {
                    button {
                        key: "{cell_index}",
                        class: cell.css_class(),
                        r#type: "button",
                        onclick: move |_| dispatch.call(ProgressIntent::JumpTo(cell_index)),
                        "{cell_index + 1}"
                    }
                }
            }
            footer { class: "exam__footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !has_prev,
                    onclick: move |_| dispatch.call(ProgressIntent::Retreat),
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !has_next,
                    onclick: move |_| dispatch.call(ProgressIntent::Advance),
                    "Next"
                }
            }
        }
    }
}
