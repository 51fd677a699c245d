#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use services::ProgressIntent;
use wt2_core::model::{CourseItem, LessonItem, QuizItem, Theme};

use crate::context::{use_dispatch, use_progress};
use crate::vm::{LearnVm, map_toc, sanitize_html};

#[component]
pub fn LearnView() -> Element {
    let progress = use_progress();
    let index = progress.read().current_index();

    rsx! {
        div { class: "learn",
            // A one-element keyed list: a new position remounts the item with fresh answer state.
            for position in std::iter::once(index) {
                LearnItem { key: "{position}", index: position }
            }
            TableOfContents {}
        }
    }
}

#[component]
fn LearnItem(index: usize) -> Element {
    let progress = use_progress();
    let dispatch = use_dispatch();
    let vm = use_signal(LearnVm::new);

    #[cfg(test)]
    use_hook(move || {
        if let Some(handles) = try_consume_context::<LearnTestHandles>() {
            handles.register(index, vm);
        }
    });

    let (item, has_prev, has_next, completed, theme) = {
        let state = progress.read();
        let item = state.current_item().clone();
        let completed = state.is_completed(item.id());
        (item, state.has_prev(), state.has_next(), completed, state.theme())
    };
    let can_next = vm.read().can_advance(&item, has_next);

    let on_key = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowRight if can_next => dispatch.call(ProgressIntent::Advance),
        Key::ArrowLeft if has_prev => dispatch.call(ProgressIntent::Retreat),
        _ => {}
    };

    rsx! {
        article { class: "learn-card", id: "learn-item-{index}", tabindex: "0", onkeydown: on_key,
            if completed {
                span { class: "badge badge--done", "Completed" }
            }
            match item {
                CourseItem::Lesson(lesson) => rsx! { LessonBody { lesson } },
                CourseItem::Quiz(quiz) => rsx! { QuizBody { quiz, vm, theme } },
            }
            footer { class: "learn-card__nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !has_prev,
                    onclick: move |_| dispatch.call(ProgressIntent::Retreat),
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    id: "learn-next",
                    r#type: "button",
                    disabled: !can_next,
                    onclick: move |_| dispatch.call(ProgressIntent::Advance),
                    "Next"
                }
            }
        }
    }
}

#[component]
pub(crate) fn LessonBody(lesson: LessonItem) -> Element {
    let html = sanitize_html(&lesson.content_html);

    rsx! {
        div { class: "lesson",
            h3 { class: "lesson__title", "{lesson.title}" }
            div { class: "lesson__body", dangerous_inner_html: "{html}" }
            if !lesson.citation.is_empty() {
                p { class: "lesson__citation", "Source: {lesson.citation}" }
            }
        }
    }
}

#[component]
fn QuizBody(quiz: QuizItem, vm: Signal<LearnVm>, theme: &'static Theme) -> Element {
    let dispatch = use_dispatch();
    let mut vm = vm;
    let (selected, feedback) = {
        let guard = vm.read();
        (guard.selected().cloned(), guard.feedback(&quiz, theme))
    };

    rsx! {
        div { class: "quiz",
            h3 { class: "quiz__question", "{quiz.question}" }
            div { class: "quiz__options",
                for option in quiz.options.iter() {
                    {
                        let option_id = option.id.clone();
                        let quiz_for_click = quiz.clone();
                        let is_selected = selected.as_ref() == Some(&option.id);
                        rsx! {
                            button {
                                key: "{option.id}",
                                class: if is_selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
                                r#type: "button",
                                disabled: selected.is_some(),
                                onclick: move |_| {
                                    let answered = vm.write().select(&quiz_for_click, &option_id);
                                    if let Some(is_correct) = answered {
                                        dispatch.call(ProgressIntent::Answer { is_correct });
                                    }
                                },
                                "{option.text}"
                            }
                        }
                    }
                }
            }
            if let Some(feedback) = feedback {
                div {
                    class: if feedback.is_correct { "feedback feedback--correct" } else { "feedback feedback--wrong" },
                    strong { "{feedback.intro} " }
                    span { "{feedback.text}" }
                }
            }
        }
    }
}

#[component]
fn TableOfContents() -> Element {
    let progress = use_progress();
    let dispatch = use_dispatch();
    let entries = map_toc(&progress.read());

    rsx! {
        nav { class: "toc", aria_label: "Course contents",
            h4 { "Contents" }
            ol {
                for entry in entries {
                    li { key: "{entry.index}",
                        button {
                            class: if entry.current { "toc__entry toc__entry--current" } else { "toc__entry" },
                            r#type: "button",
                            onclick: move |_| dispatch.call(ProgressIntent::JumpTo(entry.index)),
                            span { class: "toc__number", "{entry.number}" }
                            span { class: "toc__kind", "{entry.kind}" }
                            span { class: "toc__label", "{entry.label}" }
                            if entry.completed {
                                span { class: "toc__done", "✓" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LearnTestHandles {
    item: Rc<RefCell<Option<(usize, Signal<LearnVm>)>>>,
}

#[cfg(test)]
impl LearnTestHandles {
    pub(crate) fn register(&self, index: usize, vm: Signal<LearnVm>) {
        *self.item.borrow_mut() = Some((index, vm));
    }

    /// The most recently mounted item and its answer state.
    pub(crate) fn item(&self) -> (usize, Signal<LearnVm>) {
        (*self.item.borrow()).expect("learn item registered")
    }
}
