use dioxus::prelude::{ReadableExt, WritableExt};
use services::{LaunchSettings, ProgressIntent};
use wt2_core::model::{AppMode, CourseItem, OptionId, Personality, QuizItem, UserRole};

use super::test_harness::{
    ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_settings,
};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_hero_and_ladder() {
    let harness = setup_view_harness(ViewKind::Landing);
    let html = harness.render();
    assert!(html.contains("Stop jumping. Start climbing."), "missing hero in {html}");
    assert!(html.contains("Band 9.0"), "missing summit band in {html}");
    assert!(html.contains("Band 5.5"), "missing base band in {html}");
    assert!(html.contains("Enter the platform"), "missing entry link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn workspace_view_smoke_starts_on_first_lesson() {
    let harness = setup_view_harness(ViewKind::Workspace);
    let html = harness.render();
    assert!(html.contains("Interactive Lesson"), "missing mode title in {html}");
    assert!(html.contains("Chapter 1 of 22"), "missing chapter label in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("in Your Writing"), "missing lesson title in {html}");
    assert!(html.contains("Learning Hub"), "missing sidebar entry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_lists_contents() {
    let harness = setup_view_harness(ViewKind::Learn);
    let html = harness.render();
    assert!(html.contains("Contents"), "missing toc heading in {html}");
    assert!(html.contains("01"), "missing first toc number in {html}");
    assert!(html.contains("22"), "missing last toc number in {html}");
    assert!(html.contains("Online Shopping"), "missing last toc label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_smoke_renders_quiz_and_marks_completion() {
    let mut harness = setup_view_harness(ViewKind::Learn);
    harness.send(ProgressIntent::JumpTo(2));
    let html = harness.render();
    assert!(html.contains("Is this valid?"), "missing quiz question in {html}");
    assert!(!html.contains("Completed"), "quiz should not be completed yet in {html}");

    harness.send(ProgressIntent::Answer { is_correct: true });
    assert_eq!(harness.with_progress(|state| state.score()), 10);
    let html = harness.render();
    assert!(html.contains("Completed"), "missing completed badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn workspace_view_smoke_tracks_score_across_modes() {
    let mut harness = setup_view_harness(ViewKind::Workspace);
    harness.send(ProgressIntent::JumpTo(2));
    harness.send(ProgressIntent::Answer { is_correct: true });
    harness.send(ProgressIntent::Open(AppMode::QuizArena));

    let html = harness.render();
    assert!(html.contains("Live Quiz"), "missing arena title in {html}");
    assert!(html.contains("Score: 10"), "score should survive mode switch in {html}");
    assert!(html.contains("Chapter 3 of 22"), "position should survive mode switch in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn arena_view_smoke_starts_a_fresh_round() {
    let mut harness = setup_view_harness(ViewKind::Arena);
    harness.send(ProgressIntent::JumpTo(3));
    let html = harness.render();
    assert!(html.contains("Round 4 of 22"), "missing round label in {html}");
    assert!(html.contains("00:20"), "missing arena countdown in {html}");
    assert!(html.contains("What is missing?"), "missing question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn arena_view_smoke_offers_continue_on_lessons() {
    let harness = setup_view_harness(ViewKind::Arena);
    let html = harness.render();
    assert!(html.contains("Continue"), "missing continue button in {html}");
    assert!(html.contains("Briefing"), "missing lesson tag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_full_clock() {
    let harness = setup_view_harness(ViewKind::Exam);
    let html = harness.render();
    assert!(html.contains("40:00"), "missing exam clock in {html}");
    assert!(html.contains("timer--calm"), "missing urgency class in {html}");
    assert!(html.contains("Exit exam"), "missing exit button in {html}");
    assert!(html.contains("Answered 0 of 4"), "missing answered counter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn workspace_view_smoke_exam_runs_without_sidebar() {
    let mut harness = setup_view_harness_with_settings(
        ViewKind::Workspace,
        LaunchSettings {
            start_mode: AppMode::ExamSimulation,
            ..LaunchSettings::default()
        },
    );
    let html = harness.render();
    assert!(html.contains("40:00"), "missing exam clock in {html}");
    assert!(!html.contains("Learning Hub"), "sidebar should be hidden in {html}");

    harness.send(ProgressIntent::Open(AppMode::Learn));
    let html = harness.render();
    assert!(html.contains("Interactive Lesson"), "exit should return to learn in {html}");
    assert!(html.contains("Learning Hub"), "sidebar should be back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_stats() {
    let harness = setup_view_harness(ViewKind::Dashboard);
    let html = harness.render();
    assert!(html.contains("Band Score"), "missing band card in {html}");
    assert!(html.contains("6.5"), "missing band value in {html}");
    assert!(html.contains("42%"), "missing completion value in {html}");
    assert!(html.contains("Coherence"), "missing chart bar in {html}");
    assert!(html.contains("6.0"), "missing coherence score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn workspace_view_smoke_teacher_role_forces_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Workspace);
    harness.send(ProgressIntent::Open(AppMode::Dashboard));
    assert_eq!(harness.with_progress(|state| state.role()), UserRole::Teacher);
    let html = harness.render();
    assert!(html.contains("Teacher Dashboard"), "missing dashboard title in {html}");

    harness.send(ProgressIntent::SetRole(UserRole::Student));
    let html = harness.render();
    assert!(html.contains("Interactive Lesson"), "student role should restore learn in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn workspace_view_smoke_switches_personality() {
    let mut harness = setup_view_harness(ViewKind::Workspace);
    harness.send(ProgressIntent::SetPersonality(Personality::Extrovert));
    assert_eq!(
        harness.with_progress(|state| state.theme().label),
        "Power Mode"
    );
    let html = harness.render();
    assert!(html.contains("personality personality--active"), "missing active pill in {html}");
    assert!(html.contains("Extrovert"), "missing personality name in {html}");
}

fn quiz_at(harness: &ViewHarness, index: usize) -> QuizItem {
    harness
        .with_progress(|state| state.course().get(index).and_then(CourseItem::as_quiz).cloned())
        .expect("quiz at index")
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn arena_timeout_advances_once_and_restarts_the_clock() {
    let mut harness = setup_view_harness(ViewKind::Arena);
    harness.send(ProgressIntent::JumpTo(2));

    harness.advance_secs(19).await;
    assert!(harness.render().contains("00:01"));

    harness.advance_secs(1).await;
    let html = harness.render();
    assert!(html.contains("s up!"), "missing timeout verdict in {html}");
    assert_eq!(harness.with_progress(|state| state.current_index()), 2);
    assert_eq!(harness.with_progress(|state| state.score()), 0);

    harness.advance_secs(3).await;
    assert_eq!(harness.with_progress(|state| state.current_index()), 3);
    let html = harness.render();
    assert!(html.contains("What is missing?"), "missing next question in {html}");
    assert!(html.contains("00:20"), "next round should start full in {html}");
    assert!(!html.contains("s up!"), "verdict should reset in {html}");

    harness.advance_secs(5).await;
    assert!(harness.render().contains("00:15"));
    assert_eq!(harness.with_progress(|state| state.current_index()), 3);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn arena_jump_between_quizzes_starts_a_new_round() {
    let mut harness = setup_view_harness(ViewKind::Arena);
    harness.send(ProgressIntent::JumpTo(2));
    harness.advance_secs(5).await;
    assert!(harness.render().contains("00:15"));

    harness.send(ProgressIntent::JumpTo(8));
    let html = harness.render();
    assert!(html.contains("00:20"), "jumped round should start full in {html}");

    harness.advance_secs(2).await;
    assert!(harness.render().contains("00:18"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn exam_clock_counts_down_every_second() {
    let mut harness = setup_view_harness(ViewKind::Exam);
    harness.advance_secs(5).await;
    let html = harness.render();
    assert!(html.contains("39:55"), "missing ticking clock in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn learn_view_gates_each_quiz_separately() {
    let mut harness = setup_view_harness(ViewKind::Learn);
    harness.send(ProgressIntent::JumpTo(2));
    let (index, vm) = harness.learn_item();
    assert_eq!(index, 2);

    let first = quiz_at(&harness, 2);
    let mut first_vm = vm;
    let answered = harness
        .dom
        .in_runtime(|| first_vm.write().select(&first, &OptionId::new("a")));
    assert_eq!(answered, Some(true));
    harness.send(ProgressIntent::Answer { is_correct: true });
    harness.send(ProgressIntent::Advance);

    let (index, vm) = harness.learn_item();
    assert_eq!(index, 3);
    let second = CourseItem::Quiz(quiz_at(&harness, 3));
    let (can_next, selected) = harness.dom.in_runtime(|| {
        let vm = vm.peek();
        (vm.can_advance(&second, true), vm.selected().cloned())
    });
    assert!(!can_next, "second quiz must be answered before moving on");
    assert!(selected.is_none());

    let html = harness.render();
    assert!(html.contains("What is missing?"), "missing second quiz in {html}");
    assert!(!html.contains("The language is accurate"), "stale feedback in {html}");
}
