use std::collections::BTreeMap;
use std::time::Duration;

use wt2_core::model::{Course, CourseItem, OptionId, QuizItem};
use wt2_core::{Countdown, UrgencyTier};

use crate::vm::time_fmt::format_clock;

/// Pause between submitting an answer and moving on.
pub const EXAM_ADVANCE_DELAY: Duration = Duration::from_secs(1);

/// State of one cell in the question navigation strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCell {
    Current,
    Answered,
    Open,
}

impl NavCell {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            NavCell::Current => "exam-nav__cell exam-nav__cell--current",
            NavCell::Answered => "exam-nav__cell exam-nav__cell--answered",
            NavCell::Open => "exam-nav__cell",
        }
    }
}

/// Exam-wide timer plus the answers given so far.
///
/// Once the timer reaches zero no further answers are accepted; navigation
/// stays available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamVm {
    clock: Countdown,
    answers: BTreeMap<usize, OptionId>,
}

impl Default for ExamVm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamVm {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Countdown::exam())
    }

    #[must_use]
    pub fn with_clock(clock: Countdown) -> Self {
        Self {
            clock,
            answers: BTreeMap::new(),
        }
    }

    /// One second elapsed. Returns true on the tick that expires the exam.
    pub fn tick(&mut self) -> bool {
        let expired = self.clock.tick();
        if expired {
            tracing::info!(answered = self.answers.len(), "exam time expired");
        }
        expired
    }

    /// Submits an answer for the item at `index`.
    ///
    /// Returns `None` when the exam is over, the item was already answered, or
    /// the option does not belong to the quiz.
    pub fn submit(&mut self, index: usize, quiz: &QuizItem, option: &OptionId) -> Option<bool> {
        if self.is_locked() || self.answers.contains_key(&index) {
            return None;
        }
        quiz.option(option)?;
        self.answers.insert(index, option.clone());
        Some(quiz.is_correct(option))
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.clock.is_expired()
    }

    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&OptionId> {
        self.answers.get(&index)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.clock.remaining()
    }

    #[must_use]
    pub fn clock_label(&self) -> String {
        format_clock(self.clock.remaining())
    }

    #[must_use]
    pub fn urgency(&self) -> UrgencyTier {
        self.clock.urgency()
    }

    /// Lessons count as answered once visited past; quizzes once submitted.
    #[must_use]
    pub fn nav_cells(&self, course: &Course, current: usize) -> Vec<NavCell> {
        course
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if index == current {
                    NavCell::Current
                } else if match item {
                    CourseItem::Quiz(_) => self.answers.contains_key(&index),
                    CourseItem::Lesson(_) => index < current,
                } {
                    NavCell::Answered
                } else {
                    NavCell::Open
                }
            })
            .collect()
    }
}
