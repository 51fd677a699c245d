use wt2_core::model::{CourseItem, OptionId, QuizItem, Theme};

/// Feedback line shown after a quiz answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub intro: &'static str,
    pub text: String,
}

/// Per-item state of the Learn view. Reset whenever the item changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LearnVm {
    selected: Option<OptionId>,
    feedback_shown: bool,
}

impl LearnVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks an option and returns whether it was correct.
    ///
    /// Returns `None` while an answer is already on screen.
    pub fn select(&mut self, quiz: &QuizItem, option: &OptionId) -> Option<bool> {
        if self.selected.is_some() {
            return None;
        }
        quiz.option(option)?;
        self.selected = Some(option.clone());
        self.feedback_shown = true;
        Some(quiz.is_correct(option))
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OptionId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn feedback_shown(&self) -> bool {
        self.feedback_shown
    }

    /// Quizzes must be answered once before moving past them.
    #[must_use]
    pub fn can_advance(&self, item: &CourseItem, has_next: bool) -> bool {
        has_next
            && match item {
                CourseItem::Lesson(_) => true,
                CourseItem::Quiz(_) => self.feedback_shown,
            }
    }

    #[must_use]
    pub fn feedback(&self, quiz: &QuizItem, theme: &Theme) -> Option<FeedbackVm> {
        let option = quiz.option(self.selected.as_ref()?)?;
        // Options without their own feedback borrow the explanation of the right answer.
        let text = if option.feedback.is_empty() {
            quiz.correct_option()
                .map(|correct| correct.feedback.clone())
                .unwrap_or_default()
        } else {
            option.feedback.clone()
        };
        Some(FeedbackVm {
            is_correct: option.correct,
            intro: theme.feedback_intro,
            text,
        })
    }
}
