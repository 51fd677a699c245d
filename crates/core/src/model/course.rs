use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ItemId, OptionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course must contain at least one item")]
    Empty,

    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    #[error("quiz {0} has no options")]
    NoOptions(ItemId),

    #[error("quiz {quiz} repeats option id {option}")]
    DuplicateOption { quiz: ItemId, option: OptionId },

    #[error("quiz {0} has no correct option")]
    NoCorrectOption(ItemId),
}

//
// ─── ITEMS ─────────────────────────────────────────────────────────────────────
//

/// A static, non-interactive unit of reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonItem {
    pub id: ItemId,
    pub title: String,
    /// Rich-text markup, treated as an opaque blob.
    pub content_html: String,
    pub citation: String,
}

/// One answer choice of a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: OptionId,
    pub text: String,
    pub correct: bool,
    pub feedback: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: ItemId,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl QuizItem {
    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == *id)
    }

    /// First option marked correct.
    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.correct)
    }

    /// Unknown option ids count as incorrect.
    #[must_use]
    pub fn is_correct(&self, id: &OptionId) -> bool {
        self.option(id).is_some_and(|option| option.correct)
    }
}

/// A course entry, either a lesson or a quiz.
///
/// Serialized with an internal `type` tag (`"lesson"` / `"quiz"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CourseItem {
    Lesson(LessonItem),
    Quiz(QuizItem),
}

impl CourseItem {
    #[must_use]
    pub fn id(&self) -> &ItemId {
        match self {
            CourseItem::Lesson(lesson) => &lesson.id,
            CourseItem::Quiz(quiz) => &quiz.id,
        }
    }

    /// Short label for navigation lists.
    #[must_use]
    pub fn heading(&self) -> &str {
        match self {
            CourseItem::Lesson(lesson) => &lesson.title,
            CourseItem::Quiz(quiz) => &quiz.question,
        }
    }

    #[must_use]
    pub fn is_quiz(&self) -> bool {
        matches!(self, CourseItem::Quiz(_))
    }

    #[must_use]
    pub fn as_quiz(&self) -> Option<&QuizItem> {
        match self {
            CourseItem::Quiz(quiz) => Some(quiz),
            CourseItem::Lesson(_) => None,
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// The ordered, immutable content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    items: Vec<CourseItem>,
}

impl Course {
    /// Builds a course after checking ids and quiz answers.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` when the list is empty, item ids repeat, or a quiz
    /// has no options, repeated option ids, or no correct option.
    pub fn new(items: Vec<CourseItem>) -> Result<Self, CourseError> {
        if items.is_empty() {
            return Err(CourseError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CourseError::DuplicateItem(item.id().clone()));
            }
            if let CourseItem::Quiz(quiz) = item {
                validate_quiz(quiz)?;
            }
        }

        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a validated course.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CourseItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn items(&self) -> &[CourseItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_quiz()).count()
    }
}

fn validate_quiz(quiz: &QuizItem) -> Result<(), CourseError> {
    if quiz.options.is_empty() {
        return Err(CourseError::NoOptions(quiz.id.clone()));
    }

    let mut seen = HashSet::with_capacity(quiz.options.len());
    for option in &quiz.options {
        if !seen.insert(&option.id) {
            return Err(CourseError::DuplicateOption {
                quiz: quiz.id.clone(),
                option: option.id.clone(),
            });
        }
    }

    if quiz.correct_option().is_none() {
        return Err(CourseError::NoCorrectOption(quiz.id.clone()));
    }

    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
