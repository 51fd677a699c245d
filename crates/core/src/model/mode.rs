use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The view a learner can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppMode {
    #[default]
    Learn,
    QuizArena,
    ExamSimulation,
    Dashboard,
}

impl AppMode {
    pub const ALL: [AppMode; 4] = [
        AppMode::Learn,
        AppMode::QuizArena,
        AppMode::ExamSimulation,
        AppMode::Dashboard,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            AppMode::Learn => "Interactive Lesson",
            AppMode::QuizArena => "Live Quiz",
            AppMode::ExamSimulation => "Exam Simulation",
            AppMode::Dashboard => "Teacher Dashboard",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            AppMode::Learn => "learn",
            AppMode::QuizArena => "arena",
            AppMode::ExamSimulation => "exam",
            AppMode::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown mode: {0} (expected learn, arena, exam or dashboard)")]
pub struct ParseModeError(String);

impl FromStr for AppMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        AppMode::ALL
            .into_iter()
            .find(|mode| mode.slug() == normalized)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// Who is looking at the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
}

impl UserRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
        }
    }
}
