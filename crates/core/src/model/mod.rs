mod course;
mod ids;
mod mode;
mod personality;

pub use course::{Course, CourseError, CourseItem, LessonItem, QuizItem, QuizOption};
pub use ids::{ItemId, OptionId};
pub use mode::{AppMode, ParseModeError, UserRole};
pub use personality::{ParsePersonalityError, Personality, Theme};
