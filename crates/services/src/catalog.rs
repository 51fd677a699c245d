//! Loading of the course content store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use wt2_core::model::{Course, CourseItem};

use crate::error::CatalogError;

/// The built-in IELTS Writing Task 2 course.
const EMBEDDED_COURSE: &str = include_str!("../content/course.json");

/// Where course content comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CourseSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl CourseSource {
    /// Loads and validates the course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, is not valid JSON, or
    /// fails course validation.
    pub fn load(&self) -> Result<Arc<Course>, CatalogError> {
        let course = match self {
            CourseSource::Embedded => embedded_course()?,
            CourseSource::File(path) => load_course_from_path(path)?,
        };
        tracing::info!(
            source = ?self,
            items = course.len(),
            quizzes = course.quiz_count(),
            "course loaded"
        );
        Ok(Arc::new(course))
    }
}

/// # Errors
///
/// Returns `CatalogError` if the embedded document is malformed.
pub fn embedded_course() -> Result<Course, CatalogError> {
    parse_course(EMBEDDED_COURSE)
}

/// # Errors
///
/// Returns `CatalogError::Io` when the file cannot be read, otherwise as `parse_course`.
pub fn load_course_from_path(path: &Path) -> Result<Course, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_course(&raw)
}

/// Parses a JSON array of tagged course items.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed JSON and `CatalogError::Invalid`
/// when the items do not form a valid course.
pub fn parse_course(raw: &str) -> Result<Course, CatalogError> {
    let items: Vec<CourseItem> = serde_json::from_str(raw)?;
    Ok(Course::new(items)?)
}
