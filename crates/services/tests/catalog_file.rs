use std::io::Write;

use services::catalog::{CourseSource, load_course_from_path};
use services::CatalogError;

#[test]
fn course_loads_from_override_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"type": "quiz", "id": "q1", "question": "Valid?", "options": [
            {{"id": "a", "text": "Yes", "correct": true, "feedback": "Right"}},
            {{"id": "b", "text": "No", "correct": false, "feedback": "Wrong"}}
        ]}}]"#
    )
    .expect("write course");

    let course = CourseSource::File(file.path().to_path_buf())
        .load()
        .expect("course");
    assert_eq!(course.len(), 1);
    assert_eq!(course.quiz_count(), 1);
}

#[test]
fn override_file_with_untagged_item_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"[{{"id": "l1", "title": "No type"}}]"#).expect("write course");

    let err = load_course_from_path(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}
