use services::ProgressState;
use wt2_core::model::CourseItem;

/// One row of the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntryVm {
    pub index: usize,
    pub number: String,
    pub label: String,
    pub kind: &'static str,
    pub completed: bool,
    pub current: bool,
}

#[must_use]
pub fn map_toc(state: &ProgressState) -> Vec<TocEntryVm> {
    state
        .course()
        .iter()
        .enumerate()
        .map(|(index, item)| TocEntryVm {
            index,
            number: format!("{:02}", index + 1),
            label: item.heading().to_string(),
            kind: match item {
                CourseItem::Lesson(_) => "Lesson",
                CourseItem::Quiz(_) => "Quiz",
            },
            completed: state.is_completed(item.id()),
            current: index == state.current_index(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{AppServices, LaunchSettings, ProgressIntent};

    #[test]
    fn toc_marks_current_and_completed_items() {
        let services = AppServices::new(LaunchSettings::default()).unwrap();
        let mut state = services.initial_progress();
        let quiz_index = state
            .course()
            .iter()
            .position(CourseItem::is_quiz)
            .expect("embedded course has a quiz");
        state.apply(ProgressIntent::JumpTo(quiz_index));
        state.apply(ProgressIntent::Answer { is_correct: true });
        state.apply(ProgressIntent::JumpTo(0));

        let toc = map_toc(&state);
        assert_eq!(toc.len(), state.item_count());
        assert!(toc[0].current);
        assert_eq!(toc[0].number, "01");
        assert!(toc[quiz_index].completed);
        assert_eq!(toc[quiz_index].kind, "Quiz");
        assert_eq!(toc.iter().filter(|entry| entry.completed).count(), 1);
    }
}
