use std::sync::Arc;

use wt2_core::model::{AppMode, Course, Personality};

use crate::catalog::CourseSource;
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::progress::ProgressState;

/// Startup preferences resolved by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub course: CourseSource,
    pub personality: Personality,
    pub dark_mode: bool,
    pub start_mode: AppMode,
    pub show_landing: bool,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            course: CourseSource::Embedded,
            personality: Personality::default(),
            dark_mode: true,
            start_mode: AppMode::Learn,
            show_landing: true,
        }
    }
}

/// Assembles app-facing services from launch settings.
#[derive(Clone)]
pub struct AppServices {
    course: Arc<Course>,
    dashboard: Arc<DashboardService>,
    settings: LaunchSettings,
}

impl AppServices {
    /// # Errors
    ///
    /// Returns `AppServicesError` if the course cannot be loaded.
    pub fn new(settings: LaunchSettings) -> Result<Self, AppServicesError> {
        let course = settings.course.load()?;
        Ok(Self::with_course(course, settings))
    }

    #[must_use]
    pub fn with_course(course: Arc<Course>, settings: LaunchSettings) -> Self {
        Self {
            course,
            dashboard: Arc::new(DashboardService::new()),
            settings,
        }
    }

    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn show_landing(&self) -> bool {
        self.settings.show_landing
    }

    /// Fresh session state with the configured preferences applied.
    #[must_use]
    pub fn initial_progress(&self) -> ProgressState {
        let mut state = ProgressState::new(self.course());
        state.set_personality(self.settings.personality);
        if state.dark_mode() != self.settings.dark_mode {
            state.toggle_dark_mode();
        }
        state.apply(crate::ProgressIntent::Open(self.settings.start_mode));
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wt2_core::model::UserRole;

    #[test]
    fn initial_progress_applies_launch_settings() {
        let services = AppServices::new(LaunchSettings {
            personality: Personality::Introvert,
            dark_mode: false,
            start_mode: AppMode::QuizArena,
            ..LaunchSettings::default()
        })
        .expect("services");
        let state = services.initial_progress();
        assert_eq!(state.personality(), Personality::Introvert);
        assert!(!state.dark_mode());
        assert_eq!(state.displayed_mode(), AppMode::QuizArena);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn dashboard_start_mode_opens_teacher_role() {
        let services = AppServices::new(LaunchSettings {
            start_mode: AppMode::Dashboard,
            ..LaunchSettings::default()
        })
        .expect("services");
        let state = services.initial_progress();
        assert_eq!(state.role(), UserRole::Teacher);
        assert_eq!(state.mode(), AppMode::Learn);
    }
}
