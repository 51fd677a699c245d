use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use dioxus::prelude::*;
use services::{DashboardService, ProgressIntent, ProgressState};
use wt2_core::model::Course;

pub trait UiApp: Send + Sync {
    fn course(&self) -> Arc<Course>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn initial_progress(&self) -> ProgressState;
    fn show_landing(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    course: Arc<Course>,
    dashboard: Arc<DashboardService>,
    initial_progress: ProgressState,
    show_landing_configured: bool,
    skip_landing_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let show_landing_configured = app.show_landing();
        Self {
            course: app.course(),
            dashboard: app.dashboard(),
            initial_progress: app.initial_progress(),
            show_landing_configured,
            skip_landing_once: Arc::new(AtomicBool::new(!show_landing_configured)),
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
    pub fn initial_progress(&self) -> ProgressState {
        self.initial_progress.clone()
    }

    /// True only the first time it is asked, and only when the landing page is disabled.
    #[must_use]
    pub fn take_skip_landing(&self) -> bool {
        self.skip_landing_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn show_landing_configured(&self) -> bool {
        self.show_landing_configured
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The session's progress state, provided by `App`.
#[must_use]
pub fn use_progress() -> Signal<ProgressState> {
    use_context::<Signal<ProgressState>>()
}

/// Funnels a view intent into the progress state.
#[must_use]
pub fn use_dispatch() -> Callback<ProgressIntent> {
    let mut progress = use_progress();
    use_callback(move |intent: ProgressIntent| {
        progress.write().apply(intent);
    })
}
