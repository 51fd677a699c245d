use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, DashboardService, LaunchSettings, ProgressIntent, ProgressState};
use wt2_core::model::Course;

use crate::context::{UiApp, build_app_context, use_dispatch, use_progress};
use crate::views::learn::LearnTestHandles;
use crate::views::{ArenaView, DashboardView, ExamView, LandingView, LearnView, WorkspaceView};
use crate::vm::LearnVm;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn course(&self) -> Arc<Course> {
        self.services.course()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }

    fn initial_progress(&self) -> ProgressState {
        self.services.initial_progress()
    }

    fn show_landing(&self) -> bool {
        self.services.show_landing()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Workspace,
    Learn,
    Arena,
    Exam,
    Dashboard,
}

/// Handles registered by the harness root so tests can drive the session.
#[derive(Clone, Default)]
pub struct ProgressHandles {
    dispatch: Rc<RefCell<Option<Callback<ProgressIntent>>>>,
    progress: Rc<RefCell<Option<Signal<ProgressState>>>>,
}

impl ProgressHandles {
    fn register(&self, dispatch: Callback<ProgressIntent>, progress: Signal<ProgressState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.progress.borrow_mut() = Some(progress);
    }

    pub fn dispatch(&self) -> Callback<ProgressIntent> {
        (*self.dispatch.borrow()).expect("progress dispatch registered")
    }

    pub fn progress(&self) -> Signal<ProgressState> {
        (*self.progress.borrow()).expect("progress signal registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: ProgressHandles,
    learn_handles: LearnTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(ctx.initial_progress()));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.learn_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let handles = use_context::<ProgressHandles>();
    let dispatch = use_dispatch();
    let progress = use_progress();
    use_hook(move || handles.register(dispatch, progress));

    match view {
        ViewKind::Landing => rsx! { LandingView {} },
        ViewKind::Workspace => rsx! { WorkspaceView {} },
        ViewKind::Learn => rsx! { LearnView {} },
        ViewKind::Arena => rsx! { ArenaView {} },
        ViewKind::Exam => rsx! { ExamView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ProgressHandles,
    learn_handles: LearnTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Applies an intent through the registered dispatch callback.
    pub fn send(&mut self, intent: ProgressIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Moves the paused tokio clock one second at a time and lets view tasks run
    /// after every step.
    pub async fn advance_secs(&mut self, seconds: u64) {
        for _ in 0..seconds {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
            for _ in 0..4 {
                drive_dom(&mut self.dom);
            }
        }
    }

    /// Index and answer state of the Learn item mounted last.
    pub fn learn_item(&self) -> (usize, Signal<LearnVm>) {
        self.learn_handles.item()
    }

    pub fn with_progress<T>(&self, read: impl FnOnce(&ProgressState) -> T) -> T {
        let progress = self.handles.progress();
        self.dom.in_runtime(|| read(&progress.peek()))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_settings(view, LaunchSettings::default())
}

pub fn setup_view_harness_with_settings(view: ViewKind, settings: LaunchSettings) -> ViewHarness {
    let services = AppServices::new(settings).expect("embedded course loads");
    let app = Arc::new(TestApp { services });
    let handles = ProgressHandles::default();
    let learn_handles = LearnTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
            learn_handles: learn_handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        handles,
        learn_handles,
    };
    harness.rebuild();
    harness
}
