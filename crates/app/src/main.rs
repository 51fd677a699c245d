use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CourseSource, DashboardService, LaunchSettings, ProgressState};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use wt2_core::model::{AppMode, Course, Personality};

#[derive(Debug, Parser)]
#[command(name = "wt2")]
#[command(about = "IELTS Writing Task 2 learning platform")]
#[command(version)]
struct Cli {
    /// Learner personality: introvert, ambivert or extrovert
    #[arg(long, env = "WT2_PERSONALITY", default_value_t = Personality::Ambivert)]
    personality: Personality,

    /// Start in light mode instead of dark mode
    #[arg(long, env = "WT2_LIGHT")]
    light: bool,

    /// Mode opened on entry: learn, arena, exam or dashboard
    #[arg(long, env = "WT2_START_MODE", default_value_t = AppMode::Learn)]
    start_mode: AppMode,

    /// Course JSON file replacing the built-in content
    #[arg(long, env = "WT2_CONTENT", value_name = "FILE")]
    content: Option<PathBuf>,

    /// Open the workspace directly instead of the landing page
    #[arg(long)]
    skip_landing: bool,

    /// Tracing filter directive; overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

impl Cli {
    fn launch_settings(&self) -> LaunchSettings {
        LaunchSettings {
            course: self
                .content
                .clone()
                .map_or(CourseSource::Embedded, CourseSource::File),
            personality: self.personality,
            dark_mode: !self.light,
            start_mode: self.start_mode,
            show_landing: !self.skip_landing,
        }
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
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

fn init_tracing(directive: Option<&str>) {
    let filter = directive.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        EnvFilter::new,
    );

    // A second init (e.g. under a test harness) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let settings = cli.launch_settings();
    tracing::info!(
        personality = %settings.personality,
        start_mode = %settings.start_mode,
        dark_mode = settings.dark_mode,
        "starting"
    );

    let services = AppServices::new(settings)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Cullen.OS · Writing Task 2")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
