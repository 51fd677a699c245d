mod arena;
mod dashboard;
mod exam;
mod landing;
mod learn;
mod workspace;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use arena::ArenaView;
pub use dashboard::DashboardView;
pub use exam::ExamView;
pub use landing::LandingView;
pub use learn::LearnView;
pub use workspace::WorkspaceView;
