mod arena_vm;
mod course_vm;
mod dashboard_vm;
mod exam_vm;
mod html_vm;
mod learn_vm;
mod time_fmt;

pub use arena_vm::{ARENA_ADVANCE_DELAY, ArenaRound, ArenaSelection, TileState};
pub use course_vm::{TocEntryVm, map_toc};
pub use dashboard_vm::{BarVm, DashboardVm, StatCardVm, map_dashboard};
pub use exam_vm::{EXAM_ADVANCE_DELAY, ExamVm, NavCell};
pub use html_vm::sanitize_html;
pub use learn_vm::{FeedbackVm, LearnVm};
pub use time_fmt::format_clock;
