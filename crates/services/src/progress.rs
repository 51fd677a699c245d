use std::collections::BTreeSet;
use std::sync::Arc;

use wt2_core::model::{AppMode, Course, CourseItem, ItemId, Personality, Theme, UserRole};

/// Points awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

/// Everything a view can ask the progress state to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressIntent {
    Advance,
    Retreat,
    JumpTo(usize),
    Answer { is_correct: bool },
    /// Delayed advance scheduled by a timed view.
    Redeem(AdvanceTicket),
    SetMode(AppMode),
    SetRole(UserRole),
    /// Sidebar selection: `Dashboard` switches to the teacher role, every other
    /// mode switches back to the student role with that mode.
    Open(AppMode),
    SetPersonality(Personality),
    ToggleDarkMode,
}

/// Permission to advance, valid only while the state has not moved since it
/// was issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTicket {
    epoch: u64,
    index: usize,
}

impl AdvanceTicket {
    /// Index the ticket was issued for.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Single source of truth for the learner's session.
///
/// Holds position, score, completed items, presentation preferences and the
/// active role/mode. Lives for one app session and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    course: Arc<Course>,
    current_index: usize,
    score: u32,
    completed_ids: BTreeSet<ItemId>,
    dark_mode: bool,
    personality: Personality,
    role: UserRole,
    mode: AppMode,
    epoch: u64,
}

impl ProgressState {
    #[must_use]
    pub fn new(course: Arc<Course>) -> Self {
        Self {
            course,
            current_index: 0,
            score: 0,
            completed_ids: BTreeSet::new(),
            dark_mode: true,
            personality: Personality::default(),
            role: UserRole::Student,
            mode: AppMode::Learn,
            epoch: 0,
        }
    }

    pub fn apply(&mut self, intent: ProgressIntent) {
        match intent {
            ProgressIntent::Advance => self.advance(),
            ProgressIntent::Retreat => self.retreat(),
            ProgressIntent::JumpTo(index) => self.jump_to(index),
            ProgressIntent::Answer { is_correct } => self.record_answer(is_correct),
            ProgressIntent::Redeem(ticket) => {
                self.redeem(ticket);
            }
            ProgressIntent::SetMode(mode) => self.set_mode(mode),
            ProgressIntent::SetRole(role) => self.set_role(role),
            ProgressIntent::Open(AppMode::Dashboard) => self.set_role(UserRole::Teacher),
            ProgressIntent::Open(mode) => {
                self.set_role(UserRole::Student);
                self.set_mode(mode);
            }
            ProgressIntent::SetPersonality(personality) => self.set_personality(personality),
            ProgressIntent::ToggleDarkMode => self.toggle_dark_mode(),
        }
    }

    // ─── Navigation ───────────────────────────────────────────────────────────

    /// Moves to the next item; no-op on the last one.
    pub fn advance(&mut self) {
        if self.has_next() {
            self.move_to(self.current_index + 1);
        }
    }

    /// Moves to the previous item; no-op on the first one.
    pub fn retreat(&mut self) {
        if self.has_prev() {
            self.move_to(self.current_index - 1);
        }
    }

    /// Out-of-range indices are dropped silently.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.course.len() {
            self.move_to(index);
        } else {
            tracing::debug!(index, len = self.course.len(), "jump out of range ignored");
        }
    }

    fn move_to(&mut self, index: usize) {
        if index == self.current_index {
            return;
        }
        tracing::debug!(from = self.current_index, to = index, "position changed");
        self.current_index = index;
        self.bump_epoch();
    }

    // ─── Answers ──────────────────────────────────────────────────────────────

    /// Records an answer to the current item.
    ///
    /// A correct answer scores every time, but the item is listed as completed once.
    pub fn record_answer(&mut self, is_correct: bool) {
        if !is_correct {
            tracing::debug!(index = self.current_index, "incorrect answer recorded");
            return;
        }
        self.score = self.score.saturating_add(POINTS_PER_CORRECT);
        let id = self.current_item().id().clone();
        tracing::debug!(item = %id, score = self.score, "correct answer recorded");
        self.completed_ids.insert(id);
    }

    // ─── Scheduled advances ───────────────────────────────────────────────────

    #[must_use]
    pub fn advance_ticket(&self) -> AdvanceTicket {
        AdvanceTicket {
            epoch: self.epoch,
            index: self.current_index,
        }
    }

    /// Advances if nothing moved since `ticket` was issued.
    ///
    /// A ticket is single-use: redeeming it invalidates every outstanding ticket.
    pub fn redeem(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(
                ticket_index = ticket.index,
                current = self.current_index,
                "stale advance ticket dropped"
            );
            return false;
        }
        self.bump_epoch();
        self.advance();
        true
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    // ─── Mode / role / presentation ───────────────────────────────────────────

    pub fn set_mode(&mut self, mode: AppMode) {
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "mode changed");
            self.mode = mode;
            self.bump_epoch();
        }
    }

    pub fn set_role(&mut self, role: UserRole) {
        if self.role != role {
            tracing::debug!(role = role.label(), "role changed");
            self.role = role;
            self.bump_epoch();
        }
    }

    pub fn set_personality(&mut self, personality: Personality) {
        self.personality = personality;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    // ─── Reads ────────────────────────────────────────────────────────────────

    /// The view that should be on screen; teachers always see the dashboard.
    #[must_use]
    pub fn displayed_mode(&self) -> AppMode {
        match self.role {
            UserRole::Teacher => AppMode::Dashboard,
            UserRole::Student => self.mode,
        }
    }

    #[must_use]
    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_item(&self) -> &CourseItem {
        &self.course.items()[self.current_index]
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.course.len()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.course.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn completed_ids(&self) -> &BTreeSet<ItemId> {
        &self.completed_ids
    }

    #[must_use]
    pub fn is_completed(&self, id: &ItemId) -> bool {
        self.completed_ids.contains(id)
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn personality(&self) -> Personality {
        self.personality
    }

    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        self.personality.theme()
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Stored mode, which may differ from `displayed_mode` for teachers.
    #[must_use]
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    #[must_use]
    pub fn chapter_label(&self) -> String {
        format!("Chapter {} of {}", self.current_index + 1, self.course.len())
    }
}
