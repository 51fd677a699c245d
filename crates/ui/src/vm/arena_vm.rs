use std::time::Duration;

use wt2_core::Countdown;
use wt2_core::model::{OptionId, QuizItem};

/// Pause between an answer and the next question.
pub const ARENA_ADVANCE_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaSelection {
    Picked(OptionId),
    Timeout,
}

/// How an option tile should look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Open,
    Correct,
    Wrong,
    Faded,
}

impl TileState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            TileState::Open => "arena-tile",
            TileState::Correct => "arena-tile arena-tile--correct",
            TileState::Wrong => "arena-tile arena-tile--wrong",
            TileState::Faded => "arena-tile arena-tile--faded",
        }
    }
}

/// One timed question of the Quiz Arena.
///
/// The first selection, manual or timeout, locks the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaRound {
    countdown: Countdown,
    selection: Option<ArenaSelection>,
}

impl Default for ArenaRound {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaRound {
    #[must_use]
    pub fn new() -> Self {
        Self {
            countdown: Countdown::arena(),
            selection: None,
        }
    }

    /// One second elapsed.
    ///
    /// Returns `Some(false)` when time ran out before an answer, which must be
    /// reported like a wrong answer.
    pub fn tick(&mut self) -> Option<bool> {
        if self.is_locked() {
            return None;
        }
        if self.countdown.tick() {
            self.selection = Some(ArenaSelection::Timeout);
            return Some(false);
        }
        None
    }

    /// Returns the correctness of the pick, or `None` if the round is locked.
    pub fn select(&mut self, quiz: &QuizItem, option: &OptionId) -> Option<bool> {
        if self.is_locked() {
            return None;
        }
        quiz.option(option)?;
        self.selection = Some(ArenaSelection::Picked(option.clone()));
        Some(quiz.is_correct(option))
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.selection.is_some()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&ArenaSelection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn fraction_left(&self) -> f32 {
        self.countdown.fraction_left()
    }

    #[must_use]
    pub fn timed_out(&self) -> bool {
        matches!(self.selection, Some(ArenaSelection::Timeout))
    }

    #[must_use]
    pub fn tile_state(&self, quiz: &QuizItem, option: &OptionId) -> TileState {
        let Some(selection) = self.selection.as_ref() else {
            return TileState::Open;
        };
        if quiz.is_correct(option) {
            return TileState::Correct;
        }
        match selection {
            ArenaSelection::Picked(picked) if picked == option => TileState::Wrong,
            _ => TileState::Faded,
        }
    }

    /// Banner text once the round is locked.
    #[must_use]
    pub fn verdict(&self, quiz: &QuizItem) -> Option<&'static str> {
        match self.selection.as_ref()? {
            ArenaSelection::Timeout => Some("Time's up!"),
            ArenaSelection::Picked(id) if quiz.is_correct(id) => Some("Correct! +10"),
            ArenaSelection::Picked(_) => Some("Not quite"),
        }
    }
}
