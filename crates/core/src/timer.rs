//! Second-resolution countdowns used by the timed views.

/// Visual urgency of a countdown. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTier {
    Calm,
    Warning,
    Critical,
}

impl UrgencyTier {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            UrgencyTier::Calm => "timer--calm",
            UrgencyTier::Warning => "timer--warning",
            UrgencyTier::Critical => "timer--critical",
        }
    }
}

/// Countdown that decrements once per tick and floors at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
}

impl Countdown {
    /// Full Exam-Simulation duration (40 minutes).
    pub const EXAM_SECS: u32 = 2400;
    /// Per-question limit in the Quiz Arena.
    pub const ARENA_SECS: u32 = 20;

    const WARNING_BELOW: u32 = 300;
    const CRITICAL_BELOW: u32 = 60;

    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self {
            initial: seconds,
            remaining: seconds,
        }
    }

    #[must_use]
    pub const fn exam() -> Self {
        Self::new(Self::EXAM_SECS)
    }

    #[must_use]
    pub const fn arena() -> Self {
        Self::new(Self::ARENA_SECS)
    }

    /// Advances one second.
    ///
    /// Returns true only on the tick that reaches zero; ticks after expiry are no-ops.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn initial(&self) -> u32 {
        self.initial
    }

    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of time left in `0.0..=1.0`, for progress bars.
    #[must_use]
    pub fn fraction_left(&self) -> f32 {
        if self.initial == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.remaining as f32 / self.initial as f32;
        fraction
    }

    #[must_use]
    pub fn urgency(&self) -> UrgencyTier {
        if self.remaining < Self::CRITICAL_BELOW {
            UrgencyTier::Critical
        } else if self.remaining < Self::WARNING_BELOW {
            UrgencyTier::Warning
        } else {
            UrgencyTier::Calm
        }
    }
}
