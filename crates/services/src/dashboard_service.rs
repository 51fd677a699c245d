//! Teacher analytics backed by fixed mock statistics.

/// Highest IELTS band, the upper bound of the chart axis.
pub const BAND_MAX: f32 = 9.0;

/// One bar of the band-score breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStat {
    pub name: &'static str,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    /// Follows the active theme accent.
    Accent,
    Purple,
    Orange,
}

/// Headline number shown above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub tone: StatTone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub cards: Vec<StatCard>,
    pub breakdown: Vec<BandStat>,
    pub scale_max: f32,
}

const MOCK_CARDS: [StatCard; 3] = [
    StatCard {
        title: "Band Score",
        value: "6.5",
        subtitle: "+0.5 vs Last Week",
        tone: StatTone::Accent,
    },
    StatCard {
        title: "Task Response",
        value: "7.0",
        subtitle: "Excellent adherence",
        tone: StatTone::Purple,
    },
    StatCard {
        title: "Completion",
        value: "42%",
        subtitle: "12 Lessons Remaining",
        tone: StatTone::Orange,
    },
];

const MOCK_BREAKDOWN: [BandStat; 4] = [
    BandStat {
        name: "Task Response",
        score: 6.5,
    },
    BandStat {
        name: "Coherence",
        score: 6.0,
    },
    BandStat {
        name: "Lexical",
        score: 7.0,
    },
    BandStat {
        name: "Grammar",
        score: 6.5,
    },
];

/// Serves dashboard statistics. Nothing here is computed from learner progress.
#[derive(Debug, Clone)]
pub struct DashboardService {
    cards: Vec<StatCard>,
    breakdown: Vec<BandStat>,
}

impl DashboardService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_stats(MOCK_CARDS.to_vec(), MOCK_BREAKDOWN.to_vec())
    }

    #[must_use]
    pub fn with_stats(cards: Vec<StatCard>, breakdown: Vec<BandStat>) -> Self {
        Self { cards, breakdown }
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            cards: self.cards.clone(),
            breakdown: self.breakdown.clone(),
            scale_max: BAND_MAX,
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
