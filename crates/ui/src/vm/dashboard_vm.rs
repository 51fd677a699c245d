use services::{DashboardSnapshot, StatCard, StatTone};
use wt2_core::model::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub value_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarVm {
    pub label: &'static str,
    pub score_label: String,
    /// Bar height as a percentage of the chart area.
    pub height_pct: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub cards: Vec<StatCardVm>,
    pub bars: Vec<BarVm>,
    /// Axis labels from top to bottom.
    pub axis: Vec<String>,
}

fn card_vm(card: &StatCard, theme: &Theme) -> StatCardVm {
    let value_class = match card.tone {
        StatTone::Accent => format!("stat-value stat-value--{}", theme.id),
        StatTone::Purple => "stat-value stat-value--purple".to_string(),
        StatTone::Orange => "stat-value stat-value--orange".to_string(),
    };
    StatCardVm {
        title: card.title,
        value: card.value,
        subtitle: card.subtitle,
        value_class,
    }
}

#[must_use]
pub fn map_dashboard(snapshot: &DashboardSnapshot, theme: &Theme) -> DashboardVm {
    let max = snapshot.scale_max;
    let bars = snapshot
        .breakdown
        .iter()
        .map(|stat| {
            let ratio = if max > 0.0 { (stat.score / max).clamp(0.0, 1.0) } else { 0.0 };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let height_pct = (ratio * 100.0).round() as u32;
            BarVm {
                label: stat.name,
                score_label: format!("{:.1}", stat.score),
                height_pct,
            }
        })
        .collect();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let top = max.max(0.0).round() as u32;
    let axis = (0..=3)
        .rev()
        .map(|step| (top * step / 3).to_string())
        .collect();

    DashboardVm {
        cards: snapshot.cards.iter().map(|card| card_vm(card, theme)).collect(),
        bars,
        axis,
    }
}
