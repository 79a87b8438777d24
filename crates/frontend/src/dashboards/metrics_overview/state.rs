use contracts::dashboards::metrics_summary::DashboardSummary;
use leptos::prelude::*;

use super::charts::DashboardCharts;
use super::refresh::RefreshSequence;
use super::stats::DashboardStats;

/// Карточки и графики, обновляются из каждой принятой сводки
#[derive(Clone, Debug, Default)]
pub struct OverviewState {
    pub stats: DashboardStats,
    pub charts: DashboardCharts,
    pub sequence: RefreshSequence,
}

impl OverviewState {
    pub fn begin_refresh(&mut self) -> u64 {
        self.sequence.begin()
    }

    /// false, если ответ устарел и был отброшен
    pub fn apply_response(&mut self, ticket: u64, summary: &DashboardSummary) -> bool {
        if !self.sequence.accept(ticket) {
            return false;
        }
        self.stats.apply_summary(summary);
        self.charts.apply_summary(summary);
        true
    }
}

pub fn create_state() -> RwSignal<OverviewState> {
    RwSignal::new(OverviewState::default())
}
