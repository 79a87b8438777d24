use super::chart_canvas::ChartCanvas;
use crate::dashboards::metrics_overview::api;
use crate::dashboards::metrics_overview::charts::ChartModel;
use crate::dashboards::metrics_overview::state::OverviewState;
use crate::shared::components::stat_card::StatCard;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Однократная загрузка сводки; ошибки только логируются
pub fn refresh_dashboard(state: RwSignal<OverviewState>, api_base: String) {
    let mut ticket = 0;
    state.update(|s| ticket = s.begin_refresh());

    spawn_local(async move {
        match api::fetch_dashboard(&api_base).await {
            Ok(summary) => {
                let mut applied = false;
                state.update(|s| applied = s.apply_response(ticket, &summary));
                if !applied {
                    log::debug!("Discarded stale dashboard response #{}", ticket);
                }
            }
            Err(e) => log::warn!("Dashboard refresh failed: {}", e),
        }
    });
}

/// Повторная загрузка каждые `interval_ms`, пока owner жив
pub fn start_refresh_loop(state: RwSignal<OverviewState>, api_base: String, interval_ms: u32) {
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !alive.try_get_value().unwrap_or(false) {
                break;
            }
            refresh_dashboard(state, api_base.clone());
        }
    });
}

#[component]
pub fn MetricsOverview(state: RwSignal<OverviewState>) -> impl IntoView {
    let stat = move |pick: fn(&OverviewState) -> String| Signal::derive(move || state.with(pick));
    let chart = move |pick: fn(&OverviewState) -> ChartModel| Memo::new(move |_| state.with(pick));

    let category = chart(|s| s.charts.category.clone());
    let time_series = chart(|s| s.charts.time_series.clone());
    let top_metrics = chart(|s| s.charts.top_metrics.clone());
    let category_totals = chart(|s| s.charts.category_totals.clone());

    view! {
        <section class="dashboard">
            <div class="stats-grid">
                <StatCard
                    label="Total de Métricas"
                    icon_name="hash"
                    id="totalMetrics"
                    value=stat(|s| s.stats.total_metrics.clone())
                />
                <StatCard
                    label="Valor Médio"
                    icon_name="trending-up"
                    id="averageValue"
                    value=stat(|s| s.stats.average_value.clone())
                />
                <StatCard
                    label="Categoria Top"
                    icon_name="layers"
                    id="topCategory"
                    value=stat(|s| s.stats.top_category.clone())
                />
                <StatCard
                    label="Valor Total"
                    icon_name="sum"
                    id="totalValue"
                    value=stat(|s| s.stats.total_value.clone())
                />
            </div>

            <div class="charts-grid">
                <ChartCanvas id="categoryChart" title="Distribuição por Categoria" model=category />
                <ChartCanvas id="timeSeriesChart" title="Série Temporal" model=time_series />
                <ChartCanvas id="topMetricsChart" title="Top Métricas" model=top_metrics />
                <ChartCanvas id="categoryTotalsChart" title="Totais por Categoria" model=category_totals />
            </div>
        </section>
    }
}
