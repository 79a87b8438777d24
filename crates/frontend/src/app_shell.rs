//! Оболочка приложения: страница дашборда и общие оверлеи.

use crate::dashboards::metrics_overview::state as overview_state;
use crate::dashboards::metrics_overview::ui::dashboard::{refresh_dashboard, start_refresh_loop};
use crate::dashboards::metrics_overview::ui::MetricsOverview;
use crate::domain::metric::ui::details::MetricEntryForm;
use crate::domain::metric::ui::list::state as list_state;
use crate::domain::metric::ui::list::{load_metric_list, MetricList};
use crate::layout::Shell;
use crate::shared::api_utils::DashboardConfig;
use crate::shared::components::loading_overlay::LoadingOverlayView;
use crate::shared::notifications::{use_notifications, NotificationStack};
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginModal;
use leptos::prelude::*;

/// Сверху карточки и графики, ниже форма и таблица метрик.
///
/// Таблица грузится при старте и после каждого успешного создания/удаления;
/// периодически опрашивается только сводка дашборда.
#[component]
fn MetricsPage() -> impl IntoView {
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");
    let notifications = use_notifications();

    let overview = overview_state::create_state();
    let list = list_state::create_state(config.page_size);
    let api_base = StoredValue::new(config.api_base.clone());

    let reload_all = move || {
        load_metric_list(list, api_base.get_value(), notifications);
        refresh_dashboard(overview, api_base.get_value());
    };

    reload_all();
    start_refresh_loop(overview, config.api_base.clone(), config.refresh_interval_ms);

    let on_changed = Callback::new(move |_: ()| reload_all());

    view! {
        <Shell>
            <MetricsOverview state=overview />
            <div class="content-grid">
                <section class="form-section">
                    <h2>"Nova Métrica"</h2>
                    <MetricEntryForm on_created=on_changed />
                </section>
                <section class="table-section">
                    <h2>"Métricas"</h2>
                    <MetricList state=list on_changed=on_changed />
                </section>
            </div>
        </Shell>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <MetricsPage />
        <Show when=move || auth.login_open.get()>
            <LoginModal />
        </Show>
        <NotificationStack />
        <LoadingOverlayView />
    }
}
