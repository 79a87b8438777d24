pub mod filter;
pub mod state;
pub mod table;

use self::filter::FilterInputs;
use self::state::MetricListState;
use self::table::{MetricRow, TableBody, EMPTY_TABLE_MESSAGE};
use crate::domain::metric::actions::LOAD_LIST_FAILED;
use crate::domain::metric::api;
use crate::shared::api_utils::DashboardConfig;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::loading_overlay::use_loading_overlay;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::system::auth::context::use_auth;
use contracts::domain::metric::{MetricCategory, MetricId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DELETE_CONFIRMATION: &str = "Tem certeza que deseja deletar esta métrica?";

/// Загрузить `/metrics` в состояние списка; ошибка показывается уведомлением
pub fn load_metric_list(
    state: RwSignal<MetricListState>,
    api_base: String,
    notifications: NotificationService,
) {
    spawn_local(async move {
        match api::fetch_metrics(&api_base).await {
            Ok(metrics) => {
                log::debug!("Loaded {} metrics", metrics.len());
                state.update(|s| s.load_metrics(metrics));
            }
            Err(e) => {
                log::error!("Failed to load metrics: {}", e);
                state.update(|s| s.on_load_failed());
                notifications.error(LOAD_LIST_FAILED);
            }
        }
    });
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(DELETE_CONFIRMATION).ok())
        .unwrap_or(false)
}

/// Привязка поля ввода к одному из полей фильтра
fn filter_input(
    state: RwSignal<MetricListState>,
    field: fn(&mut FilterInputs) -> &mut String,
) -> impl Fn(leptos::ev::Event) + Copy {
    move |ev| {
        let value = event_target_value(&ev);
        state.update(|s| *field(&mut s.inputs) = value);
    }
}

#[component]
fn MetricTableRow(row: MetricRow, on_delete: Callback<MetricId>) -> impl IntoView {
    let id = row.id;
    view! {
        <tr>
            <td>{row.name}</td>
            <td>
                <span style=format!("color: {}", row.color)>"●"</span>
                " "
                {row.category}
            </td>
            <td><strong>{row.value}</strong></td>
            <td>{row.timestamp}</td>
            <td>
                <button class="btn-delete" on:click=move |_| on_delete.run(id)>
                    {icon("trash")}
                    "Deletar"
                </button>
            </td>
        </tr>
    }
}

/// Таблица метрик с поиском, фильтрами и пагинацией.
///
/// `on_changed` вызывается после успешного удаления, чтобы перезагрузить
/// список и дашборд.
#[component]
pub fn MetricList(state: RwSignal<MetricListState>, on_changed: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let overlay = use_loading_overlay();
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");

    let filters_expanded = RwSignal::new(false);
    let active_filters = Signal::derive(move || state.with(|s| s.applied.active_count()));

    let apply = move |_| {
        state.update(|s| s.apply_filters());
        notifications.success("Filtros aplicados");
    };

    let clear = move |_| {
        state.update(|s| s.clear_filters());
        notifications.info("Filtros limpos");
    };

    let on_delete = Callback::new(move |id: MetricId| {
        if !confirm_delete() {
            return;
        }
        let api_base = config.api_base.clone();
        let authorization = auth.authorization();
        overlay.begin();

        spawn_local(async move {
            let result = api::delete_metric(&api_base, authorization.as_deref(), id).await;
            if let Err(e) = &result {
                log::error!("Failed to delete metric {}: {}", id, e);
            }
            let mut notice = None;
            state.update(|s| notice = Some(s.on_delete_result(id, &result)));
            if let Some(notice) = notice {
                notice.present(&notifications, &auth);
            }
            overlay.end();
            if result.is_ok() {
                on_changed.run(());
            }
        });
    });

    let page_view = Memo::new(move |_| state.with(|s| s.page_view()));

    view! {
        <section class="metrics-list">
            <div class="list-toolbar">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="search"
                        id="searchInput"
                        placeholder="Buscar métricas..."
                        prop:value=move || state.with(|s| s.inputs.search.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.search(term));
                        }
                    />
                </div>
            </div>

            <FilterPanel open=filters_expanded applied_count=active_filters>
                <div class="filter-grid">
                    <div class="form-group">
                        <label for="filterCategory">"Categoria"</label>
                        <select
                            id="filterCategory"
                            prop:value=move || state.with(|s| s.inputs.category.clone())
                            on:change=filter_input(state, |i| &mut i.category)
                        >
                            <option value="">"Todas"</option>
                            {MetricCategory::ALL
                                .iter()
                                .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="filterMinValue">"Valor mínimo"</label>
                        <input
                            type="number"
                            id="filterMinValue"
                            step="0.01"
                            prop:value=move || state.with(|s| s.inputs.min_value.clone())
                            on:input=filter_input(state, |i| &mut i.min_value)
                        />
                    </div>
                    <div class="form-group">
                        <label for="filterMaxValue">"Valor máximo"</label>
                        <input
                            type="number"
                            id="filterMaxValue"
                            step="0.01"
                            prop:value=move || state.with(|s| s.inputs.max_value.clone())
                            on:input=filter_input(state, |i| &mut i.max_value)
                        />
                    </div>
                    <div class="form-group">
                        <label for="filterStartDate">"Data inicial"</label>
                        <input
                            type="date"
                            id="filterStartDate"
                            prop:value=move || state.with(|s| s.inputs.start_date.clone())
                            on:input=filter_input(state, |i| &mut i.start_date)
                        />
                    </div>
                    <div class="form-group">
                        <label for="filterEndDate">"Data final"</label>
                        <input
                            type="date"
                            id="filterEndDate"
                            prop:value=move || state.with(|s| s.inputs.end_date.clone())
                            on:input=filter_input(state, |i| &mut i.end_date)
                        />
                    </div>
                </div>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=apply>
                        "Aplicar"
                    </Button>
                    <Button on_click=clear>"Limpar"</Button>
                </Flex>
            </FilterPanel>

            {move || {
                if !state.with(|s| s.is_loaded) {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; padding: 24px;">
                            <Spinner />
                            <span>"Carregando métricas..."</span>
                        </Flex>
                    }
                    .into_any();
                }

                let body = match state.with(|s| s.table_body()) {
                    TableBody::Placeholder => view! {
                        <tr>
                            <td colspan="5" class="table-empty">{EMPTY_TABLE_MESSAGE}</td>
                        </tr>
                    }
                    .into_any(),
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <MetricTableRow row=row on_delete=on_delete /> })
                        .collect_view()
                        .into_any(),
                };

                view! {
                    <table class="metrics-table">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"Categoria"</th>
                                <th>"Valor"</th>
                                <th>"Data/Hora"</th>
                                <th>"Ações"</th>
                            </tr>
                        </thead>
                        <tbody id="metricsTableBody">{body}</tbody>
                    </table>
                }
                .into_any()
            }}

            <PaginationControls
                current_page=Signal::derive(move || page_view.with(|p| p.current_page))
                visible_pages=Signal::derive(move || page_view.with(|p| p.visible_pages.clone()))
                has_prev=Signal::derive(move || page_view.with(|p| p.has_prev()))
                has_next=Signal::derive(move || page_view.with(|p| p.has_next()))
                range_label=Signal::derive(move || page_view.with(|p| p.range_label()))
                on_step=Callback::new(move |direction: i32| state.update(|s| s.change_page(direction)))
                on_page_change=Callback::new(move |page: usize| state.update(|s| s.go_to_page(page)))
            />
        </section>
    }
}
