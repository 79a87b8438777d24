use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопка "Filtros" со счётчиком применённых фильтров; содержимое
/// панели показывается только в раскрытом состоянии.
#[component]
pub fn FilterPanel(
    #[prop(into)] open: RwSignal<bool>,
    #[prop(into)] applied_count: Signal<usize>,
    children: ChildrenFn,
) -> impl IntoView {
    let badge = move || {
        let count = applied_count.get();
        (count > 0).then(|| view! { <span class="filter-badge">{count}</span> })
    };

    view! {
        <div class="filters-panel" class:filters-panel--open=move || open.get()>
            <button
                type="button"
                id="toggleFilters"
                class="filter-toggle"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("filter")}
                <span>"Filtros"</span>
                {badge}
            </button>
            <Show when=move || open.get()>
                <div class="filters-body">{children()}</div>
            </Show>
        </div>
    }
}
