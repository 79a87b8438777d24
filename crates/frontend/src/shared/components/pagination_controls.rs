use crate::shared::icons::icon;
use leptos::prelude::*;

/// Назад / номера страниц / вперёд и подпись "Mostrando a - b de n"
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Номера страниц для кнопок (уже обрезаны окном)
    #[prop(into)]
    visible_pages: Signal<Vec<usize>>,

    #[prop(into)]
    has_prev: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// "Mostrando 1 - 10 de 12"
    #[prop(into)]
    range_label: Signal<String>,

    /// Вызывается с -1 / +1
    on_step: Callback<i32>,

    /// Вызывается с номером нажатой страницы
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info" id="paginationInfo">{move || range_label.get()}</span>
            <button
                class="pagination-btn"
                id="prevPage"
                on:click=move |_| on_step.run(-1)
                disabled=move || !has_prev.get()
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <div class="page-numbers" id="pageNumbers">
                {move || {
                    let current = current_page.get();
                    visible_pages
                        .get()
                        .into_iter()
                        .map(|page| {
                            let class = if page == current { "page-number active" } else { "page-number" };
                            view! {
                                <button class=class on:click=move |_| on_page_change.run(page)>
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                class="pagination-btn"
                id="nextPage"
                on:click=move |_| on_step.run(1)
                disabled=move || !has_next.get()
                title="Próxima página"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
