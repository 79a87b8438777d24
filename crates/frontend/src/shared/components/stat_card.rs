use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка с одним показателем дашборда, например "Total de Métricas".
/// `id` ставится на элемент со значением.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    id: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <article class="stat-card">
            <span class="stat-icon">{icon(icon_name)}</span>
            <h3>{label}</h3>
            <p class="stat-value" id=id>{move || value.get()}</p>
        </article>
    }
}
