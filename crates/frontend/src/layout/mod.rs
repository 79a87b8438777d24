pub mod header;

use header::Header;
use leptos::prelude::*;

/// Каркас страницы: шапка и одна колонка контента
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
        </div>
    }
}
