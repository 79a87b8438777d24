use leptos::prelude::*;

/// Общая контурная рамка 24x24 для всех иконок
#[component]
fn Outline(size: u32, children: Children) -> impl IntoView {
    view! {
        <svg
            class="icon"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

/// Иконка по имени. Иконки карточек крупнее; неизвестное имя даёт часы.
pub fn icon(name: &str) -> AnyView {
    let size = match name {
        "hash" | "trending-up" | "layers" | "sum" => 20,
        _ => 16,
    };

    match name {
        "x" => view! {
            <Outline size=size>
                <path d="M18 6 6 18M6 6l12 12"/>
            </Outline>
        }
        .into_any(),
        "chevron-left" => view! {
            <Outline size=size>
                <path d="m15 18-6-6 6-6"/>
            </Outline>
        }
        .into_any(),
        "chevron-right" => view! {
            <Outline size=size>
                <path d="m9 18 6-6-6-6"/>
            </Outline>
        }
        .into_any(),
        "filter" => view! {
            <Outline size=size>
                <path d="M22 3H2l8 9.46V19l4 2v-8.54z"/>
            </Outline>
        }
        .into_any(),
        "search" => view! {
            <Outline size=size>
                <circle cx="11" cy="11" r="8"/>
                <path d="m21 21-4.35-4.35"/>
            </Outline>
        }
        .into_any(),
        "download" => view! {
            <Outline size=size>
                <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4M7 10l5 5 5-5M12 15V3"/>
            </Outline>
        }
        .into_any(),
        "trash" => view! {
            <Outline size=size>
                <path d="M3 6h18M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6M10 11v6M14 11v6"/>
            </Outline>
        }
        .into_any(),
        "log-in" => view! {
            <Outline size=size>
                <path d="M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4M10 17l5-5-5-5M15 12H3"/>
            </Outline>
        }
        .into_any(),
        "log-out" => view! {
            <Outline size=size>
                <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9"/>
            </Outline>
        }
        .into_any(),
        "hash" => view! {
            <Outline size=size>
                <path d="M4 9h16M4 15h16M10 3 8 21M16 3l-2 18"/>
            </Outline>
        }
        .into_any(),
        "trending-up" => view! {
            <Outline size=size>
                <path d="m23 6-9.5 9.5-5-5L1 18M17 6h6v6"/>
            </Outline>
        }
        .into_any(),
        "layers" => view! {
            <Outline size=size>
                <path d="M12 2 2 7l10 5 10-5zM2 17l10 5 10-5M2 12l10 5 10-5"/>
            </Outline>
        }
        .into_any(),
        "sum" => view! {
            <Outline size=size>
                <path d="M18 4H6l6 8-6 8h12"/>
            </Outline>
        }
        .into_any(),
        _ => view! {
            <Outline size=size>
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 8v4l3 3"/>
            </Outline>
        }
        .into_any(),
    }
}
