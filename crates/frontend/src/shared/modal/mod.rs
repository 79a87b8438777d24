use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Модальное окно поверх затемнённого фона.
///
/// `on_close` вызывают Escape, клик по фону и кнопка закрытия;
/// клики внутри окна до фона не доходят.
#[component]
pub fn Modal(
    /// DOM id фона
    id: &'static str,
    title: &'static str,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div id=id class="modal" role="dialog" aria-modal="true" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <span class="close" title="Fechar" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </span>
                <h2>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
