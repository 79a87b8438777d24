use leptos::prelude::*;
use thaw::*;

/// Полноэкранный индикатор загрузки для изменяющих операций и экспорта
#[derive(Clone, Copy)]
pub struct LoadingOverlay {
    pending: RwSignal<usize>,
}

impl LoadingOverlay {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(0),
        }
    }

    pub fn begin(&self) {
        self.pending.update(|n| *n += 1);
    }

    pub fn end(&self) {
        self.pending.update(|n| *n = n.saturating_sub(1));
    }

    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_loading_overlay() -> LoadingOverlay {
    use_context::<LoadingOverlay>().expect("LoadingOverlay not found in context")
}

#[component]
pub fn LoadingOverlayView() -> impl IntoView {
    let overlay = use_loading_overlay();

    view! {
        <Show when=move || overlay.is_busy()>
            <div class="loading-overlay">
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                    <Spinner />
                    <span>"Processando..."</span>
                </Flex>
            </div>
        </Show>
    }
}
