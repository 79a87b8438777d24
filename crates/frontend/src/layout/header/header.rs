use crate::domain::metric::actions::MetricAction;
use crate::domain::metric::api;
use crate::shared::api_utils::DashboardConfig;
use crate::shared::components::loading_overlay::use_loading_overlay;
use crate::shared::export::{save_export, ExportFormat};
use crate::shared::http::ApiError;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn ExportButton(format: ExportFormat) -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let overlay = use_loading_overlay();
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");

    let on_click = move |_| {
        let api_base = config.api_base.clone();
        let authorization = auth.authorization();
        overlay.begin();

        spawn_local(async move {
            let result = match api::export_metrics(&api_base, authorization.as_deref(), format).await
            {
                Ok(bytes) => save_export(&bytes, format).map_err(ApiError::Download),
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                log::error!("Export to {} failed: {}", format.label(), e);
            }
            MetricAction::Export(format)
                .notice_for(&result)
                .present(&notifications, &auth);
            overlay.end();
        });
    };

    view! {
        <Button on_click=on_click>
            {icon("download")}
            {format!("Exportar {}", format.label())}
        </Button>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let logout = move |_| auth.logout();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Dashboard de Métricas"</span>
            </div>
            <div class="header__actions">
                <Flex gap=FlexGap::Small style="align-items: center;">
                    <ExportButton format=ExportFormat::Excel />
                    <ExportButton format=ExportFormat::Pdf />
                    <Show
                        when=move || auth.session.with(|s| s.has_identity())
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| auth.open_login()
                            >
                                {icon("log-in")}
                                "Login"
                            </Button>
                        }
                    >
                        <span class="header__user" id="userInfo">
                            {move || auth.session.with(|s| s.greeting())}
                        </span>
                        <Button on_click=logout>
                            {icon("log-out")}
                            "Sair"
                        </Button>
                    </Show>
                </Flex>
            </div>
        </header>
    }
}
