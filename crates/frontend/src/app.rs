use crate::app_shell::AppShell;
use crate::shared::api_utils::DashboardConfig;
use crate::shared::components::loading_overlay::LoadingOverlay;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_window();
    log::info!("Using API base {}", config.api_base);

    provide_context(NotificationService::new(config.notification_ttl_ms));
    provide_context(LoadingOverlay::new());
    provide_context(config);

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
