use leptos::prelude::*;

use super::session::AuthSession;
use super::storage::LocalStorage;

/// Сигнал сессии и видимость окна логина, через контекст
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<AuthSession>,
    pub login_open: RwSignal<bool>,
}

impl AuthContext {
    pub fn restore() -> Self {
        Self {
            session: RwSignal::new(AuthSession::restore(&LocalStorage)),
            login_open: RwSignal::new(false),
        }
    }

    pub fn authorization(&self) -> Option<String> {
        self.session.with_untracked(|s| s.authorization())
    }

    pub fn open_login(&self) {
        self.login_open.set(true);
    }

    pub fn close_login(&self) {
        self.login_open.set(false);
    }

    pub fn logout(&self) {
        self.session.set(AuthSession::logout(&LocalStorage));
        log::info!("Session closed");
    }
}

/// Компонент-провайдер контекста аутентификации
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::restore());
    children()
}

/// Хук для доступа к состоянию аутентификации
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
