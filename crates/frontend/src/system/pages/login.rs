use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::DashboardConfig;
use crate::shared::http::ApiError;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use crate::system::auth::session::AuthSession;
use crate::system::auth::{api, storage::LocalStorage};

/// Сообщение при неудачном входе
pub fn login_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Unauthorized(_) | ApiError::Status(_) => "Credenciais inválidas",
        _ => "Erro ao fazer login",
    }
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notifications();
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let close = Callback::new(move |_| auth.close_login());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let api_base = config.api_base.clone();

        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(&api_base, username_val, password_val).await {
                Ok(response) => {
                    auth.session.set(AuthSession::login(&LocalStorage, &response));
                    auth.close_login();
                    set_password.set(String::new());
                    log::info!("Logged in as {}", response.username);
                    notifications.success("Login realizado com sucesso!");
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    notifications.error(login_failure_message(&e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <Modal id="loginModal" title="Login" on_close=close>
            <form class="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="loginUsername">"Usuário"</label>
                    <input
                        type="text"
                        id="loginUsername"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <div class="form-group">
                    <label for="loginPassword">"Senha"</label>
                    <input
                        type="password"
                        id="loginPassword"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_loading.get()
                    />
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_message() {
        assert_eq!(
            login_failure_message(&ApiError::Unauthorized(401)),
            "Credenciais inválidas"
        );
        assert_eq!(
            login_failure_message(&ApiError::Status(400)),
            "Credenciais inválidas"
        );
        assert_eq!(
            login_failure_message(&ApiError::Transport("offline".into())),
            "Erro ao fazer login"
        );
    }
}
