//! Сессия с двумя состояниями: Anonymous и Authenticated.
//!
//! Токен только хранится и отправляется; валидность решает сервер.

use contracts::system::auth::{LoginResponse, UserIdentity};

use super::storage::{self, SessionStore};
use crate::shared::http::bearer_value;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthSession {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        /// None, если в хранилище остался только токен
        user: Option<UserIdentity>,
    },
}

impl AuthSession {
    /// Восстановить сессию, сохранённую при прошлой загрузке страницы.
    ///
    /// Токен без пользователя по-прежнему уходит в запросах, но приветствовать
    /// некого, поэтому в шапке остаётся кнопка входа.
    pub fn restore(store: &impl SessionStore) -> Self {
        match storage::load_token(store) {
            Some(token) => AuthSession::Authenticated {
                token,
                user: storage::load_user(store),
            },
            None => AuthSession::Anonymous,
        }
    }

    /// Anonymous -> Authenticated on a successful login response
    pub fn login(store: &impl SessionStore, response: &LoginResponse) -> Self {
        let user = UserIdentity::from(response);
        storage::save_session(store, &response.token, &user);
        AuthSession::Authenticated {
            token: response.token.clone(),
            user: Some(user),
        }
    }

    /// Явный выход очищает память и хранилище
    pub fn logout(store: &impl SessionStore) -> Self {
        storage::clear_session(store);
        AuthSession::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthSession::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthSession::Authenticated { token, .. } => Some(token),
            AuthSession::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            AuthSession::Authenticated { user, .. } => user.as_ref(),
            AuthSession::Anonymous => None,
        }
    }

    /// `Authorization` header value for outgoing requests
    pub fn authorization(&self) -> Option<String> {
        bearer_value(self.token())
    }

    /// Есть пользователь для показа в шапке
    pub fn has_identity(&self) -> bool {
        self.user().is_some()
    }

    /// "Olá, <имя>" для шапки
    pub fn greeting(&self) -> Option<String> {
        self.user().map(|u| format!("Olá, {}", u.display_name()))
    }
}
