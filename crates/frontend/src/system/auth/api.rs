use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::http::{self, ApiError};

/// Вход по логину и паролю
pub async fn login(
    api_base: &str,
    username: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url(api_base, "/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let response = http::ensure_success(response)?;
    http::read_json::<LoginResponse>(response).await
}
