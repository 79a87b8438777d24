use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful response of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Minimal identity kept next to the bearer token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserIdentity {
    /// Name shown in the header greeting
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

impl From<&LoginResponse> for UserIdentity {
    fn from(response: &LoginResponse) -> Self {
        Self {
            username: response.username.clone(),
            name: response.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_name() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "username": "admin"}"#).unwrap();
        let user = UserIdentity::from(&response);
        assert_eq!(user.display_name(), "admin");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user = UserIdentity {
            username: "admin".to_string(),
            name: Some("Administrador".to_string()),
        };
        assert_eq!(user.display_name(), "Administrador");
    }
}
